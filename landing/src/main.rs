// Carbonmarket landing page, Leptos 0.8 CSR
// Developed by The Carbonmarket Team (c)2025

use carbonmarket_landing::{App, SiteConfig, site, telemetry};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = SiteConfig::default();
    telemetry::init(config.log_level);
    tracing::info!(version = site::VERSION, "mounting landing page");

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
