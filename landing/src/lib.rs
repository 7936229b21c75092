//! # carbonmarket-landing
//!
//! Landing page chrome for the carbon removal marketplace, built with
//! [Leptos](https://leptos.dev/) 0.8.
//!
//! ## Components
//!
//! ```text
//! App
//! └── Router
//!     └── LandingLayout
//!         ├── Navbar
//!         │   ├── AccountMenu      (signed in, desktop)
//!         │   └── MobilePanel      (menu open, small screens)
//!         └── HomePage
//!             └── HeroSection
//!                 └── StatEntry x3
//! ```
//!
//! The navbar reads three collaborators from context: [`hooks::MobileMenu`]
//! (panel visibility), [`hooks::UserSession`] (token presence, logout) and
//! [`config::SiteConfig`]. Missing contexts fall back to closed menu, guest
//! session and default config.
//!
//! ## Features
//!
//! - `csr` - browser build, mounted by the `carbonmarket-landing` binary
//! - `ssr` (default) - static rendering through [`prerender_landing`]
//!
//! ---
//!
//! Developed by The Carbonmarket Team (c)2025

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod layout;
pub mod pages;
pub mod prerender;
pub mod sections;
pub mod site;
pub mod telemetry;
pub mod types;

use leptos::prelude::*;
use leptos_router::components::Router;

pub use config::SiteConfig;
pub use error::SessionError;
pub use prerender::{PrerenderState, prerender_landing};

use config::provide_site_config;
use hooks::{BrowserTokenStore, UserSession, provide_mobile_menu, provide_user_session};
use layout::LandingLayout;
use pages::HomePage;

/// Browser entry component: provides the collaborators and the router.
#[component]
pub fn App(#[prop(optional)] config: Option<SiteConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let token_key = config.token_storage_key;
    provide_site_config(config);
    provide_mobile_menu();
    provide_user_session(UserSession::new(BrowserTokenStore::new(token_key)));

    view! {
        <Router>
            <LandingLayout>
                <HomePage />
            </LandingLayout>
        </Router>
    }
}
