//! Static HTML rendering of the landing page.
//!
//! Uses Leptos 0.8's `RenderHtml` trait; no reactive runtime or hydration
//! is involved, effects (the scroll listener) never run.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::config::{SiteConfig, provide_site_config};
use crate::hooks::{MemoryTokenStore, UserSession, provide_mobile_menu, provide_user_session};
use crate::pages::HomePage;
use crate::sections::Navbar;

/// Visitor state to bake into a prerendered page.
#[derive(Clone, Debug, Default)]
pub struct PrerenderState {
    /// Session token; `None` renders the guest controls
    pub token: Option<String>,
    /// Render with the mobile panel expanded
    pub menu_opened: bool,
    pub config: SiteConfig,
}

/// Render the navbar and home page into a complete HTML document.
///
/// # Example
///
/// ```rust
/// use carbonmarket_landing::{PrerenderState, prerender_landing};
///
/// let html = prerender_landing(&PrerenderState::default());
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains("Log in"));
/// ```
pub fn prerender_landing(state: &PrerenderState) -> String {
    let owner = Owner::new();
    let body = owner.with(|| {
        provide_site_config(state.config.clone());
        let menu = provide_mobile_menu();
        if state.menu_opened {
            menu.open_menu();
        }
        let store = match &state.token {
            Some(token) => MemoryTokenStore::with_token(token.clone()),
            None => MemoryTokenStore::default(),
        };
        provide_user_session(UserSession::new(store));

        view! {
            <Navbar />
            <main>
                <HomePage />
            </main>
        }
        .to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\" /><title>Carbonmarket</title></head><body>{body}</body></html>"
    )
}
