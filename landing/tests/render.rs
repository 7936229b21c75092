//! Server-side rendering of the landing page: session and menu variants.

use carbonmarket_landing::hooks::{ScrollShadow, UserSession};
use carbonmarket_landing::sections::{HeroSection, MobilePanel, Navbar};
use carbonmarket_landing::{PrerenderState, prerender_landing};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use pretty_assertions::assert_eq;

fn render(token: Option<&str>, menu_opened: bool) -> String {
    prerender_landing(&PrerenderState {
        token: token.map(str::to_owned),
        menu_opened,
        ..Default::default()
    })
}

fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

#[test]
fn document_has_doctype() {
    let html = render(None, false);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<main>"));
}

#[test]
fn signed_in_shows_account_controls_in_both_layouts() {
    let html = render(Some("jwt-token"), true);

    assert_eq!(count(&html, "data-nav=\"mobile\""), 1);
    assert_eq!(count(&html, "My account"), 1);
    assert_eq!(count(&html, "Dashboard"), 2);
    assert_eq!(count(&html, "Log out"), 2);
    assert_eq!(count(&html, "Log in"), 0);
    assert_eq!(count(&html, "Login"), 0);
}

#[test]
fn guest_shows_login_in_both_layouts() {
    let html = render(None, true);

    assert_eq!(count(&html, "Log in"), 1);
    assert_eq!(count(&html, "Login"), 1);
    assert_eq!(count(&html, "Dashboard"), 0);
    assert_eq!(count(&html, "Log out"), 0);
    assert_eq!(count(&html, "My account"), 0);
}

#[test]
fn empty_token_is_a_guest() {
    let html = render(Some(""), false);
    assert!(html.contains("Log in"));
    assert!(!html.contains("Log out"));
}

#[test]
fn mobile_panel_only_when_menu_open() {
    let closed = render(None, false);
    assert!(!closed.contains("data-nav=\"mobile\""));
    assert!(closed.contains("aria-expanded=\"false\""));

    let open = render(None, true);
    assert!(open.contains("data-nav=\"mobile\""));
    assert!(open.contains("aria-expanded=\"true\""));
}

#[test]
fn nav_links_render_in_each_open_layout() {
    let html = render(None, true);
    assert_eq!(count(&html, "href=\"/token-issuance\""), 2);
    assert_eq!(count(&html, "href=\"/offset-project\""), 2);
    assert_eq!(count(&html, "Token Issuance"), 2);
}

#[test]
fn navbar_starts_without_shadow() {
    let html = render(Some("jwt"), true);
    assert!(!html.contains("shadow-2xl"));
    assert!(html.contains("bg-gradient-to-t from-[#11909d] to-blue-900"));
}

fn render_mobile_panel(offset: f64) -> String {
    let owner = Owner::new();
    owner.with(|| {
        let shadow = ScrollShadow::new(100.0);
        shadow.observe(offset);
        let session = UserSession::guest();
        let on_logout = Callback::new(|_: ()| {});
        view! { <MobilePanel shadow=shadow session=session on_logout=on_logout /> }.to_html()
    })
}

#[test]
fn mobile_panel_casts_shadow_once_scrolled_past_threshold() {
    assert!(render_mobile_panel(150.0).contains("shadow-2xl"));
    assert!(!render_mobile_panel(50.0).contains("shadow-2xl"));
    assert!(!render_mobile_panel(100.0).contains("shadow-2xl"));
}

#[test]
fn navbar_renders_without_any_context() {
    let owner = Owner::new();
    let html = owner.with(|| view! { <Navbar /> }.to_html());
    assert!(html.contains("Log in"));
    assert!(html.contains("src=\"vite.svg\""));
}

#[test]
fn hero_renders_three_statistics() {
    let html = view! { <HeroSection /> }.to_html();

    assert_eq!(count(&html, "data-stat="), 3);
    for description in [
        "Carbon Removal Projects",
        "Tonnes of Carbon Removed",
        "Paid to Farmers",
    ] {
        assert!(html.contains(description), "missing {description}");
    }
    assert!(html.contains("18+"));
    assert!(html.contains("123k"));
    assert!(html.contains("$1.8m"));
    assert_eq!(count(&html, "<sup>+</sup>"), 2);
    assert!(!html.contains("&lt;sup&gt;"));
}

#[test]
fn hero_uses_static_assets_and_copy() {
    let html = view! { <HeroSection /> }.to_html();
    assert!(html.contains("/assets/images/home-bg-hero.png"));
    assert!(html.contains("/assets/images/hero_certificate.png"));
    assert!(html.contains("Own, Track, and Showcase Verified Carbon Removal"));
    assert!(html.contains("most transparent carbon removal marketplace"));
}
