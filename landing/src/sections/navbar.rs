use leptos::prelude::*;
use tracing::warn;

use crate::components::{AccountMenu, Icon, menu_toggle_icon};
use crate::hooks::{
    ScrollShadow, SessionView, UserSession, use_mobile_menu, use_scroll_shadow, use_user,
};
use crate::site::{
    DASHBOARD_ROUTE, HOME_ROUTE, LOGIN_ROUTE, LOGO_IMAGE, NAV_LINKS, NAVBAR_BACKGROUND,
    SHADOW_CLASS,
};

const DESKTOP_LINK: &str = "rounded-lg px-4 py-2 text-white text-base normal-case hover:bg-white/10";
const MOBILE_LINK: &str = "rounded-lg px-4 py-2 text-white text-sm normal-case hover:bg-white/10";
const LOGIN_BUTTON: &str = "rounded-lg px-4 py-2 bg-secondary hover:bg-secondary text-black text-sm normal-case";

/// Shadow class for the current scroll state (empty when above the threshold).
pub fn shadow_class(past_threshold: bool) -> &'static str {
    if past_threshold { SHADOW_CLASS } else { "" }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let menu = use_mobile_menu();
    let session = use_user();
    let shadow = use_scroll_shadow();

    let logout = Callback::new(move |_: ()| {
        if let Err(err) = session.logout() {
            warn!(%err, "logout failed");
        }
    });

    view! {
        <div class="sticky top-0 z-20">
            <div class=move || format!("relative {}", shadow_class(shadow.active()))>
                <div class=format!("relative px-6 py-4 z-20 {NAVBAR_BACKGROUND}")>
                    <div class="container max-w-6xl mx-auto">
                        <div class="flex justify-between items-center md:items-end">
                            <a href=HOME_ROUTE>
                                <img src=LOGO_IMAGE alt="Logo" class="w-12" />
                            </a>

                            <div class="hidden lg:flex gap-1" data-nav="desktop">
                                {NAV_LINKS
                                    .iter()
                                    .map(|link| view! { <a href=link.to class=DESKTOP_LINK>{link.label}</a> })
                                    .collect_view()}
                            </div>

                            <button
                                type="button"
                                class="text-3xl flex lg:hidden text-white"
                                aria-label="Toggle navigation"
                                aria-expanded=move || menu.opened().to_string()
                                on:click=move |_| menu.toggle()
                            >
                                {move || view! { <Icon path=menu_toggle_icon(menu.opened()) /> }}
                            </button>

                            {move || match session.view() {
                                SessionView::Account => {
                                    view! { <AccountMenu on_logout=logout /> }.into_any()
                                }
                                SessionView::Guest => {
                                    view! {
                                        <a
                                            href=LOGIN_ROUTE
                                            class=format!("hidden lg:flex {LOGIN_BUTTON}")
                                            data-nav="desktop"
                                        >
                                            "Log in"
                                        </a>
                                    }
                                        .into_any()
                                }
                            }}
                        </div>
                    </div>
                </div>

                <Show when=move || menu.opened()>
                    <MobilePanel shadow=shadow session=session on_logout=logout />
                </Show>
            </div>
        </div>
    }
}

/// Drop-down navigation shown below the bar on small screens.
#[component]
pub fn MobilePanel(
    shadow: ScrollShadow,
    session: UserSession,
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            class=move || {
                format!(
                    "absolute w-full flex lg:hidden flex-col items-center backdrop-blur-2xl px-4 py-4 {} {NAVBAR_BACKGROUND}",
                    shadow_class(shadow.active()),
                )
            }
            data-nav="mobile"
        >
            {NAV_LINKS
                .iter()
                .map(|link| view! { <a href=link.to class=MOBILE_LINK>{link.label}</a> })
                .collect_view()}

            <div class="h-0.5 bg-white bg-opacity-25 w-full my-4"></div>

            {move || match session.view() {
                SessionView::Account => {
                    view! {
                        <a href=DASHBOARD_ROUTE class=MOBILE_LINK>
                            "Dashboard"
                        </a>
                        <button type="button" class=MOBILE_LINK on:click=move |_| on_logout.run(())>
                            "Log out"
                        </button>
                    }
                        .into_any()
                }
                SessionView::Guest => {
                    view! {
                        <a href=LOGIN_ROUTE class=LOGIN_BUTTON>
                            "Login"
                        </a>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_class_applies_past_threshold() {
        assert_eq!(shadow_class(ScrollShadow::is_past(100.0, 150.0)), "shadow-2xl");
        assert_eq!(shadow_class(ScrollShadow::is_past(100.0, 50.0)), "");
        assert_eq!(shadow_class(ScrollShadow::is_past(100.0, 100.0)), "");
    }
}
