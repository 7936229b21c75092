use leptos::ev;
use leptos::prelude::*;

use super::{ICON_USER, Icon};
use crate::site::DASHBOARD_ROUTE;

/// "My account" dropdown for signed-in visitors (desktop only).
///
/// The list stays in the DOM and is hidden with a class while closed.
/// Escape closes it; the key listener lives as long as the menu.
#[component]
pub fn AccountMenu(on_logout: Callback<()>) -> impl IntoView {
    let (open, set_open) = signal(false);

    Effect::new(move || {
        let handle = window_event_listener(ev::keydown, move |event| {
            if dismisses_menu(&event.key()) {
                set_open.set(false);
            }
        });
        on_cleanup(move || handle.remove());
    });

    view! {
        <div class="relative hidden lg:block" data-nav="desktop">
            <button
                type="button"
                class="flex items-center gap-1 px-0 text-base normal-case text-white"
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <Icon path=ICON_USER class="text-2xl" />
                "My account"
            </button>
            <ul
                role="menu"
                class=move || {
                    if open.get() {
                        "absolute right-0 mt-2 min-w-[10rem] rounded-md bg-white py-2 text-black shadow-lg"
                    } else {
                        "hidden"
                    }
                }
            >
                <li role="menuitem" class="px-4 py-2 hover:bg-gray-100">
                    <a href=DASHBOARD_ROUTE on:click=move |_| set_open.set(false)>
                        "Dashboard"
                    </a>
                </li>
                <li
                    role="menuitem"
                    class="cursor-pointer px-4 py-2 hover:bg-gray-100"
                    on:click=move |_| {
                        set_open.set(false);
                        on_logout.run(());
                    }
                >
                    "Log out"
                </li>
            </ul>
        </div>
    }
}

/// Keys that close an open dropdown ("Esc" is the legacy Edge name).
fn dismisses_menu(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}
