use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::hooks::{MobileMenu, use_mobile_menu};
use crate::sections::Navbar;

/// Page chrome for the marketing pages: sticky navbar above the content.
///
/// Must be rendered inside a `<Router>`. The mobile panel is closed
/// whenever the current path changes.
#[component]
pub fn LandingLayout(children: Children) -> impl IntoView {
    let menu = use_mobile_menu();
    let location = use_location();

    Effect::new(move |previous: Option<String>| {
        let path = location.pathname.get();
        follow_navigation(menu, previous.as_deref(), &path);
        path
    });

    view! {
        <Navbar />
        <main>{children()}</main>
    }
}

/// True once the path differs from the one last seen. The first run only
/// records the path.
pub fn navigated(previous: Option<&str>, path: &str) -> bool {
    previous.is_some_and(|previous| previous != path)
}

fn follow_navigation(menu: MobileMenu, previous: Option<&str>, path: &str) {
    if navigated(previous, path) {
        menu.close_menu();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_run_is_not_navigation() {
        assert!(!navigated(None, "/"));
    }

    #[test]
    fn same_path_is_not_navigation() {
        assert!(!navigated(Some("/offset-project"), "/offset-project"));
    }

    #[test]
    fn changed_path_is_navigation() {
        assert!(navigated(Some("/"), "/token-issuance"));
    }

    #[test]
    fn open_menu_closes_only_after_path_change() {
        let owner = Owner::new();
        owner.with(|| {
            let menu = MobileMenu::new();
            menu.open_menu();

            follow_navigation(menu, None, "/");
            assert!(menu.opened());
            follow_navigation(menu, Some("/"), "/");
            assert!(menu.opened());
            follow_navigation(menu, Some("/"), "/token-issuance");
            assert!(!menu.opened());
        });
    }
}
