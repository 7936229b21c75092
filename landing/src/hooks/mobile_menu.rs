use leptos::prelude::*;
use tracing::debug;

/// Visibility of the mobile navigation panel.
///
/// Shared through context so the layout can close the panel on
/// navigation while the navbar opens it.
#[derive(Clone, Copy, Debug)]
pub struct MobileMenu {
    opened: RwSignal<bool>,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(false),
        }
    }

    /// Tracked read of the open flag.
    pub fn opened(&self) -> bool {
        self.opened.get()
    }

    pub fn open_menu(&self) {
        debug!("mobile menu opened");
        self.opened.set(true);
    }

    pub fn close_menu(&self) {
        debug!("mobile menu closed");
        self.opened.set(false);
    }

    pub fn toggle(&self) {
        if self.opened.get_untracked() {
            self.close_menu();
        } else {
            self.open_menu();
        }
    }
}

impl Default for MobileMenu {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_mobile_menu() -> MobileMenu {
    let menu = MobileMenu::new();
    provide_context(menu);
    menu
}

pub fn use_mobile_menu() -> MobileMenu {
    use_context::<MobileMenu>().unwrap_or_else(provide_mobile_menu)
}
