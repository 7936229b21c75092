//! Small widgets shared by the landing sections.

mod account_menu;
mod icons;

pub use account_menu::AccountMenu;
pub use icons::*;
