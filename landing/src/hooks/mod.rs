//! Reactive collaborators consumed by the landing components.
//!
//! Each hook reads its state from Leptos context and falls back to fresh
//! state when nothing was provided, so components render in isolation
//! (prerender, tests) without panicking.

mod mobile_menu;
mod scroll;
mod session;

pub use mobile_menu::{MobileMenu, provide_mobile_menu, use_mobile_menu};
pub use scroll::{ScrollShadow, ScrollSubscription, current_scroll_offset, use_scroll_shadow};
pub use session::{
    BrowserTokenStore, MemoryTokenStore, SessionView, TokenStore, UserSession,
    provide_user_session, use_user,
};
