//! SVG icon components using Material Symbols.
//!
//! Icons are inlined as path data so the page needs no icon font or
//! runtime icon fetch. All paths use a 24x24 viewBox.

use leptos::prelude::*;

/// Renders an inline SVG icon from a path data string.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_MENU class="text-3xl" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in CSS units
    #[prop(default = "1em")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 24 24"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Glyph for the mobile toggle: a cross while the panel is open.
pub fn menu_toggle_icon(opened: bool) -> &'static str {
    if opened { ICON_CLOSE } else { ICON_MENU }
}

// =============================================================================
// Material Symbols (filled)
// =============================================================================

pub const ICON_MENU: &str = "M3 18h18v-2H3v2zm0-5h18v-2H3v2zm0-7v2h18V6H3z";

pub const ICON_CLOSE: &str = "M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z";

pub const ICON_USER: &str = "M12 12c2.21 0 4-1.79 4-4s-1.79-4-4-4-4 1.79-4 4 1.79 4 4 4zm0 2c-2.67 0-8 1.34-8 4v2h16v-2c0-2.66-5.33-4-8-4z";

pub const ICON_LEAF: &str = "M6.05 8.05c-2.73 2.73-2.73 7.15-.02 9.88 1.47-3.4 4.09-6.24 7.36-7.93-2.77 2.34-4.71 5.61-5.39 9.32 2.6 1.23 5.8.78 7.95-1.37C19.43 14.47 20 4 20 4S9.53 4.57 6.05 8.05z";

pub const ICON_EARTH_LEAF: &str = "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-1 17.93c-3.95-.49-7-3.85-7-7.93 0-.62.08-1.21.21-1.79L9 15v1c0 1.1.9 2 2 2v1.93zm6.9-2.54c-.26-.81-1-1.39-1.9-1.39h-1v-3c0-.55-.45-1-1-1H8v-2h2c.55 0 1-.45 1-1V7h2c1.1 0 2-.9 2-2v-.41c2.93 1.19 5 4.06 5 7.41 0 2.08-.8 3.97-2.1 5.39z";

pub const ICON_WALLET: &str = "M21 18v1c0 1.1-.9 2-2 2H5c-1.11 0-2-.9-2-2V5c0-1.1.89-2 2-2h14c1.1 0 2 .9 2 2v1h-9c-1.11 0-2 .9-2 2v8c0 1.1.89 2 2 2h9zm-9-2h10V8H12v8zm4-2.5c-.83 0-1.5-.67-1.5-1.5s.67-1.5 1.5-1.5 1.5.67 1.5 1.5-.67 1.5-1.5 1.5z";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_icon_follows_menu_state() {
        assert_eq!(menu_toggle_icon(true), ICON_CLOSE);
        assert_eq!(menu_toggle_icon(false), ICON_MENU);
    }
}
