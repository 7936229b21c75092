//! Scroll-driven navbar shadow.

use leptos::ev;
use leptos::prelude::*;
use tracing::debug;

use crate::config::use_site_config;

/// Whether the page has scrolled past the shadow threshold.
#[derive(Clone, Copy, Debug)]
pub struct ScrollShadow {
    past_threshold: RwSignal<bool>,
    threshold: f64,
}

impl ScrollShadow {
    pub fn new(threshold: f64) -> Self {
        Self {
            past_threshold: RwSignal::new(false),
            threshold,
        }
    }

    /// Strictly greater than: sitting exactly on the threshold is not past it.
    pub fn is_past(threshold: f64, offset: f64) -> bool {
        offset > threshold
    }

    /// Feeds a fresh scroll offset. Only writes when the flag flips.
    pub fn observe(&self, offset: f64) {
        let next = Self::is_past(self.threshold, offset);
        if self.past_threshold.get_untracked() != next {
            self.past_threshold.set(next);
        }
    }

    /// Tracked read of the flag.
    pub fn active(&self) -> bool {
        self.past_threshold.get()
    }
}

/// Window scroll listener that detaches itself when dropped.
pub struct ScrollSubscription {
    handle: Option<WindowListenerHandle>,
}

impl ScrollSubscription {
    /// Attaches the listener and reports the current offset straight away,
    /// so a page restored mid-scroll starts with the right state.
    pub fn acquire(on_offset: impl Fn(f64) + 'static) -> Self {
        on_offset(current_scroll_offset());
        let handle = window_event_listener(ev::scroll, move |_| {
            on_offset(current_scroll_offset());
        });
        debug!("scroll listener attached");
        Self {
            handle: Some(handle),
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.remove();
            debug!("scroll listener released");
        }
    }
}

/// Vertical scroll offset of the document, 0 when there is no window.
pub fn current_scroll_offset() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let root_scroll_top = || {
        window
            .document()
            .and_then(|document| document.document_element())
            .map(|root| root.scroll_top())
    };
    pick_scroll_offset(window.scroll_y().ok(), root_scroll_top)
}

/// Prefers the window offset: it keeps fractional pixels on HiDPI screens,
/// while the root element's `scrollTop` binding is truncated to an `i32`.
fn pick_scroll_offset(scroll_y: Option<f64>, scroll_top: impl FnOnce() -> Option<i32>) -> f64 {
    scroll_y
        .or_else(|| scroll_top().map(f64::from))
        .unwrap_or(0.0)
}

/// Shadow state for the calling component.
///
/// One listener per component lifetime: it is attached when the component
/// mounts in the browser and removed when its owner is cleaned up.
pub fn use_scroll_shadow() -> ScrollShadow {
    let shadow = ScrollShadow::new(use_site_config().scroll_shadow_threshold);
    Effect::new(move || {
        let subscription = ScrollSubscription::acquire(move |offset| shadow.observe(offset));
        on_cleanup(move || drop(subscription));
    });
    shadow
}
