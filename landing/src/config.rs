//! Runtime configuration shared through Leptos context.

use leptos::prelude::*;
use tracing::Level;

/// Knobs the components read at mount time.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Vertical scroll offset (px) past which the navbar casts a shadow.
    /// The comparison is strict: an offset equal to the threshold does not.
    pub scroll_shadow_threshold: f64,
    /// `localStorage` key holding the session token
    pub token_storage_key: &'static str,
    /// Most verbose level forwarded to the browser console
    pub log_level: Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_shadow_threshold: 100.0,
            token_storage_key: "token",
            log_level: if cfg!(debug_assertions) {
                Level::DEBUG
            } else {
                Level::INFO
            },
        }
    }
}

pub fn provide_site_config(config: SiteConfig) {
    provide_context(config);
}

/// Config from context, or the defaults when none was provided.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}
