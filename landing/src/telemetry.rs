//! Browser logging: `tracing` events forwarded to the devtools console.

use std::fmt::{self, Write};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;
use wasm_bindgen::JsValue;

/// Writes each event to `console.{error,warn,info,debug}` by level.
pub struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let line = format_event(meta.target(), event);
        let line = JsValue::from_str(&line);
        match *meta.level() {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            _ => web_sys::console::debug_1(&line),
        }
    }
}

fn format_event(target: &str, event: &Event<'_>) -> String {
    let mut fields = EventFields::default();
    event.record(&mut fields);
    format!("[{target}] {}{}", fields.message, fields.rest)
}

#[derive(Default)]
struct EventFields {
    message: String,
    rest: String,
}

impl Visit for EventFields {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            let _ = write!(self.rest, " {}={value:?}", field.name());
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_owned();
        } else {
            let _ = write!(self.rest, " {}={value}", field.name());
        }
    }
}

/// Installs the console subscriber. A second call is a no-op.
pub fn init(level: Level) {
    let installed = tracing_subscriber::registry()
        .with(LevelFilter::from_level(level))
        .with(ConsoleLayer)
        .try_init();
    if installed.is_ok() {
        tracing::debug!(%level, "console logging ready");
    }
}
