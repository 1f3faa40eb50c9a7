//! Browser console logging for `tracing`.
//!
//! [`ConsoleLayer`] is a tracing Layer that formats each event as a single
//! line and hands it to the matching `console.*` method, so levels keep their
//! colors and filters in the browser's dev tools.
//!
//! ```ignore
//! folio::logging::init(LevelFilter::INFO);
//! tracing::info!(component = "theme", "attached");
//! // console.info: "INFO folio::components::theme: attached component=theme"
//! ```

use std::fmt::Write as FmtWrite;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;
use wasm_bindgen::JsValue;

/// A tracing Layer that writes events to the browser console.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLayer;

impl ConsoleLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for ConsoleLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let line = JsValue::from_str(&render(event, &ctx));

        match *event.metadata().level() {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            Level::DEBUG => web_sys::console::debug_1(&line),
            Level::TRACE => web_sys::console::log_1(&line),
        }
    }
}

/// Collects the message and the `key = value` fields of one event. Numbers,
/// bools and `?debug` values all arrive through `record_debug`.
#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<(&'static str, String)>,
}

impl FieldVisitor {
    fn push(&mut self, field: &Field, value: String) {
        match field.name() {
            "message" => self.message = Some(value),
            name => self.fields.push((name, value)),
        }
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.push(field, format!("{:?}", value));
    }

    // Unquoted, unlike the Debug form
    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, value.to_string());
    }
}

fn render<S>(event: &Event<'_>, ctx: &Context<'_, S>) -> String
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let metadata = event.metadata();
    let mut visitor = FieldVisitor::default();
    event.record(&mut visitor);

    let spans = ctx
        .event_scope(event)
        .map(|scope| {
            scope
                .from_root()
                .map(|span| span.name().to_string())
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    format_line(*metadata.level(), metadata.target(), &spans, &visitor)
}

/// `LEVEL target [span > span]: message key=value ...`
fn format_line(level: Level, target: &str, spans: &[String], visitor: &FieldVisitor) -> String {
    let mut line = format!("{} {}", level, target);
    if !spans.is_empty() {
        let _ = write!(line, " [{}]", spans.join(" > "));
    }
    line.push_str(": ");
    line.push_str(visitor.message.as_deref().unwrap_or_default());
    for (name, value) in &visitor.fields {
        let _ = write!(line, " {}={}", name, value);
    }
    line
}

/// Parse a configured level name, falling back to INFO.
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::INFO)
}

/// Install the console layer as the global subscriber. Calling it again is
/// harmless; only the first call takes effect.
pub fn init(level: LevelFilter) {
    let _ = tracing_subscriber::registry()
        .with(ConsoleLayer::new().with_filter(level))
        .try_init();
}
