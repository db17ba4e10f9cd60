//! Tracing layer that records diagnostics, and subscriber setup

use crate::collector::DiagnosticCollector;
use protoschema_core::LogLevel;
use std::fmt::Write as _;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Tracing layer that forwards events into a [`DiagnosticCollector`]
pub struct DiagnosticsLayer {
    collector: &'static DiagnosticCollector,
}

impl DiagnosticsLayer {
    /// Create a layer using the global collector
    pub fn new() -> Self {
        Self {
            collector: DiagnosticCollector::global(),
        }
    }

    /// Create a layer with a specific collector
    pub fn with_collector(collector: &'static DiagnosticCollector) -> Self {
        Self { collector }
    }

    /// Convert tracing Level to our LogLevel
    fn convert_level(level: &Level) -> LogLevel {
        match *level {
            Level::TRACE => LogLevel::Trace,
            Level::DEBUG => LogLevel::Debug,
            Level::INFO => LogLevel::Info,
            Level::WARN => LogLevel::Warn,
            Level::ERROR => LogLevel::Error,
        }
    }
}

impl Default for DiagnosticsLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for DiagnosticsLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    // `enabled` is left at its default: returning false here would disable
    // the event for the stderr layer too.
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Self::convert_level(metadata.level());

        if !self.collector.is_enabled(level) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        self.collector
            .record(level, metadata.target(), &visitor.into_message());
    }
}

/// Visitor that flattens an event into `message key=value ...`
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
    fields: String,
}

impl MessageVisitor {
    fn into_message(self) -> String {
        let mut message = self.message.unwrap_or_default();
        if !self.fields.is_empty() {
            if !message.is_empty() {
                message.push(' ');
            }
            message.push_str(self.fields.trim_start());
        }
        message
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }
}

/// Convert LogLevel to tracing LevelFilter
pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}

/// Initialize logging to stderr with the diagnostics layer
///
/// `RUST_LOG` takes precedence over `level` for the stderr output. The
/// diagnostics layer records warnings regardless of the stderr level.
/// Calling this more than once is a no-op.
pub fn init_logging(level: LogLevel) {
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::builder()
        .with_default_directive(level_filter(level).into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    let subscriber = tracing_subscriber::registry()
        .with(stderr_layer)
        .with(DiagnosticsLayer::new());

    // Try to set as global default (ignore error if already set)
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
#[path = "layer/layer_tests.rs"]
mod layer_tests;
