//! protoschema-logging - Tracing setup and diagnostic collection
//!
//! This crate provides:
//! - [`DiagnosticsLayer`] tracing layer that records warnings raised while generating
//! - [`DiagnosticCollector`] store for the recorded diagnostics
//! - [`init_logging`] to install a stderr subscriber with the diagnostics layer
//!
//! Output goes to stderr because stdout carries the protoc plugin response.

mod collector;
mod layer;

pub use collector::{Diagnostic, DiagnosticCollector};
pub use layer::{DiagnosticsLayer, init_logging, level_filter};
pub use protoschema_core::LogLevel;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Diagnostic, DiagnosticCollector, DiagnosticsLayer, LogLevel, init_logging};
}
