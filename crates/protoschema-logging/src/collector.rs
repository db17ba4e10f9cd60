//! Diagnostic collection

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use protoschema_core::LogLevel;
use std::sync::atomic::{AtomicU8, Ordering};

/// A recorded log event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: LogLevel,
    pub target: String,
    pub message: String,
}

/// Global diagnostic collector
static COLLECTOR: OnceCell<DiagnosticCollector> = OnceCell::new();

/// Store for diagnostics raised during one generator run
///
/// Only events at or above the configured level are kept; the default is
/// [`LogLevel::Warn`], which captures the fields and annotations the generator
/// had to skip.
pub struct DiagnosticCollector {
    diagnostics: RwLock<Vec<Diagnostic>>,
    level: AtomicU8,
}

impl DiagnosticCollector {
    /// Create a new, empty collector
    pub fn new() -> Self {
        Self {
            diagnostics: RwLock::new(Vec::new()),
            level: AtomicU8::new(LogLevel::Warn as u8),
        }
    }

    /// Get the global collector instance
    pub fn global() -> &'static DiagnosticCollector {
        COLLECTOR.get_or_init(DiagnosticCollector::new)
    }

    /// Set the minimum recorded level
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::SeqCst);
    }

    /// Get the minimum recorded level
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::SeqCst))
    }

    /// Check if a log level is recorded
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Off && level >= self.level()
    }

    /// Record a diagnostic if its level is enabled
    pub fn record(&self, level: LogLevel, target: &str, message: &str) {
        if !self.is_enabled(level) {
            return;
        }
        self.diagnostics.write().push(Diagnostic {
            level,
            target: target.to_string(),
            message: message.to_string(),
        });
    }

    /// Number of recorded diagnostics
    pub fn count(&self) -> usize {
        self.diagnostics.read().len()
    }

    /// Copy of the recorded diagnostics, oldest first
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.diagnostics.read().clone()
    }
}

impl Default for DiagnosticCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "collector/collector_tests.rs"]
mod collector_tests;
