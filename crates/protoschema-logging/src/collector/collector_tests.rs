#![allow(non_snake_case)]

use super::*;

#[test]
fn DiagnosticCollector___new___defaults_to_warn() {
    let collector = DiagnosticCollector::new();

    assert_eq!(collector.level(), LogLevel::Warn);
    assert_eq!(collector.count(), 0);
}

#[test]
fn DiagnosticCollector___is_enabled___respects_level() {
    let collector = DiagnosticCollector::new();

    assert!(!collector.is_enabled(LogLevel::Info));
    assert!(collector.is_enabled(LogLevel::Warn));
    assert!(collector.is_enabled(LogLevel::Error));
}

#[test]
fn DiagnosticCollector___is_enabled___off_never_recorded() {
    let collector = DiagnosticCollector::new();
    collector.set_level(LogLevel::Trace);

    assert!(!collector.is_enabled(LogLevel::Off));
}

#[test]
fn DiagnosticCollector___record___skips_disabled_levels() {
    let collector = DiagnosticCollector::new();

    collector.record(LogLevel::Debug, "protoschema", "noise");
    collector.record(LogLevel::Warn, "protoschema", "dropped field");

    let diagnostics = collector.snapshot();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "dropped field");
    assert_eq!(diagnostics[0].level, LogLevel::Warn);
}

#[test]
fn DiagnosticCollector___set_level___lowers_threshold() {
    let collector = DiagnosticCollector::new();
    collector.set_level(LogLevel::Info);

    collector.record(LogLevel::Info, "t", "generated Book.json");

    assert_eq!(collector.count(), 1);
}

#[test]
fn DiagnosticCollector___global___returns_same_instance() {
    let a = DiagnosticCollector::global() as *const _;
    let b = DiagnosticCollector::global() as *const _;

    assert_eq!(a, b);
}
