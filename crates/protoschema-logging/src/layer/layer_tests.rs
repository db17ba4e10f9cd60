#![allow(non_snake_case)]

use super::*;
use once_cell::sync::Lazy;
use tracing_subscriber::prelude::*;

// Each test that records events gets its own leaked collector so tests can
// run in parallel without sharing the global instance.
fn leaked_collector() -> &'static DiagnosticCollector {
    Box::leak(Box::new(DiagnosticCollector::new()))
}

// DiagnosticsLayer tests

#[test]
fn DiagnosticsLayer___convert_level___maps_all_levels() {
    assert_eq!(DiagnosticsLayer::convert_level(&Level::TRACE), LogLevel::Trace);
    assert_eq!(DiagnosticsLayer::convert_level(&Level::DEBUG), LogLevel::Debug);
    assert_eq!(DiagnosticsLayer::convert_level(&Level::INFO), LogLevel::Info);
    assert_eq!(DiagnosticsLayer::convert_level(&Level::WARN), LogLevel::Warn);
    assert_eq!(DiagnosticsLayer::convert_level(&Level::ERROR), LogLevel::Error);
}

#[test]
fn DiagnosticsLayer___warn_event___is_recorded() {
    let collector = leaked_collector();
    let subscriber =
        tracing_subscriber::registry().with(DiagnosticsLayer::with_collector(collector));

    tracing::subscriber::with_default(subscriber, || {
        tracing::warn!("unsupported field kind");
    });

    let diagnostics = collector.snapshot();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].level, LogLevel::Warn);
    assert_eq!(diagnostics[0].message, "unsupported field kind");
}

#[test]
fn DiagnosticsLayer___info_event___is_not_recorded_by_default() {
    let collector = leaked_collector();
    let subscriber =
        tracing_subscriber::registry().with(DiagnosticsLayer::with_collector(collector));

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("generated 3 documents");
    });

    assert_eq!(collector.count(), 0);
}

#[test]
fn DiagnosticsLayer___structured_fields___are_appended() {
    let collector = leaked_collector();
    let subscriber =
        tracing_subscriber::registry().with(DiagnosticsLayer::with_collector(collector));

    tracing::subscriber::with_default(subscriber, || {
        tracing::warn!(field = "legacy", count = 2, "omitting field");
    });

    let diagnostics = collector.snapshot();
    assert_eq!(diagnostics[0].message, "omitting field field=legacy count=2");
}

#[test]
fn DiagnosticsLayer___event_without_message___uses_fields() {
    let collector = leaked_collector();
    let subscriber =
        tracing_subscriber::registry().with(DiagnosticsLayer::with_collector(collector));

    tracing::subscriber::with_default(subscriber, || {
        tracing::error!(path = "out/Book.json");
    });

    assert_eq!(collector.snapshot()[0].message, "path=out/Book.json");
}

// level_filter tests

#[test]
fn level_filter___maps_off() {
    assert_eq!(level_filter(LogLevel::Off), LevelFilter::OFF);
}

#[test]
fn level_filter___maps_warn() {
    assert_eq!(level_filter(LogLevel::Warn), LevelFilter::WARN);
}

// init_logging tests

static INIT: Lazy<()> = Lazy::new(|| init_logging(LogLevel::Error));

#[test]
fn init_logging___called_twice___does_not_panic() {
    Lazy::force(&INIT);

    init_logging(LogLevel::Debug);
}
