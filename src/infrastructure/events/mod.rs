//! Event Sink Implementations
//!
//! Provides concrete implementations of InstallEventSink:
//! - ConsoleEventSink: human-readable progress and download diagnostics
//! - JsonEventSink: NDJSON output for CI/automation

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
