//! Install Event Port
//!
//! Provides an observable interface for install operations.
//! Enables progress lines, download diagnostics and JSON event streams.

use std::path::PathBuf;

use super::downloader::DownloadFailure;

/// Event emitted during an install
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallEvent {
    /// Install started for a resolved source
    Started {
        base_url: String,
        destination: Option<String>,
    },

    /// The destination root was missing and has been created
    DirectoryMaterialized { path: PathBuf },

    /// Manifest downloaded and decoded
    ManifestFetched { url: String, bytes: usize },

    /// File download about to start
    FileStarted {
        index: usize,
        url: String,
        path: PathBuf,
    },

    /// File downloaded into place
    FileInstalled { index: usize, path: PathBuf },

    /// A transfer failed (manifest or file)
    DownloadFailed {
        url: String,
        failure: DownloadFailure,
    },

    /// Every manifest entry was installed
    Completed { installed_count: usize },
}

/// Trait for receiving install events
///
/// Implementations can be:
/// - ConsoleEventSink: progress lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait InstallEventSink: Send + Sync {
    /// Handle an install event
    fn on_event(&self, event: InstallEvent);

    /// Check if this sink wants per-file events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl InstallEventSink for NoopEventSink {
    fn on_event(&self, _event: InstallEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
