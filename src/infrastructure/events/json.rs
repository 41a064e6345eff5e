//! JSON Event Sink
//!
//! Outputs install events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DownloadFailure, InstallEvent, InstallEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl InstallEventSink for JsonEventSink {
    fn on_event(&self, event: InstallEvent) {
        let json = match event {
            InstallEvent::Started {
                base_url,
                destination,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "install",
                    "base_url": base_url,
                    "destination": destination,
                })
            }

            InstallEvent::DirectoryMaterialized { path } => {
                serde_json::json!({
                    "event": "directory_created",
                    "command": "install",
                    "path": path.display().to_string(),
                })
            }

            InstallEvent::ManifestFetched { url, bytes } => {
                serde_json::json!({
                    "event": "manifest",
                    "command": "install",
                    "url": url,
                    "bytes": bytes,
                })
            }

            InstallEvent::FileStarted { index, url, path } => {
                serde_json::json!({
                    "event": "item_start",
                    "command": "install",
                    "index": index,
                    "url": url,
                    "path": path.display().to_string(),
                })
            }

            InstallEvent::FileInstalled { index, path } => {
                serde_json::json!({
                    "event": "item_installed",
                    "command": "install",
                    "index": index,
                    "path": path.display().to_string(),
                })
            }

            InstallEvent::DownloadFailed { url, failure } => {
                let kind = match failure {
                    DownloadFailure::OutOfMemory => "out_of_memory",
                    DownloadFailure::InvalidUrlOrNetwork(_) => "invalid_url_or_network",
                };
                serde_json::json!({
                    "event": "item_error",
                    "command": "install",
                    "url": url,
                    "kind": kind,
                    "error": failure.to_string(),
                })
            }

            InstallEvent::Completed { installed_count } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "install",
                    "status": "success",
                    "installed": installed_count,
                })
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
