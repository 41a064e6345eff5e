//! Console Event Sink
//!
//! Human-readable install progress, one line per file, plus the download
//! diagnostics that tell a memory failure apart from a bad URL or network.

use crate::domain::ports::{DownloadFailure, InstallEvent, InstallEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that prints progress lines
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbose: bool,
}

impl ConsoleEventSink {
    /// Console sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbose: false,
        }
    }

    /// Also print manifest and directory events
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }
}

/// Diagnostic shown when a transfer fails
pub(crate) fn failure_diagnostic(failure: &DownloadFailure) -> &'static str {
    match failure {
        DownloadFailure::OutOfMemory => "Error: Not enough memory to download file.",
        DownloadFailure::InvalidUrlOrNetwork(_) => {
            "Error: URL is not valid, please make sure you are using the latest installer."
        }
    }
}

impl InstallEventSink for ConsoleEventSink {
    fn on_event(&self, event: InstallEvent) {
        match event {
            InstallEvent::FileStarted { url, path, .. } => {
                self.line(format!("Installing: {} from {}", path.display(), url));
            }
            InstallEvent::DownloadFailed { failure, .. } => {
                self.line(failure_diagnostic(&failure).to_string());
            }
            InstallEvent::Completed { installed_count } => {
                self.line(format!("Installed {} file(s).", installed_count));
            }
            InstallEvent::DirectoryMaterialized { path } if self.verbose => {
                self.line(format!("Created directory {}", path.display()));
            }
            InstallEvent::ManifestFetched { url, bytes } if self.verbose => {
                self.line(format!("Manifest: {} ({} bytes)", url, bytes));
            }
            InstallEvent::Started { base_url, .. } if self.verbose => {
                self.line(format!("Source: {}", base_url));
            }
            _ => {}
        }
    }
}
