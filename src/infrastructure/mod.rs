//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system implementation
//! - `http/` - Blocking HTTP downloader
//! - `events/` - Event sinks (console, JSON)

pub mod events;
pub mod fs;
pub mod http;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use http::ReqwestDownloader;
