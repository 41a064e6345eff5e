//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod downloader;
pub mod file_system;
pub mod install_events;

pub use downloader::{DownloadFailure, Downloader};
pub use file_system::{FileSystem, FsError, FsResult};
pub use install_events::{InstallEvent, InstallEventSink, NoopEventSink};
