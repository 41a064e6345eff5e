//! pang-installer - manifest-driven remote file installer
//!
//! Given a repository reference (`owner/repo/branch`) and a manifest listing
//! relative file paths, the installer downloads every listed file from the raw
//! content host into a destination tree, creating missing directories first.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::install::{
    InstallFailure, InstallReport, InstallRequest, InstallStage, InstallStatus, InstallUseCase,
    InstalledFile,
};
pub use config::Config;
pub use domain::ports::{
    DownloadFailure, Downloader, FileSystem, FsError, FsResult, InstallEvent, InstallEventSink,
    NoopEventSink,
};
pub use domain::services::DirectoryMaterializer;
pub use domain::value_objects::{
    field_at, AllocationFailure, EntryPath, Field, ManifestBuffer, SourceDescriptor,
    DEFAULT_MANIFEST_NAME, END_OF_DATA, RAW_CONTENT_HOST,
};
pub use error::{InstallError, InstallResult};
pub use infrastructure::fs::LocalFs;
pub use infrastructure::http::ReqwestDownloader;
