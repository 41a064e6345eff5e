//! Error types for the installer
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{DownloadFailure, FsError};
use crate::domain::value_objects::{AllocationFailure, PathError};

/// Result type alias for installer operations
pub type InstallResult<T> = Result<T, InstallError>;

/// Main error type for install operations
#[derive(Error, Debug)]
pub enum InstallError {
    /// Bad or missing source reference (or another caller-supplied argument)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A string or buffer could not be allocated
    #[error(transparent)]
    AllocationFailure(#[from] AllocationFailure),

    /// The download primitive reported a failure
    #[error("download of {url} failed: {failure}")]
    DownloadFailed {
        url: String,
        #[source]
        failure: DownloadFailure,
    },

    /// A local file could not be opened, read or written
    #[error("local I/O failed for {path}: {source}")]
    LocalIoFailed {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// A directory segment could not be created
    #[error("cannot create directory {path}: {source}")]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Manifest entry would land outside the destination tree
    #[error("refusing manifest entry '{entry}': {reason}")]
    UnsafeEntry {
        entry: String,
        #[source]
        reason: PathError,
    },

    /// Configuration file could not be read or parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },
}

impl InstallError {
    /// The download failure behind this error, if any
    pub fn download_failure(&self) -> Option<&DownloadFailure> {
        match self {
            InstallError::DownloadFailed { failure, .. } => Some(failure),
            _ => None,
        }
    }
}
