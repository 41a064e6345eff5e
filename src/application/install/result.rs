//! Install Result
//!
//! Outcome types for install operations.

use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

use crate::error::InstallError;

/// One file placed on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledFile {
    pub url: String,
    pub path: PathBuf,
}

/// Result of a successful install
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub manifest_url: String,
    /// Directories created for a missing destination root
    pub created_dirs: Vec<PathBuf>,
    /// Files in manifest order
    pub installed: Vec<InstalledFile>,
}

/// Step of the install that was running when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStage {
    /// Building the source descriptor
    Descriptor,
    /// Materializing the destination root
    Directory,
    /// Fetching the manifest or installing its files
    Files,
}

impl fmt::Display for InstallStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallStage::Descriptor => f.write_str("source setup"),
            InstallStage::Directory => f.write_str("directory creation"),
            InstallStage::Files => f.write_str("file installation"),
        }
    }
}

/// Process-level outcome of an install
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStatus {
    Success,
    /// Bad source argument (or allocation failure while building it)
    BadSource,
    DirectoryFailed,
    /// Manifest fetch or any per-file download/IO failure
    InstallFailed,
}

impl InstallStatus {
    pub fn code(self) -> u8 {
        match self {
            InstallStatus::Success => 0,
            InstallStatus::BadSource => 1,
            InstallStatus::DirectoryFailed => 2,
            InstallStatus::InstallFailed => 3,
        }
    }

    pub fn is_success(self) -> bool {
        self == InstallStatus::Success
    }
}

impl From<InstallStage> for InstallStatus {
    fn from(stage: InstallStage) -> Self {
        match stage {
            InstallStage::Descriptor => InstallStatus::BadSource,
            InstallStage::Directory => InstallStatus::DirectoryFailed,
            InstallStage::Files => InstallStatus::InstallFailed,
        }
    }
}

impl From<InstallStatus> for ExitCode {
    fn from(status: InstallStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// An install error tagged with the stage it came from
#[derive(Debug, Error)]
#[error("{stage} failed")]
pub struct InstallFailure {
    pub stage: InstallStage,
    #[source]
    pub error: InstallError,
}

impl InstallFailure {
    pub fn new(stage: InstallStage, error: impl Into<InstallError>) -> Self {
        Self {
            stage,
            error: error.into(),
        }
    }

    /// Adapter for `map_err`
    pub fn at<E: Into<InstallError>>(stage: InstallStage) -> impl FnOnce(E) -> Self {
        move |error| Self::new(stage, error)
    }

    pub fn status(&self) -> InstallStatus {
        self.stage.into()
    }
}
