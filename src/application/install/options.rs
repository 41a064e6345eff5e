//! Install Options
//!
//! Request type for the install use case.

use std::path::PathBuf;

/// Everything one install needs from its caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    /// Repository reference, e.g. `owner/repo/branch`
    pub remote_ref: String,
    /// Manifest file name (defaults to `files`)
    pub manifest_name: Option<String>,
    /// Destination root; `None` installs straight into `working_dir`
    pub destination_root: Option<String>,
    /// Directory relative paths are resolved against, and where the manifest
    /// is staged while it is read
    pub working_dir: PathBuf,
}

impl InstallRequest {
    pub fn new(remote_ref: impl Into<String>) -> Self {
        Self {
            remote_ref: remote_ref.into(),
            manifest_name: None,
            destination_root: None,
            working_dir: PathBuf::from("."),
        }
    }

    pub fn with_manifest_name(mut self, name: impl Into<String>) -> Self {
        self.manifest_name = Some(name.into());
        self
    }

    /// Install under `root`; an empty root means the working directory.
    pub fn with_destination_root(mut self, root: impl Into<String>) -> Self {
        let root = root.into();
        self.destination_root = (!root.is_empty()).then_some(root);
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = dir.into();
        self
    }
}
