//! Source Descriptor Value Object
//!
//! Identifies one remote install source: the composed base URL and the name of
//! the manifest file inside it. Built once per install and immutable afterwards.

use super::text::{try_concat, try_copy, AllocationFailure};
use crate::error::{InstallError, InstallResult};

/// Raw content host every repository reference is resolved against
pub const RAW_CONTENT_HOST: &str = "https://raw.githubusercontent.com/";

/// Manifest file name used when the caller does not name one
pub const DEFAULT_MANIFEST_NAME: &str = "files";

/// Resolved base URL and manifest name of one install source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    base_url: String,
    manifest_name: String,
}

impl SourceDescriptor {
    /// Build a descriptor for `remote_ref` (e.g. `"xihtyM/Pang/main"`) on the
    /// raw content host.
    pub fn build(remote_ref: &str, manifest_name: Option<&str>) -> InstallResult<Self> {
        Self::build_with_host(RAW_CONTENT_HOST, remote_ref, manifest_name)
    }

    /// Build a descriptor against an alternative host prefix (mirrors, tests).
    ///
    /// The host is prepended verbatim, so it carries its own trailing `/`.
    pub fn build_with_host(
        host: &str,
        remote_ref: &str,
        manifest_name: Option<&str>,
    ) -> InstallResult<Self> {
        if remote_ref.is_empty() {
            return Err(InstallError::InvalidArgument(
                "remote reference is empty".to_string(),
            ));
        }
        if host.is_empty() {
            return Err(InstallError::InvalidArgument(
                "raw content host is empty".to_string(),
            ));
        }
        if manifest_name.is_some_and(str::is_empty) {
            return Err(InstallError::InvalidArgument(
                "manifest name is empty".to_string(),
            ));
        }
        if let Some(name) = manifest_name.filter(|name| !is_plain_file_name(name)) {
            return Err(InstallError::InvalidArgument(format!(
                "manifest name '{name}' must be a plain file name"
            )));
        }

        Ok(Self {
            base_url: try_concat(&[host, remote_ref])?,
            manifest_name: try_copy(manifest_name.unwrap_or(DEFAULT_MANIFEST_NAME))?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn manifest_name(&self) -> &str {
        &self.manifest_name
    }

    /// `base_url + "/" + manifest_name`
    pub fn manifest_url(&self) -> Result<String, AllocationFailure> {
        self.file_url(&self.manifest_name)
    }

    /// `base_url + "/" + entry`
    pub fn file_url(&self, entry: &str) -> Result<String, AllocationFailure> {
        try_concat(&[&self.base_url, "/", entry])
    }
}

/// The manifest is staged inside a scratch directory, so its name must not leave it.
fn is_plain_file_name(name: &str) -> bool {
    !name.contains(['/', '\\', ':']) && name != "." && name != ".."
}
