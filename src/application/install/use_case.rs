//! Install Use Case
//!
//! Orchestrates the install flow:
//! 1. Build the source descriptor
//! 2. Materialize the destination root if it is missing
//! 3. Fetch the manifest
//! 4. Install every entry
//!
//! The descriptor is dropped when the flow ends, on every path.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::ports::{
    Downloader, FileSystem, FsError, InstallEvent, InstallEventSink, NoopEventSink,
};
use crate::domain::services::DirectoryMaterializer;
use crate::domain::value_objects::{SourceDescriptor, RAW_CONTENT_HOST};
use crate::error::InstallError;

use super::fetcher::ManifestFetcher;
use super::files::FileInstaller;
use super::options::InstallRequest;
use super::result::{InstallFailure, InstallReport, InstallStage, InstallStatus};

/// Install use case - sequences descriptor, directory, manifest and files
///
/// Parameterized by its ports so tests can swap the network and the disk.
pub struct InstallUseCase<D, FS>
where
    D: Downloader,
    FS: FileSystem,
{
    downloader: D,
    file_system: FS,
    host: String,
}

impl<D, FS> InstallUseCase<D, FS>
where
    D: Downloader,
    FS: FileSystem,
{
    pub fn new(downloader: D, file_system: FS) -> Self {
        Self {
            downloader,
            file_system,
            host: RAW_CONTENT_HOST.to_string(),
        }
    }

    /// Resolve repository references against another host prefix
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Run the install silently and report the process-level status
    pub fn install(&self, request: &InstallRequest) -> InstallStatus {
        self.install_with_events(request, Arc::new(NoopEventSink))
    }

    /// Run the install with event reporting and report the process-level status
    pub fn install_with_events(
        &self,
        request: &InstallRequest,
        events: Arc<dyn InstallEventSink>,
    ) -> InstallStatus {
        match self.execute(request, events) {
            Ok(report) => {
                info!(installed = report.installed.len(), "install finished");
                InstallStatus::Success
            }
            Err(failure) => {
                warn!(stage = %failure.stage, error = %failure.error, "install failed");
                failure.status()
            }
        }
    }

    /// Run the install and keep the full outcome
    pub fn execute(
        &self,
        request: &InstallRequest,
        events: Arc<dyn InstallEventSink>,
    ) -> Result<InstallReport, InstallFailure> {
        let events: &dyn InstallEventSink = events.as_ref();
        let working_dir = request.working_dir.as_path();

        let descriptor = SourceDescriptor::build_with_host(
            &self.host,
            &request.remote_ref,
            request.manifest_name.as_deref(),
        )
        .map_err(InstallFailure::at(InstallStage::Descriptor))?;

        events.on_event(InstallEvent::Started {
            base_url: descriptor.base_url().to_string(),
            destination: request.destination_root.clone(),
        });

        let mut report = InstallReport::default();

        if let Some(root) = request.destination_root.as_deref() {
            report.created_dirs = self
                .ensure_destination(root, working_dir, events)
                .map_err(InstallFailure::at(InstallStage::Directory))?;
        }

        let manifest = ManifestFetcher::new(&self.downloader, &self.file_system, working_dir, events)
            .fetch(&descriptor)
            .map_err(InstallFailure::at(InstallStage::Files))?;
        report.manifest_url = descriptor
            .manifest_url()
            .map_err(InstallFailure::at(InstallStage::Files))?;

        report.installed =
            FileInstaller::new(&self.downloader, &self.file_system, working_dir, events)
                .install_all(&descriptor, manifest, request.destination_root.as_deref())
                .map_err(InstallFailure::at(InstallStage::Files))?;

        events.on_event(InstallEvent::Completed {
            installed_count: report.installed.len(),
        });
        Ok(report)
    }

    fn ensure_destination(
        &self,
        root: &str,
        working_dir: &Path,
        events: &dyn InstallEventSink,
    ) -> Result<Vec<PathBuf>, InstallError> {
        let resolved = working_dir.join(root);
        if self.file_system.is_dir(&resolved) {
            return Ok(Vec::new());
        }

        let created = DirectoryMaterializer::new(&self.file_system)
            .with_base(working_dir)
            .ensure_path(root)?;

        // An existing file at the root satisfies every create call but is no directory.
        if !self.file_system.is_dir(&resolved) {
            return Err(InstallError::DirectoryCreateFailed {
                path: resolved.clone(),
                source: FsError::AlreadyExists(resolved),
            });
        }

        events.on_event(InstallEvent::DirectoryMaterialized { path: resolved });
        Ok(created)
    }
}
