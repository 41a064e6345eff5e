//! Manifest Fetcher
//!
//! Downloads the manifest into a uniquely named staging directory under the
//! working directory, reads it back and removes the staging directory. Two
//! installs sharing a working directory never touch each other's manifest.

use std::io;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::ports::{Downloader, FileSystem, FsError, InstallEvent, InstallEventSink};
use crate::domain::value_objects::{ManifestBuffer, SourceDescriptor};
use crate::error::{InstallError, InstallResult};

const STAGING_PREFIX: &str = ".pang-manifest-";

/// Retrieves and decodes the manifest of a source
pub struct ManifestFetcher<'a, D: ?Sized, FS: ?Sized> {
    downloader: &'a D,
    fs: &'a FS,
    working_dir: &'a Path,
    events: &'a dyn InstallEventSink,
}

impl<'a, D, FS> ManifestFetcher<'a, D, FS>
where
    D: Downloader + ?Sized,
    FS: FileSystem + ?Sized,
{
    pub fn new(
        downloader: &'a D,
        fs: &'a FS,
        working_dir: &'a Path,
        events: &'a dyn InstallEventSink,
    ) -> Self {
        Self {
            downloader,
            fs,
            working_dir,
            events,
        }
    }

    /// Download `base_url/manifest_name` and return its decoded content
    pub fn fetch(&self, descriptor: &SourceDescriptor) -> InstallResult<ManifestBuffer> {
        let url = descriptor.manifest_url()?;

        let staging = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(self.working_dir)
            .map_err(|e| InstallError::LocalIoFailed {
                path: self.working_dir.to_path_buf(),
                source: FsError::from_io(self.working_dir, e),
            })?;
        let local = staging.path().join(descriptor.manifest_name());

        debug!(url = %url, path = %local.display(), "fetching manifest");
        if let Err(failure) = self.downloader.download(&url, &local) {
            warn!(url = %url, error = %failure, "manifest download failed");
            self.events.on_event(InstallEvent::DownloadFailed {
                url: url.clone(),
                failure: failure.clone(),
            });
            return Err(InstallError::DownloadFailed { url, failure });
        }

        let bytes = self
            .fs
            .read(&local)
            .map_err(|source| InstallError::LocalIoFailed {
                path: local.clone(),
                source,
            })?;

        if let Err(e) = staging.close() {
            warn!(error = %e, "could not remove manifest staging directory");
        }

        let manifest =
            ManifestBuffer::from_bytes(bytes).map_err(|e| InstallError::LocalIoFailed {
                path: local.clone(),
                source: FsError::from_io(&local, io::Error::new(io::ErrorKind::InvalidData, e)),
            })?;

        self.events.on_event(InstallEvent::ManifestFetched {
            url,
            bytes: manifest.len(),
        });
        Ok(manifest)
    }
}
