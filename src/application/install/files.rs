//! File Installer
//!
//! Walks the manifest line by line and downloads every entry. The first
//! failure stops the walk; files already installed stay where they are.

use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};

use tracing::{debug, warn};

use crate::domain::ports::{Downloader, FileSystem, InstallEvent, InstallEventSink};
use crate::domain::value_objects::{
    try_concat, try_copy, EntryPath, ManifestBuffer, SourceDescriptor,
};
use crate::error::{InstallError, InstallResult};

use super::result::InstalledFile;

/// Installs every manifest entry of one source
pub struct FileInstaller<'a, D: ?Sized, FS: ?Sized> {
    downloader: &'a D,
    fs: &'a FS,
    working_dir: &'a Path,
    events: &'a dyn InstallEventSink,
}

impl<'a, D, FS> FileInstaller<'a, D, FS>
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

    /// Install every entry of `manifest`, in order.
    ///
    /// The walk ends at the first empty line or at the end of the manifest.
    /// The manifest is consumed and dropped once the walk is over, whatever the
    /// outcome.
    pub fn install_all(
        &self,
        descriptor: &SourceDescriptor,
        manifest: ManifestBuffer,
        destination_root: Option<&str>,
    ) -> InstallResult<Vec<InstalledFile>> {
        let mut installed = Vec::new();

        for index in 0.. {
            let field = manifest.entry(index)?;
            let line = field.as_str();
            let entry = line.strip_suffix('\r').unwrap_or(line);
            if entry.is_empty() {
                break;
            }

            installed.push(self.install_entry(descriptor, index, entry, destination_root)?);
        }

        debug!(count = installed.len(), "manifest exhausted");
        Ok(installed)
    }

    fn install_entry(
        &self,
        descriptor: &SourceDescriptor,
        index: usize,
        entry: &str,
        destination_root: Option<&str>,
    ) -> InstallResult<InstalledFile> {
        let entry = EntryPath::new(entry).map_err(|reason| InstallError::UnsafeEntry {
            entry: entry.to_string(),
            reason,
        })?;

        let url = descriptor.file_url(entry.as_str())?;
        let local_dest = match destination_root {
            Some(root) => try_concat(&[root, MAIN_SEPARATOR_STR, entry.as_str()])?,
            None => try_copy(entry.as_str())?,
        };
        let target = self.working_dir.join(&local_dest);

        let detailed = self.events.wants_detailed_events();
        if detailed {
            self.events.on_event(InstallEvent::FileStarted {
                index,
                url: url.clone(),
                path: PathBuf::from(&local_dest),
            });
        }

        self.remove_stale(&target);

        if let Err(failure) = self.downloader.download(&url, &target) {
            warn!(url = %url, error = %failure, "file download failed");
            self.events.on_event(InstallEvent::DownloadFailed {
                url: url.clone(),
                failure: failure.clone(),
            });
            return Err(InstallError::DownloadFailed { url, failure });
        }

        if detailed {
            self.events.on_event(InstallEvent::FileInstalled {
                index,
                path: PathBuf::from(local_dest),
            });
        }
        Ok(InstalledFile { url, path: target })
    }

    /// Best effort: a missing file is the normal case.
    fn remove_stale(&self, target: &Path) {
        match self.fs.remove_file(target) {
            Ok(()) => debug!(path = %target.display(), "removed previous file"),
            Err(err) if err.is_not_found() => {}
            Err(err) => warn!(path = %target.display(), error = %err, "could not remove previous file"),
        }
    }
}
