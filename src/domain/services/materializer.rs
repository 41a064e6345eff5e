//! Directory Materializer
//!
//! Ensures a nested directory path exists using only a non-recursive
//! create-directory primitive. The path is rebuilt one delimiter-separated
//! segment at a time and each prefix is created before its children.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use tracing::debug;

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{field_at, AllocationFailure};
use crate::error::{InstallError, InstallResult};

/// Creates every missing ancestor of a directory path, root-most first
pub struct DirectoryMaterializer<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
    base: Option<&'a Path>,
    delimiter: char,
}

impl<'a, FS: FileSystem + ?Sized> DirectoryMaterializer<'a, FS> {
    /// Materializer splitting on the platform directory separator
    pub fn new(fs: &'a FS) -> Self {
        Self {
            fs,
            base: None,
            delimiter: MAIN_SEPARATOR,
        }
    }

    /// Resolve relative paths against `base` instead of the process directory
    pub fn with_base(mut self, base: &'a Path) -> Self {
        self.base = Some(base);
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Create `path` and all of its missing ancestors.
    ///
    /// Segments that already exist count as success, so calling this twice is
    /// harmless. Returns the list of prefixes it asked the file system to create.
    pub fn ensure_path(&self, path: &str) -> InstallResult<Vec<PathBuf>> {
        let mut accumulated = String::new();
        accumulated
            .try_reserve_exact(path.len())
            .map_err(|_| AllocationFailure {
                requested: path.len(),
            })?;

        let mut attempted = Vec::new();
        let mut index = 0;
        while accumulated.len() < path.len() {
            let segment = field_at(path, index, self.delimiter)?;
            if index > 0 {
                accumulated.push(self.delimiter);
            }
            accumulated.push_str(segment.as_str());
            index += 1;

            // A leading delimiter yields an empty first segment: the root itself.
            if accumulated.is_empty() {
                continue;
            }

            let target = self.resolve(&accumulated);
            self.create_segment(&target)?;
            attempted.push(target);
        }

        Ok(attempted)
    }

    fn resolve(&self, segment_path: &str) -> PathBuf {
        match self.base {
            Some(base) => base.join(segment_path),
            None => PathBuf::from(segment_path),
        }
    }

    fn create_segment(&self, target: &Path) -> InstallResult<()> {
        match self.fs.create_dir(target) {
            Ok(()) => {
                debug!(path = %target.display(), "created directory");
                Ok(())
            }
            Err(err) if err.is_already_exists() || self.fs.is_dir(target) => Ok(()),
            Err(source) => Err(InstallError::DirectoryCreateFailed {
                path: target.to_path_buf(),
                source,
            }),
        }
    }
}
