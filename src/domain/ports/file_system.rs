//! FileSystem port - abstraction over local file operations
//!
//! This trait allows the install engine to create directories, clear stale
//! files and read the downloaded manifest without depending on a concrete
//! implementation (local disk, recording wrappers in tests).

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File or parent directory not found
    NotFound(PathBuf),
    /// Something already occupies the path
    AlreadyExists(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(PathBuf, std::io::Error),
}

impl FsError {
    /// Classify an I/O error raised while operating on `path`
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::AlreadyExists => FsError::AlreadyExists(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(path.to_path_buf(), err),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, FsError::AlreadyExists(_))
    }

    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound(path)
            | FsError::AlreadyExists(path)
            | FsError::PermissionDenied(path)
            | FsError::Io(path, _) => path,
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "not found: {}", path.display()),
            FsError::AlreadyExists(path) => write!(f, "already exists: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "permission denied: {}", path.display())
            }
            FsError::Io(path, err) => write!(f, "I/O error on {}: {}", path.display(), err),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io(_, err) => Some(err),
            _ => None,
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - recording wrappers in tests
pub trait FileSystem {
    /// Create a single directory; the parent must already exist
    fn create_dir(&self, path: &Path) -> FsResult<()>;

    /// Check if a directory exists at `path`
    fn is_dir(&self, path: &Path) -> bool;

    /// Remove a file
    fn remove_file(&self, path: &Path) -> FsResult<()>;

    /// Read the whole file
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn create_dir(&self, path: &Path) -> FsResult<()> {
        (**self).create_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        (**self).remove_file(path)
    }

    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        (**self).read(path)
    }
}
