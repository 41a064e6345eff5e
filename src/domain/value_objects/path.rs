//! Entry Path Value Object
//!
//! A manifest entry validated for placement under the destination root:
//! - Relative (no root, no drive prefix)
//! - No traversal components (`..`)
//! - Non-empty

use std::fmt;
use std::path::{Component, Path};

/// Error when entry path validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Path contains traversal components (..)
    ContainsTraversal,
    /// Path is absolute or rooted when relative is required
    AbsoluteNotAllowed,
    /// Path is empty
    Empty,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::ContainsTraversal => {
                write!(f, "path contains traversal components (..)")
            }
            PathError::AbsoluteNotAllowed => {
                write!(f, "absolute paths are not allowed")
            }
            PathError::Empty => {
                write!(f, "path is empty")
            }
        }
    }
}

impl std::error::Error for PathError {}

/// A manifest entry that stays inside the tree it is installed into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryPath<'a>(&'a str);

impl<'a> EntryPath<'a> {
    /// Validate a raw manifest entry
    pub fn new(entry: &'a str) -> Result<Self, PathError> {
        if entry.is_empty() {
            return Err(PathError::Empty);
        }

        // Rooted for a Windows-authored manifest even where `Path` disagrees.
        if entry.starts_with('\\') || has_drive_prefix(entry) {
            return Err(PathError::AbsoluteNotAllowed);
        }

        let path = Path::new(entry);
        if path.is_absolute() {
            return Err(PathError::AbsoluteNotAllowed);
        }

        for component in path.components() {
            match component {
                Component::ParentDir => return Err(PathError::ContainsTraversal),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(PathError::AbsoluteNotAllowed)
                }
                Component::CurDir | Component::Normal(_) => {}
            }
        }

        // Backslash segments are not components on unix but still mean traversal
        // to a Windows-authored manifest.
        if entry.split(['/', '\\']).any(|segment| segment == "..") {
            return Err(PathError::ContainsTraversal);
        }

        Ok(Self(entry))
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    pub fn as_path(&self) -> &'a Path {
        Path::new(self.0)
    }
}

fn has_drive_prefix(entry: &str) -> bool {
    let bytes = entry.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

impl fmt::Display for EntryPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<Path> for EntryPath<'_> {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl<'a> TryFrom<&'a str> for EntryPath<'a> {
    type Error = PathError;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
