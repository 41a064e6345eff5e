//! Manifest Buffer
//!
//! The decoded text of a manifest: newline-separated relative file paths.

use std::string::FromUtf8Error;

use super::field::{field_at, Field};
use super::text::AllocationFailure;

/// Delimiter between manifest entries
pub const MANIFEST_DELIMITER: char = '\n';

/// Full manifest content, owned by whoever iterates its entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestBuffer {
    text: String,
}

impl ManifestBuffer {
    /// Decode raw manifest bytes; entries are UTF-8 paths.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, FromUtf8Error> {
        String::from_utf8(bytes).map(Self::from_text)
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Size in bytes, equal to the size of the downloaded manifest file
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The `index`-th line of the manifest (zero-based)
    pub fn entry(&self, index: usize) -> Result<Field, AllocationFailure> {
        field_at(&self.text, index, MANIFEST_DELIMITER)
    }
}
