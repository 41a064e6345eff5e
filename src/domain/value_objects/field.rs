//! Delimiter-separated field extraction
//!
//! One splitting primitive serves both manifest lines (`'\n'`) and directory
//! segments (the platform separator). Fields are addressed by zero-based index:
//! the field at `index` starts right after the `index`-th delimiter and runs up to
//! the next delimiter or the end of the buffer.

use super::text::{try_copy, AllocationFailure};

/// The canonical empty value returned for [`Field::End`].
///
/// Shared and immutable; it is never allocated per call.
pub const END_OF_DATA: &str = "";

/// Result of a successful field lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// The buffer ran out before the requested field started
    End,
    /// An owned copy of the field (possibly empty, between two adjacent delimiters)
    Value(String),
}

impl Field {
    /// Borrow the field text; [`Field::End`] reads as [`END_OF_DATA`].
    pub fn as_str(&self) -> &str {
        match self {
            Field::End => END_OF_DATA,
            Field::Value(value) => value,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Field::End)
    }

    /// True for both the end marker and an allocated empty field
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    pub fn into_value(self) -> Option<String> {
        match self {
            Field::End => None,
            Field::Value(value) => Some(value),
        }
    }
}

/// Extract the field at `index` from `buffer`.
///
/// Returns [`Field::End`] when `buffer` holds fewer than `index` delimiters, or
/// when the `index`-th delimiter is the last byte of the buffer. The last field
/// does not need a trailing delimiter.
///
/// # Errors
///
/// [`AllocationFailure`] when the copy of the field cannot be allocated.
pub fn field_at(buffer: &str, index: usize, delimiter: char) -> Result<Field, AllocationFailure> {
    let Some(start) = field_start(buffer, index, delimiter) else {
        return Ok(Field::End);
    };

    let rest = &buffer[start..];
    let field = match rest.find(delimiter) {
        Some(end) => &rest[..end],
        None => rest,
    };

    try_copy(field).map(Field::Value)
}

/// Byte offset where the field at `index` begins, if it begins inside `buffer`.
fn field_start(buffer: &str, index: usize, delimiter: char) -> Option<usize> {
    let mut start = 0;
    if index > 0 {
        let (position, _) = buffer.match_indices(delimiter).nth(index - 1)?;
        start = position + delimiter.len_utf8();
    }

    (start < buffer.len()).then_some(start)
}
