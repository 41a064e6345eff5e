//! Domain Value Objects
//!
//! Immutable value types that represent install concepts.

mod field;
mod manifest;
mod path;
mod source;
mod text;

pub use field::{field_at, Field, END_OF_DATA};
pub use manifest::{ManifestBuffer, MANIFEST_DELIMITER};
pub use path::{EntryPath, PathError};
pub use source::{SourceDescriptor, DEFAULT_MANIFEST_NAME, RAW_CONTENT_HOST};
pub use text::{try_concat, try_copy, AllocationFailure};
