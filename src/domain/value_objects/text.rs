//! Fallible string composition.
//!
//! Every URL and path the installer composes is built here, reserving the exact
//! capacity up front so an out-of-memory condition comes back as
//! [`AllocationFailure`] rather than aborting the process.

use std::fmt;

/// A string buffer of `requested` bytes could not be reserved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationFailure {
    pub requested: usize,
}

impl fmt::Display for AllocationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to allocate {} bytes", self.requested)
    }
}

impl std::error::Error for AllocationFailure {}

/// Concatenate `parts` into a newly allocated string
pub fn try_concat(parts: &[&str]) -> Result<String, AllocationFailure> {
    let requested = parts
        .iter()
        .try_fold(0usize, |acc, part| acc.checked_add(part.len()))
        .ok_or(AllocationFailure {
            requested: usize::MAX,
        })?;

    let mut out = String::new();
    out.try_reserve_exact(requested)
        .map_err(|_| AllocationFailure { requested })?;
    for part in parts {
        out.push_str(part);
    }
    Ok(out)
}

/// Copy `value` into a newly allocated string
pub fn try_copy(value: &str) -> Result<String, AllocationFailure> {
    try_concat(&[value])
}
