//! Domain Services
//!
//! Install logic that only touches the outside world through ports.

mod materializer;

pub use materializer::DirectoryMaterializer;
