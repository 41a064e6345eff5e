//! Domain Layer
//!
//! The core of the installer - manifest parsing, URL and path composition,
//! and directory materialization, without direct network access.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (SourceDescriptor, Field, EntryPath)
//! - `services/` - Domain services (DirectoryMaterializer)
//! - `ports/` - Interface definitions for infrastructure (Downloader, FileSystem, events)
//!
//! ## Design Principles
//!
//! 1. **Ports & Adapters** - All I/O goes through trait-defined ports
//! 2. **Fallible allocation** - Composed strings surface `AllocationFailure`
//!    instead of aborting or degrading to an empty value

pub mod ports;
pub mod services;
pub mod value_objects;
