//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `InstallUseCase` - Orchestrates the install flow (descriptor, directories, manifest, files)

pub mod install;

pub use install::{
    FileInstaller, InstallFailure, InstallReport, InstallRequest, InstallStage, InstallStatus,
    InstallUseCase, InstalledFile, ManifestFetcher,
};
