//! Install Module
//!
//! Orchestrates one manifest-driven install.
//!
//! ## Structure
//!
//! - `options` - Request type (`InstallRequest`)
//! - `result` - Outcome types (`InstallReport`, `InstallFailure`, `InstallStatus`)
//! - `fetcher` - Manifest download and decoding (`ManifestFetcher`)
//! - `files` - Per-entry download loop (`FileInstaller`)
//! - `use_case` - Top-level sequencing (`InstallUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use pang_installer::{InstallRequest, InstallUseCase, LocalFs, ReqwestDownloader};
//!
//! let use_case = InstallUseCase::new(ReqwestDownloader::new()?, LocalFs::new());
//! let status = use_case.install(&InstallRequest::new("xihtyM/PangShell/main"));
//! ```

mod fetcher;
mod files;
mod options;
mod result;
mod use_case;

pub use fetcher::ManifestFetcher;
pub use files::FileInstaller;
pub use options::InstallRequest;
pub use result::{InstallFailure, InstallReport, InstallStage, InstallStatus, InstalledFile};
pub use use_case::InstallUseCase;
