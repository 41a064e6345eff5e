//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Error and warning formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `output` - Error and config warning rendering

pub mod cli;
pub mod output;

pub use cli::Cli;
pub use output::{format_config_warning, format_error, print_config_warnings, print_error};
