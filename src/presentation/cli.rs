use std::path::PathBuf;

use clap::Parser;

/// pang-installer - install the files listed in a remote manifest
#[derive(Parser, Debug)]
#[command(name = "pang-installer")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Example: pang-installer xihtyM/PangShell/main --dest Pang/PangShell\n\nExit codes: 0 success, 1 bad source, 2 directory creation failed, 3 install failed."
)]
pub struct Cli {
    /// Repository reference on the raw content host (owner/repo/branch)
    pub remote_ref: String,

    /// Manifest file name inside the repository [default: files]
    #[arg(short, long)]
    pub manifest: Option<String>,

    /// Destination root; created if missing
    #[arg(short, long)]
    pub dest: Option<String>,

    /// Working directory relative paths are resolved against
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Config file (overrides PANG_INSTALL_CONFIG and the user config)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit NDJSON events for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default tracing directive for the `-v` count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
