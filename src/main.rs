//! pang-installer CLI - install the files listed in a remote manifest
//!
//! Usage: pang-installer <REMOTE_REF> [--manifest NAME] [--dest DIR]
//!
//! Exit codes:
//!   0  every listed file installed
//!   1  bad source reference or unusable configuration
//!   2  destination directory could not be created
//!   3  manifest fetch or file install failed

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pang_installer::config::load_or_default;
use pang_installer::infrastructure::{ConsoleEventSink, JsonEventSink};
use pang_installer::presentation::{print_config_warnings, print_error, Cli};
use pang_installer::{
    InstallEventSink, InstallRequest, InstallStatus, InstallUseCase, LocalFs, ReqwestDownloader,
};

/// Overrides the `-v` derived log filter, e.g. `PANG_INSTALL_LOG=pang_installer=trace`
const LOG_ENV: &str = "PANG_INSTALL_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(status) => status.into(),
        Err(err) => {
            print_error(&err, cli.json);
            InstallStatus::BadSource.into()
        }
    }
}

fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Errors returned here happen before the install starts.
fn run(cli: &Cli) -> Result<InstallStatus> {
    let (config, warnings) =
        load_or_default(cli.config.as_deref()).context("failed to load configuration")?;
    print_config_warnings(&warnings);
    debug!(?config, "effective configuration");

    let mut request = InstallRequest::new(cli.remote_ref.clone())
        .with_working_dir(cli.cwd.clone().unwrap_or_else(|| PathBuf::from(".")));
    if let Some(manifest) = cli.manifest.clone().or(config.source.manifest.clone()) {
        request = request.with_manifest_name(manifest);
    }
    if let Some(dest) = cli.dest.clone().or(config.install.destination.clone()) {
        request = request.with_destination_root(dest);
    }

    let downloader =
        ReqwestDownloader::from_config(&config.network).context("failed to build HTTP client")?;
    let use_case = InstallUseCase::new(downloader, LocalFs::new()).with_host(config.source.host);

    let events: Arc<dyn InstallEventSink> = if cli.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout().verbose(cli.verbose > 0))
    };

    match use_case.execute(&request, events) {
        Ok(_) => Ok(InstallStatus::Success),
        Err(failure) => {
            let status = failure.status();
            print_error(&anyhow::Error::new(failure), cli.json);
            Ok(status)
        }
    }
}
