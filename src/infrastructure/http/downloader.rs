//! Blocking HTTP downloader
//!
//! Implements the Downloader port with `reqwest`'s blocking client. The body is
//! streamed straight into the destination file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::NetworkConfig;
use crate::domain::ports::{DownloadFailure, Downloader};

/// GET-to-file transfer over HTTP(S)
#[derive(Debug, Clone)]
pub struct ReqwestDownloader {
    client: Client,
}

impl ReqwestDownloader {
    /// Downloader with default timeout and user agent
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::from_config(&NetworkConfig::default())
    }

    pub fn from_config(network: &NetworkConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(network.timeout_secs))
            .user_agent(network.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }

    fn write_body(
        &self,
        response: &mut reqwest::blocking::Response,
        destination: &Path,
    ) -> Result<u64, DownloadFailure> {
        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_failure)?;
        }

        let mut file = File::create(destination).map_err(io_failure)?;
        let written = response.copy_to(&mut file).map_err(request_failure)?;
        file.flush().map_err(io_failure)?;
        Ok(written)
    }
}

impl Downloader for ReqwestDownloader {
    fn download(&self, url: &str, destination: &Path) -> Result<(), DownloadFailure> {
        let mut response = self.client.get(url).send().map_err(request_failure)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadFailure::InvalidUrlOrNetwork(format!(
                "server answered {status}"
            )));
        }

        match self.write_body(&mut response, destination) {
            Ok(bytes) => {
                debug!(url, path = %destination.display(), bytes, "downloaded");
                Ok(())
            }
            Err(failure) => {
                // Never leave a truncated body behind under the final name.
                let _ = std::fs::remove_file(destination);
                Err(failure)
            }
        }
    }
}

fn request_failure(err: reqwest::Error) -> DownloadFailure {
    DownloadFailure::InvalidUrlOrNetwork(err.to_string())
}

fn io_failure(err: io::Error) -> DownloadFailure {
    match err.kind() {
        io::ErrorKind::OutOfMemory => DownloadFailure::OutOfMemory,
        _ => DownloadFailure::InvalidUrlOrNetwork(err.to_string()),
    }
}
