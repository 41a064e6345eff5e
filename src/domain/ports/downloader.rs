//! Downloader port - the byte-transfer primitive
//!
//! The install engine never speaks HTTP itself. It hands a URL and a local
//! destination to a `Downloader` and only distinguishes success from the two
//! failure modes below.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

/// Why a transfer did not complete
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownloadFailure {
    /// Not enough memory to perform the transfer
    #[error("not enough memory to download file")]
    OutOfMemory,
    /// The URL is malformed or unreachable, or the server refused it
    #[error("URL is not valid or the network request failed: {0}")]
    InvalidUrlOrNetwork(String),
}

/// Abstract GET-to-file transfer
///
/// Implementations:
/// - `ReqwestDownloader` - blocking HTTP(S)
/// - in-memory fakes for testing
pub trait Downloader {
    /// Fetch `url` and write the body to `destination`, replacing any file there.
    fn download(&self, url: &str, destination: &Path) -> Result<(), DownloadFailure>;
}

impl<D: Downloader + ?Sized> Downloader for &D {
    fn download(&self, url: &str, destination: &Path) -> Result<(), DownloadFailure> {
        (**self).download(url, destination)
    }
}

impl<D: Downloader + ?Sized> Downloader for Box<D> {
    fn download(&self, url: &str, destination: &Path) -> Result<(), DownloadFailure> {
        (**self).download(url, destination)
    }
}

impl<D: Downloader + ?Sized> Downloader for Arc<D> {
    fn download(&self, url: &str, destination: &Path) -> Result<(), DownloadFailure> {
        (**self).download(url, destination)
    }
}
