//! Test doubles for the Downloader and FileSystem ports.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use pang_installer::{DownloadFailure, Downloader, FileSystem, FsResult, LocalFs};

/// Something a double observed, in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateDir(PathBuf),
    Download { url: String, destination: PathBuf },
}

/// Call log shared between the doubles of one test
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    pub fn push(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    pub fn download_urls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Download { url, .. } => Some(url),
                Call::CreateDir(_) => None,
            })
            .collect()
    }

    pub fn created_dirs(&self) -> Vec<PathBuf> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::CreateDir(path) => Some(path),
                Call::Download { .. } => None,
            })
            .collect()
    }
}

/// Downloader that serves canned bodies and writes them to disk
pub struct FakeDownloader {
    bodies: HashMap<String, Vec<u8>>,
    failures: HashMap<String, DownloadFailure>,
    log: CallLog,
}

impl FakeDownloader {
    pub fn new(log: CallLog) -> Self {
        Self {
            bodies: HashMap::new(),
            failures: HashMap::new(),
            log,
        }
    }

    pub fn serve(mut self, url: impl Into<String>, body: impl AsRef<[u8]>) -> Self {
        self.bodies.insert(url.into(), body.as_ref().to_vec());
        self
    }

    pub fn fail(mut self, url: impl Into<String>, failure: DownloadFailure) -> Self {
        self.failures.insert(url.into(), failure);
        self
    }
}

impl Downloader for FakeDownloader {
    fn download(&self, url: &str, destination: &Path) -> Result<(), DownloadFailure> {
        self.log.push(Call::Download {
            url: url.to_string(),
            destination: destination.to_path_buf(),
        });

        if let Some(failure) = self.failures.get(url) {
            return Err(failure.clone());
        }
        let Some(body) = self.bodies.get(url) else {
            return Err(DownloadFailure::InvalidUrlOrNetwork(format!(
                "404 Not Found: {url}"
            )));
        };
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| DownloadFailure::InvalidUrlOrNetwork(e.to_string()))?;
        }
        fs::write(destination, body).map_err(|e| DownloadFailure::InvalidUrlOrNetwork(e.to_string()))
    }
}

/// Local file system that logs directory creation
pub struct RecordingFs {
    inner: LocalFs,
    log: CallLog,
}

impl RecordingFs {
    pub fn new(log: CallLog) -> Self {
        Self {
            inner: LocalFs::new(),
            log,
        }
    }
}

impl FileSystem for RecordingFs {
    fn create_dir(&self, path: &Path) -> FsResult<()> {
        self.log.push(Call::CreateDir(path.to_path_buf()));
        self.inner.create_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        self.inner.remove_file(path)
    }

    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        self.inner.read(path)
    }
}
