//! HTTP Implementations
//!
//! Concrete implementations of the Downloader port.

mod downloader;

pub use downloader::ReqwestDownloader;
