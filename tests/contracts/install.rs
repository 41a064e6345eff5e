//! Install flow contracts, exercised through the public API with port doubles.

use std::fs;
use std::path::MAIN_SEPARATOR_STR;

use pang_installer::{DownloadFailure, InstallRequest, InstallStatus, InstallUseCase};

use crate::common::{Call, CallLog, FakeDownloader, RecordingFs};

const BASE: &str = "https://raw.githubusercontent.com/xihtyM/Pang/main";

fn at(path: &str) -> String {
    format!("{BASE}/{path}")
}

fn use_case(
    downloader: FakeDownloader,
    log: &CallLog,
) -> InstallUseCase<FakeDownloader, RecordingFs> {
    InstallUseCase::new(downloader, RecordingFs::new(log.clone()))
}

/// CONTRACT: URLs are `base + "/" + entry`; local paths are `root + separator + entry`.
#[test]
fn contract_url_and_path_composition() {
    let work = tempfile::tempdir().unwrap();
    let log = CallLog::default();
    let downloader = FakeDownloader::new(log.clone())
        .serve(at("files"), "a.txt\nsub/b.txt")
        .serve(at("a.txt"), "a")
        .serve(at("sub/b.txt"), "b");
    let request = InstallRequest::new("xihtyM/Pang/main")
        .with_destination_root("D")
        .with_working_dir(work.path());

    let status = use_case(downloader, &log).install(&request);

    assert_eq!(status, InstallStatus::Success);
    let downloads: Vec<(String, std::path::PathBuf)> = log
        .calls()
        .into_iter()
        .filter_map(|c| match c {
            Call::Download { url, destination } => Some((url, destination)),
            Call::CreateDir(_) => None,
        })
        .collect();
    assert_eq!(downloads.len(), 3);
    assert_eq!(downloads[0].0, at("files"));
    assert_eq!(
        downloads[1],
        (at("a.txt"), work.path().join(format!("D{MAIN_SEPARATOR_STR}a.txt")))
    );
    assert_eq!(
        downloads[2],
        (
            at("sub/b.txt"),
            work.path().join(format!("D{MAIN_SEPARATOR_STR}sub/b.txt"))
        )
    );
}

/// CONTRACT: the first failing entry stops the walk and exits with status 3.
#[test]
fn contract_fail_fast() {
    let work = tempfile::tempdir().unwrap();
    let log = CallLog::default();
    let downloader = FakeDownloader::new(log.clone())
        .serve(at("files"), "first\nsecond\nthird")
        .serve(at("first"), "1")
        .fail(
            at("second"),
            DownloadFailure::InvalidUrlOrNetwork("refused".into()),
        )
        .serve(at("third"), "3");
    let request = InstallRequest::new("xihtyM/Pang/main").with_working_dir(work.path());

    let status = use_case(downloader, &log).install(&request);

    assert_eq!(status.code(), 3);
    // manifest + first + second; third never attempted
    assert_eq!(
        log.download_urls(),
        vec![at("files"), at("first"), at("second")]
    );
    assert_eq!(fs::read_to_string(work.path().join("first")).unwrap(), "1");
}

/// CONTRACT: every missing ancestor is created, root-most first, before any download.
#[test]
fn contract_directories_before_downloads() {
    let work = tempfile::tempdir().unwrap();
    let log = CallLog::default();
    let downloader = FakeDownloader::new(log.clone()).serve(at("files"), "");
    let root = ["A", "B", "C"].join(MAIN_SEPARATOR_STR);
    let request = InstallRequest::new("xihtyM/Pang/main")
        .with_destination_root(root)
        .with_working_dir(work.path());

    let status = use_case(downloader, &log).install(&request);

    assert_eq!(status, InstallStatus::Success);
    let calls = log.calls();
    let first_download = calls
        .iter()
        .position(|c| matches!(c, Call::Download { .. }))
        .unwrap();
    assert_eq!(first_download, 3);
    assert_eq!(
        log.created_dirs(),
        vec![
            work.path().join("A"),
            work.path().join("A").join("B"),
            work.path().join("A").join("B").join("C"),
        ]
    );
    assert!(work.path().join("A").join("B").join("C").is_dir());
}

/// CONTRACT: an empty manifest is a successful no-op.
#[test]
fn contract_empty_manifest_succeeds() {
    let work = tempfile::tempdir().unwrap();
    let log = CallLog::default();
    let downloader = FakeDownloader::new(log.clone()).serve(at("files"), "");
    let request = InstallRequest::new("xihtyM/Pang/main").with_working_dir(work.path());

    let report = use_case(downloader, &log)
        .execute(&request, std::sync::Arc::new(pang_installer::NoopEventSink))
        .unwrap();

    assert!(report.installed.is_empty());
    assert_eq!(log.download_urls(), vec![at("files")]);
}

/// CONTRACT: installs are repeatable; a second run overwrites the same files.
#[test]
fn contract_rerun_overwrites() {
    let work = tempfile::tempdir().unwrap();
    let request = InstallRequest::new("xihtyM/Pang/main")
        .with_destination_root("out")
        .with_working_dir(work.path());

    for body in ["v1", "v2"] {
        let log = CallLog::default();
        let downloader = FakeDownloader::new(log.clone())
            .serve(at("files"), "f.txt\n")
            .serve(at("f.txt"), body);
        assert!(use_case(downloader, &log).install(&request).is_success());
    }

    assert_eq!(
        fs::read_to_string(work.path().join("out").join("f.txt")).unwrap(),
        "v2"
    );
}

/// CONTRACT: manifest entries can never escape the destination root.
#[test]
fn contract_traversal_entries_are_refused() {
    let work = tempfile::tempdir().unwrap();
    let log = CallLog::default();
    let downloader = FakeDownloader::new(log.clone())
        .serve(at("files"), "../../etc/evil\n")
        .serve(at("../../etc/evil"), "x");
    let request = InstallRequest::new("xihtyM/Pang/main")
        .with_destination_root("out")
        .with_working_dir(work.path());

    let status = use_case(downloader, &log).install(&request);

    assert_eq!(status, InstallStatus::InstallFailed);
    assert_eq!(log.download_urls(), vec![at("files")]);
}

/// CONTRACT: an existing file is removed before its download, even when the download fails.
#[test]
fn contract_stale_file_removed_before_download() {
    let work = tempfile::tempdir().unwrap();
    fs::create_dir(work.path().join("out")).unwrap();
    fs::write(work.path().join("out").join("f.txt"), "old").unwrap();
    let log = CallLog::default();
    let downloader = FakeDownloader::new(log.clone())
        .serve(at("files"), "f.txt\n")
        .fail(
            at("f.txt"),
            DownloadFailure::InvalidUrlOrNetwork("timed out".into()),
        );
    let request = InstallRequest::new("xihtyM/Pang/main")
        .with_destination_root("out")
        .with_working_dir(work.path());

    let status = use_case(downloader, &log).install(&request);

    assert_eq!(status, InstallStatus::InstallFailed);
    assert!(!work.path().join("out").join("f.txt").exists());
}
