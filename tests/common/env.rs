//! Isolated environment for running the pang-installer binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Host nobody listens on; every download fails fast with a network error
pub const UNREACHABLE_HOST: &str = "http://127.0.0.1:9/";

/// Result of running the binary
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Temp working directory plus a private config file
pub struct TestEnv {
    pub work_dir: TempDir,
    config_dir: TempDir,
    config_path: PathBuf,
    bin: PathBuf,
}

impl TestEnv {
    /// Environment whose config points every download at `UNREACHABLE_HOST`
    pub fn new() -> Self {
        Self::with_config(&format!(
            "[source]\nhost = \"{UNREACHABLE_HOST}\"\n\n[network]\ntimeout_secs = 5\n"
        ))
    }

    pub fn with_config(content: &str) -> Self {
        let work_dir = tempfile::tempdir().unwrap();
        let config_dir = tempfile::tempdir().unwrap();
        let config_path = config_dir.path().join("config.toml");
        fs::write(&config_path, content).unwrap();
        Self {
            work_dir,
            config_dir,
            config_path,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_pang-installer")),
        }
    }

    pub fn work_path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run with the working directory as `--cwd` and the private config file
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.args(args)
            .arg("--cwd")
            .arg(self.work_dir.path())
            .current_dir(self.work_dir.path())
            .env("PANG_INSTALL_CONFIG", &self.config_path)
            .env("XDG_CONFIG_HOME", self.config_dir.path())
            .env("NO_COLOR", "1")
            .env_remove("PANG_INSTALL_HOST")
            .env_remove("PANG_INSTALL_MANIFEST")
            .env_remove("PANG_INSTALL_DESTINATION")
            .env_remove("PANG_INSTALL_TIMEOUT_SECS")
            .env_remove("PANG_INSTALL_USER_AGENT")
            .env_remove("PANG_INSTALL_LOG");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().unwrap();
        TestResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
