//! Common test utilities for kata integration tests.
//!
//! Provides `TestEnv` for isolated test environments that don't pollute
//! the user's working directory or `~/.local/share/kata/` action log.

#![allow(dead_code)]

use assert_cmd::Command;
pub use tempfile::TempDir;

/// A test environment with an isolated working directory and log directory.
///
/// Each `TestEnv` creates two temporary directories:
/// - `work_dir`: Acts as the working directory (where sample.txt lands)
/// - `log_dir`: Holds the action log (via `KATA_LOG_DIR` env var)
///
/// The `kata()` method returns a `Command` that sets `KATA_LOG_DIR`
/// per-invocation, making tests parallel-safe.
pub struct TestEnv {
    pub work_dir: TempDir,
    pub log_dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment with isolated directories.
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().unwrap(),
            log_dir: TempDir::new().unwrap(),
        }
    }

    /// Get a Command for the kata binary with isolated directories.
    pub fn kata(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_kata"));
        cmd.current_dir(self.work_dir.path());
        cmd.env("KATA_LOG_DIR", self.log_dir.path());
        cmd
    }

    /// Get the path to the working directory.
    pub fn path(&self) -> &std::path::Path {
        self.work_dir.path()
    }

    /// Get the path to the action log file, if written.
    pub fn log_file(&self) -> std::path::PathBuf {
        self.log_dir.path().join("action.log")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
