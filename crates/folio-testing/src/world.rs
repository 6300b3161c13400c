//! Declarative setup for CLI integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// An isolated data directory plus a `folio` command pointed at it.
///
/// Every world gets its own temp directory, so tests never share gate state
/// or exported files.
pub struct TestWorld {
    _temp_dir: TempDir,
    data_dir: PathBuf,
    work_dir: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".folio");
        let work_dir = temp_dir.path().join("work");

        fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        fs::create_dir_all(&work_dir).expect("Failed to create work dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
            work_dir,
        }
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    /// Scratch directory for interchange files, separate from the data dir.
    pub fn work_dir(&self) -> &PathBuf {
        &self.work_dir
    }

    /// A `folio` command scoped to this world's data directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("folio").expect("folio binary not built");
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd.env_remove("FOLIO_PATH");
        cmd
    }

    /// Log the world in through the real CLI so gate state is on disk.
    pub fn login(&self) {
        self.command()
            .args(["login", "--email", "demo@example.com", "--password", "Password123!"])
            .assert()
            .success();
    }

    pub fn session_flag(&self) -> PathBuf {
        self.data_dir.join("session")
    }
}
