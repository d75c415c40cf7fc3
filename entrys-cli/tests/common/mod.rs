//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Document fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Base document declaring the `dev` profile.
#[allow(dead_code)]
pub const APPLICATION: &str = "\
entrys:
  profile: dev
server:
  port: 8080
  host: base-host
";

/// Profile document for `dev`.
#[allow(dead_code)]
pub const APPLICATION_DEV: &str = "\
server:
  port: 9090
  url: ${ENTRYS_TEST_URL:http://localhost:9090}
  replicas: [db-1, db-2, db-3]
  empty: []
  secret: ${ENTRYS_TEST_SECRET}
";

/// Test environment with an isolated document directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new, empty test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Create a test environment holding the `dev` profile documents.
    pub fn with_profile() -> Self {
        let env = Self::new();
        env.write("application.yaml", APPLICATION);
        env.write("application-dev.yaml", APPLICATION_DEV);
        env
    }

    /// Get a bare command builder with `ENTRYS_*` variables cleared.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("entrys").expect("Failed to find entrys binary");
        for key in [
            "ENTRYS_CONFIG",
            "ENTRYS_PROFILE_KEY",
            "ENTRYS_DISABLE_PROFILES",
            "ENTRYS_LOG_MODE",
            "ENTRYS_TEST_URL",
            "ENTRYS_TEST_SECRET",
        ] {
            cmd.env_remove(key);
        }
        cmd
    }

    /// Get a command builder with `--file` pointing at `application.yaml`.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--file").arg(self.document());
        cmd
    }

    /// Path of the base document.
    pub fn document(&self) -> PathBuf {
        self.temp_path.join("application.yaml")
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write `content` to `name` and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, content).expect("Failed to write test document");
        path
    }
}
