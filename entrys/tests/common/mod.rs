//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for documents on disk and guards
//! for process environment variables.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory holding application documents.
///
/// The directory is removed when the fixture is dropped.
pub struct DocumentFixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl DocumentFixture {
    /// Creates an empty fixture directory.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Writes `content` to `name` inside the fixture and returns its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Path of `name` inside the fixture, whether or not it exists.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// The fixture directory.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

/// RAII guard for setting and restoring an environment variable.
///
/// Tests using it must be marked `#[serial]`.
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Sets `key` to `value` until the guard is dropped.
    pub fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Removes `key` until the guard is dropped.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}
