//! Document text read from the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use crate::entry::Entry;
use crate::error::{EntryError, Result};

/// Default location of the application document.
pub const DEFAULT_PATH: &str = "src/main/resources/application.yaml";

/// Reads a file's full contents as UTF-8 on every evaluation.
///
/// A leading `~` is expanded to the home directory.
///
/// # Examples
///
/// ```no_run
/// use entrys::file::FileContent;
/// use entrys::Entry;
///
/// let content = FileContent::new("config/application.yaml");
/// println!("{}", content.value().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    path: PathBuf,
}

impl FileContent {
    /// Read from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The configured path, before tilde expansion.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileContent {
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}

impl Entry<String> for FileContent {
    fn value(&self) -> Result<String> {
        let path = expand_tilde(&self.path)?;
        log::debug!("reading document {}", path.display());
        fs::read_to_string(&path).map_err(|source| EntryError::Io { path, source })
    }
}

/// Expand a leading `~` or `~/` to the home directory.
///
/// `~user` forms are left untouched.
///
/// # Errors
///
/// Returns an error if the path starts with `~` and the home directory
/// cannot be determined.
///
/// # Examples
///
/// ```
/// use entrys::file::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/app/application.yaml")).unwrap();
/// assert!(expanded.ends_with("app/application.yaml"));
///
/// let untouched = expand_tilde(Path::new("/etc/application.yaml")).unwrap();
/// assert_eq!(untouched, Path::new("/etc/application.yaml"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };
    let home = home::home_dir().ok_or_else(|| {
        EntryError::malformed(format!(
            "cannot determine home directory to expand '{}'",
            path.display()
        ))
    })?;
    Ok(home.join(rest))
}
