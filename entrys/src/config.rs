//! Engine settings: where the document lives and how profiles are found.
//!
//! Settings are built from defaults, then `ENTRYS_*` environment variables,
//! then explicit builder calls, each overriding the previous:
//!
//! | Variable                  | Setting                          |
//! |---------------------------|----------------------------------|
//! | `ENTRYS_CONFIG`           | document path                    |
//! | `ENTRYS_PROFILE_KEY`      | key holding the profile name     |
//! | `ENTRYS_DISABLE_PROFILES` | ignore profile declarations      |
//!
//! # Examples
//!
//! ```
//! use entrys::config::SettingsBuilder;
//!
//! let settings = SettingsBuilder::new()
//!     .skip_env()
//!     .with_path("config/application.yaml")
//!     .without_profiles()
//!     .build()
//!     .unwrap();
//!
//! assert!(!settings.profiles());
//! ```

use std::env;
use std::path::{Path, PathBuf};

use crate::document::{DocumentLoader, DocumentNode, Format};
use crate::entry::Entry;
use crate::error::{EntryError, Result};
use crate::file::{FileContent, DEFAULT_PATH};
use crate::profile::{ProfileResolver, PROFILE_KEY};
use crate::value::Val;

/// Environment variable overriding the document path.
pub const CONFIG_ENV: &str = "ENTRYS_CONFIG";

/// Environment variable overriding the profile key.
pub const PROFILE_KEY_ENV: &str = "ENTRYS_PROFILE_KEY";

/// Environment variable disabling profile resolution.
pub const DISABLE_PROFILES_ENV: &str = "ENTRYS_DISABLE_PROFILES";

/// Resolved engine settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    path: PathBuf,
    profile_key: String,
    profiles: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            profile_key: PROFILE_KEY.to_string(),
            profiles: true,
        }
    }
}

impl Settings {
    /// Path of the base document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Key holding the profile declaration.
    #[must_use]
    pub fn profile_key(&self) -> &str {
        &self.profile_key
    }

    /// Whether profile declarations are honored.
    #[must_use]
    pub const fn profiles(&self) -> bool {
        self.profiles
    }

    /// Profile-aware resolver for `key` against the base document.
    #[must_use]
    pub fn resolver(&self, key: &str) -> ProfileResolver<FileContent> {
        ProfileResolver::from_path(key, &self.path).with_profile_key(self.profile_key.as_str())
    }

    /// The entry resolving `key` under these settings.
    #[must_use]
    pub fn entry(&self, key: &str) -> Box<dyn Entry<String>> {
        if self.profiles {
            Box::new(self.resolver(key))
        } else {
            Box::new(Val::from_path(key, &self.path))
        }
    }

    /// The declared profile, if profiles are enabled and one is declared.
    ///
    /// # Errors
    ///
    /// Returns an error if the declared profile is blank.
    pub fn active_profile(&self) -> Result<Option<String>> {
        if self.profiles {
            self.resolver(&self.profile_key).profile()
        } else {
            Ok(None)
        }
    }

    /// The document lookups resolve against.
    ///
    /// # Errors
    ///
    /// Returns an error if the declared profile is blank or the profile path
    /// cannot be derived.
    pub fn document_path(&self) -> Result<PathBuf> {
        if !self.profiles {
            return Ok(self.path.clone());
        }
        Ok(self
            .resolver(&self.profile_key)
            .document_path()?
            .unwrap_or_else(|| self.path.clone()))
    }

    /// Read and parse the document lookups resolve against.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be located, read or parsed.
    pub fn load_document(&self) -> Result<DocumentNode> {
        let path = self.document_path()?;
        let text = FileContent::new(&path).value()?;
        Format::from_path(&path).parse(&text)
    }
}

/// Builds [`Settings`] from defaults, the environment and explicit overrides.
#[derive(Debug, Clone, Default)]
pub struct SettingsBuilder {
    path: Option<PathBuf>,
    profile_key: Option<String>,
    disable_profiles: bool,
    skip_env: bool,
}

impl SettingsBuilder {
    /// Create a builder with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the base document from `path`.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Read the profile declaration from `key`.
    #[must_use]
    pub fn with_profile_key(mut self, key: impl Into<String>) -> Self {
        self.profile_key = Some(key.into());
        self
    }

    /// Ignore profile declarations.
    #[must_use]
    pub const fn without_profiles(mut self) -> Self {
        self.disable_profiles = true;
        self
    }

    /// Ignore `ENTRYS_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Build the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment override is invalid.
    pub fn build(self) -> Result<Settings> {
        let mut settings = Settings::default();

        if !self.skip_env {
            Self::apply_env(&mut settings)?;
        }

        if let Some(path) = self.path {
            settings.path = path;
        }
        if let Some(key) = self.profile_key {
            settings.profile_key = key;
        }
        if self.disable_profiles {
            settings.profiles = false;
        }

        if settings.profile_key.trim().is_empty() {
            return Err(EntryError::InvalidKey {
                key: settings.profile_key,
                reason: "profile key must not be empty".to_string(),
            });
        }

        log::debug!(
            "settings: path={}, profile_key={}, profiles={}",
            settings.path.display(),
            settings.profile_key,
            settings.profiles
        );
        Ok(settings)
    }

    fn apply_env(settings: &mut Settings) -> Result<()> {
        if let Ok(path) = env::var(CONFIG_ENV) {
            settings.path = PathBuf::from(path);
        }

        if let Ok(key) = env::var(PROFILE_KEY_ENV) {
            settings.profile_key = key;
        }

        if let Ok(val) = env::var(DISABLE_PROFILES_ENV) {
            settings.profiles = !parse_bool(DISABLE_PROFILES_ENV, &val)?;
        }

        Ok(())
    }
}

/// Parse a boolean flag value: true/1/yes/on or false/0/no/off, ignoring case.
///
/// # Errors
///
/// Returns an error naming `field` if the value is not recognized.
///
/// # Examples
///
/// ```
/// use entrys::config::parse_bool;
///
/// assert!(parse_bool("FLAG", "Yes").unwrap());
/// assert!(!parse_bool("FLAG", "off").unwrap());
/// assert!(parse_bool("FLAG", "maybe").is_err());
/// ```
pub fn parse_bool(field: &str, s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(EntryError::malformed(format!(
            "invalid boolean value for {field}: '{s}' (expected true/false/1/0/yes/no/on/off)"
        ))),
    }
}
