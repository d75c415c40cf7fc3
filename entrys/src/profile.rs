//! Profile-aware document selection.
//!
//! A base document may declare an active profile under `entrys.profile`:
//!
//! ```yaml
//! entrys:
//!   profile: dev
//! ```
//!
//! When it does, keys are resolved against the profile document instead,
//! found by rewriting `application` in the base path to
//! `application-<profile>` (`application.yaml` becomes
//! `application-dev.yaml`). Per lookup:
//!
//! - no declaration: resolve against the base document
//! - blank declaration: fail, regardless of the requested key
//! - non-blank declaration: resolve against the profile document, never
//!   falling back to the base document

use std::path::{Path, PathBuf};

use crate::document::{DocumentLoader, Format};
use crate::entry::{Constant, Entry};
use crate::error::{EntryError, Result};
use crate::file::{FileContent, DEFAULT_PATH};
use crate::system::{Environment, ProcessEnvironment};
use crate::value::Val;

/// Key holding the profile declaration.
pub const PROFILE_KEY: &str = "entrys.profile";

/// File name stem rewritten to select a profile document.
pub const PROFILE_STEM: &str = "application";

/// Path of the profile document for `path`.
///
/// Rewrites the leftmost `application` in the path to `application-<profile>`.
///
/// # Errors
///
/// Returns an error if the path is not valid UTF-8 or does not contain
/// `application`.
///
/// # Examples
///
/// ```
/// use entrys::profile::profile_path;
/// use std::path::Path;
///
/// assert_eq!(
///     profile_path(Path::new("config/application.yaml"), "dev").unwrap(),
///     Path::new("config/application-dev.yaml")
/// );
/// ```
pub fn profile_path(path: &Path, profile: &str) -> Result<PathBuf> {
    let text = path.to_str().ok_or_else(|| {
        EntryError::malformed(format!(
            "path {} contains invalid UTF-8",
            path.display()
        ))
    })?;
    if !text.contains(PROFILE_STEM) {
        return Err(EntryError::malformed(format!(
            "path '{text}' has no '{PROFILE_STEM}' to rewrite for profile '{profile}'"
        )));
    }
    Ok(PathBuf::from(text.replacen(
        PROFILE_STEM,
        &format!("{PROFILE_STEM}-{profile}"),
        1,
    )))
}

/// The value of a key, taken from the active profile's document when one is declared.
///
/// # Examples
///
/// ```
/// use entrys::{Constant, Entry, ProfileResolver};
///
/// let base = Constant::new("port: 8080".to_string());
/// assert_eq!(ProfileResolver::new("port", base, None).value().unwrap(), "8080");
///
/// let blank = Constant::new("entrys:\n  profile: \"\"\nport: 8080".to_string());
/// assert!(ProfileResolver::new("port", blank, None).value().unwrap_err().is_blank_profile());
/// ```
#[derive(Debug, Clone)]
pub struct ProfileResolver<C, L = Format, V = ProcessEnvironment> {
    key: String,
    content: C,
    path: Option<PathBuf>,
    profile_key: String,
    loader: L,
    environment: V,
}

impl<C> ProfileResolver<C> {
    /// Resolve `key` from the YAML `content` of the base document stored at `path`.
    ///
    /// Without a path no profile document can be located, so the key is
    /// resolved from `content` unless the declared profile is blank.
    pub fn new(key: impl Into<String>, content: C, path: Option<PathBuf>) -> Self {
        Self {
            key: key.into(),
            content,
            path,
            profile_key: PROFILE_KEY.to_string(),
            loader: Format::Yaml,
            environment: ProcessEnvironment,
        }
    }
}

impl ProfileResolver<FileContent> {
    /// Resolve `key` starting from the base document at `path`.
    pub fn from_path(key: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = Format::from_path(&path);
        Self::new(key, FileContent::new(&path), Some(path)).with_loader(format)
    }

    /// Resolve `key` starting from the base document at the default location.
    pub fn from_default(key: impl Into<String>) -> Self {
        Self::from_path(key, DEFAULT_PATH)
    }
}

impl<C, L, V> ProfileResolver<C, L, V> {
    /// Read the profile declaration from `key` instead of [`PROFILE_KEY`].
    #[must_use]
    pub fn with_profile_key(mut self, key: impl Into<String>) -> Self {
        self.profile_key = key.into();
        self
    }

    /// Parse documents with `loader`.
    pub fn with_loader<M: DocumentLoader>(self, loader: M) -> ProfileResolver<C, M, V> {
        ProfileResolver {
            key: self.key,
            content: self.content,
            path: self.path,
            profile_key: self.profile_key,
            loader,
            environment: self.environment,
        }
    }

    /// Resolve placeholders against `environment`.
    pub fn with_environment<W: Environment>(self, environment: W) -> ProfileResolver<C, L, W> {
        ProfileResolver {
            key: self.key,
            content: self.content,
            path: self.path,
            profile_key: self.profile_key,
            loader: self.loader,
            environment,
        }
    }
}

impl<C, L, V> ProfileResolver<C, L, V>
where
    C: Entry<String>,
    L: DocumentLoader,
    V: Environment,
{
    /// The declared profile, or `None` when the base document declares none.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::BlankProfile`] if the declared profile is blank.
    pub fn profile(&self) -> Result<Option<String>> {
        match self.base(&self.profile_key).value() {
            Ok(profile) if profile.trim().is_empty() => Err(EntryError::BlankProfile {
                key: self.profile_key.clone(),
            }),
            Ok(profile) => Ok(Some(profile)),
            Err(err) => {
                log::debug!("no profile declared under '{}': {err}", self.profile_key);
                Ok(None)
            }
        }
    }

    /// The document that lookups resolve against: the profile document when a
    /// profile is declared and the base path is known, the base path otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the declared profile is blank or the profile path
    /// cannot be derived.
    pub fn document_path(&self) -> Result<Option<PathBuf>> {
        match (self.profile()?, &self.path) {
            (Some(profile), Some(path)) => profile_path(path, &profile).map(Some),
            (_, path) => Ok(path.clone()),
        }
    }

    fn base<'a>(
        &'a self,
        key: &str,
    ) -> Val<impl Entry<String> + 'a, &'a L, &'a V> {
        Val::new(key, move || self.content.value())
            .with_loader(&self.loader)
            .with_environment(&self.environment)
    }
}

impl<C, L, V> Entry<String> for ProfileResolver<C, L, V>
where
    C: Entry<String>,
    L: DocumentLoader,
    V: Environment,
{
    fn value(&self) -> Result<String> {
        let profile = self
            .profile()
            .map_err(|err| err.context(format!("failed to resolve key '{}'", self.key)))?;
        match (profile, &self.path) {
            (Some(profile), Some(path)) => {
                let path = profile_path(path, &profile)?;
                log::debug!(
                    "resolving '{}' from profile '{profile}' document {}",
                    self.key,
                    path.display()
                );
                let content = FileContent::new(path);
                Val::new(self.key.as_str(), content)
                    .with_loader(&self.loader)
                    .with_environment(&self.environment)
                    .value()
            }
            (Some(profile), None) => {
                log::debug!(
                    "profile '{profile}' declared but the base document has no path; using it"
                );
                self.base(&self.key).value()
            }
            (None, _) => self.base(&self.key).value(),
        }
    }
}

impl ProfileResolver<Constant<String>> {
    /// Resolve `key` from literal YAML text with no backing path.
    pub fn from_text(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(key, Constant::new(text.into()), None)
    }
}
