//! Resolution of one key from one document.

use std::path::PathBuf;

use crate::document::{DocumentLoader, Format};
use crate::entry::{Constant, Entry, SafeEntry};
use crate::error::Result;
use crate::file::{FileContent, DEFAULT_PATH};
use crate::interpolate::Interpolator;
use crate::key::{KeyPath, KeyResolver, Terminal};
use crate::system::{Environment, ProcessEnvironment};

/// The value of a dotted key in a document, with placeholders resolved.
///
/// Every evaluation reads the content entry, parses it, walks the key and
/// interpolates the scalar found there. Sequences resolve to their items
/// joined with `;` and are not interpolated. An absent key or explicit null
/// fails with `attribute for key '<key>' is null`.
///
/// # Examples
///
/// ```
/// use entrys::{Constant, Entry, Val};
///
/// let content = Constant::new("person:\n  age: \"123\"\nages: [123, 321]".to_string());
/// assert_eq!(Val::new("person.age", content.clone()).value().unwrap(), "123");
/// assert_eq!(Val::new("ages", content.clone()).value().unwrap(), "123;321");
/// assert!(Val::new("person.name", content).value().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Val<C, L = Format, V = ProcessEnvironment> {
    key: String,
    content: C,
    loader: L,
    interpolator: Interpolator<V>,
}

impl<C> Val<C> {
    /// Resolve `key` in the YAML text produced by `content`.
    pub fn new(key: impl Into<String>, content: C) -> Self {
        Self {
            key: key.into(),
            content,
            loader: Format::Yaml,
            interpolator: Interpolator::new(),
        }
    }
}

impl Val<FileContent> {
    /// Resolve `key` in the document at `path`; `.json` files are parsed as JSON.
    pub fn from_path(key: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = Format::from_path(&path);
        Self::new(key, FileContent::new(path)).with_loader(format)
    }

    /// Resolve `key` in the document at the default location.
    pub fn from_default(key: impl Into<String>) -> Self {
        Self::from_path(key, DEFAULT_PATH)
    }
}

impl Val<Constant<String>> {
    /// Resolve `key` in literal YAML text.
    pub fn from_text(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(key, Constant::new(text.into()))
    }
}

impl<C, L, V> Val<C, L, V> {
    /// Parse the content with `loader`.
    pub fn with_loader<M: DocumentLoader>(self, loader: M) -> Val<C, M, V> {
        Val {
            key: self.key,
            content: self.content,
            loader,
            interpolator: self.interpolator,
        }
    }

    /// Resolve placeholders against `environment`.
    pub fn with_environment<W: Environment>(self, environment: W) -> Val<C, L, W> {
        Val {
            key: self.key,
            content: self.content,
            loader: self.loader,
            interpolator: Interpolator::with_environment(environment),
        }
    }

    /// The key being resolved.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<C, L, V> Val<C, L, V>
where
    C: Entry<String>,
    L: DocumentLoader,
    V: Environment,
{
    fn lookup(&self) -> Result<Option<String>> {
        let path = KeyPath::parse(&self.key)?;
        let text = self.content.value().map_err(|err| {
            err.context(format!("failed to read document for key: '{}'", self.key))
        })?;
        let root = self.loader.parse(&text)?;
        match KeyResolver::terminal(&root, &path)? {
            Some(Terminal::Scalar(text)) => self.interpolator.resolve(text).map(Some),
            Some(sequence) => Ok(Some(sequence.into_raw())),
            None => Ok(None),
        }
    }
}

impl<C, L, V> Entry<String> for Val<C, L, V>
where
    C: Entry<String>,
    L: DocumentLoader,
    V: Environment,
{
    fn value(&self) -> Result<String> {
        SafeEntry::with_message(
            || self.lookup(),
            format!("attribute for key '{}' is null", self.key),
        )
        .value()
    }
}
