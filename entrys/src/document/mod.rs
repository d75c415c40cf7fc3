//! Parsed document trees and the loaders that produce them.
//!
//! Every supported format parses into the same [`DocumentNode`] tree, so key
//! traversal and interpolation never see format-specific types. Scalars keep
//! the text written in the document: numbers and booleans are never
//! reformatted.
//!
//! # Examples
//!
//! ```
//! use entrys::document::{DocumentLoader, DocumentNode, Format};
//!
//! let root = Format::Yaml.parse("ports: [8080, 8081]").unwrap();
//! let ports = root.as_mapping().unwrap().get("ports").unwrap();
//! assert_eq!(
//!     ports,
//!     &DocumentNode::Sequence(vec![
//!         DocumentNode::Scalar("8080".into()),
//!         DocumentNode::Scalar("8081".into()),
//!     ])
//! );
//! ```

mod json;
mod yaml;

use std::fmt;
use std::path::Path;

use serde::ser::{Serialize, Serializer};

use crate::error::Result;

pub use json::JsonLoader;
pub use yaml::YamlLoader;

/// One node of a parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentNode {
    /// An explicit null (`~`, `null`, or an empty value).
    Null,
    /// A scalar with its literal text.
    Scalar(String),
    /// An ordered list of nodes.
    Sequence(Vec<DocumentNode>),
    /// An ordered map of string keys to nodes.
    Mapping(Mapping),
}

impl DocumentNode {
    /// Short name of the node kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Scalar(_) => "scalar",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }

    /// The mapping held by this node, if it is one.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// The scalar text held by this node, if it is one.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(text) => Some(text),
            _ => None,
        }
    }

    /// Check if this node is an explicit null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl Serialize for DocumentNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Scalar(text) => serializer.serialize_str(text),
            Self::Sequence(items) => serializer.collect_seq(items),
            Self::Mapping(mapping) => mapping.serialize(serializer),
        }
    }
}

/// Ordered string-keyed map of document nodes.
///
/// Lookups by an absent key return `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: Vec<(String, DocumentNode)>,
}

impl Mapping {
    /// Create an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry, replacing an earlier entry with the same key in place.
    pub fn insert(&mut self, key: impl Into<String>, node: DocumentNode) {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = node,
            None => self.entries.push((key, node)),
        }
    }

    /// The node stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DocumentNode> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, node)| node)
    }

    /// Iterate entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DocumentNode)> {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, DocumentNode)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (String, DocumentNode)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (key, node) in iter {
            mapping.insert(key, node);
        }
        mapping
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Parses raw document text into a [`DocumentNode`] tree.
pub trait DocumentLoader {
    /// Parse `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a well-formed document.
    fn parse(&self, text: &str) -> Result<DocumentNode>;
}

impl<L: DocumentLoader + ?Sized> DocumentLoader for &L {
    fn parse(&self, text: &str) -> Result<DocumentNode> {
        (**self).parse(text)
    }
}

/// Supported document formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// YAML (the default).
    #[default]
    Yaml,
    /// JSON.
    Json,
}

impl Format {
    /// Pick the format from a file extension: `.json` is JSON, anything else YAML.
    ///
    /// # Examples
    ///
    /// ```
    /// use entrys::document::Format;
    /// use std::path::Path;
    ///
    /// assert_eq!(Format::from_path(Path::new("application.json")), Format::Json);
    /// assert_eq!(Format::from_path(Path::new("application.yml")), Format::Yaml);
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => write!(f, "yaml"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl DocumentLoader for Format {
    fn parse(&self, text: &str) -> Result<DocumentNode> {
        match self {
            Self::Yaml => YamlLoader.parse(text),
            Self::Json => JsonLoader.parse(text),
        }
    }
}
