//! Dotted key paths and their traversal over a document tree.
//!
//! A key such as `database.primary.host` names one segment per mapping
//! level. Every segment but the last must land on a mapping; the last one
//! must land on a scalar or a sequence of scalars.

use std::fmt;
use std::str::FromStr;

use crate::document::DocumentNode;
use crate::entry::{Constant, Entry};
use crate::error::{EntryError, Result};
use crate::operation::{Split, DEFAULT_DELIMITER};

/// Separator between key segments.
pub const KEY_SEPARATOR: &str = ".";

/// A validated dotted key path with at least one non-empty segment.
///
/// # Examples
///
/// ```
/// use entrys::key::KeyPath;
///
/// let path: KeyPath = "database.host".parse().unwrap();
/// assert_eq!(path.segments(), ["database", "host"]);
/// assert!("database..host".parse::<KeyPath>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    key: String,
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a dotted key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or contains an empty segment.
    pub fn parse(key: &str) -> Result<Self> {
        let segments = Split::new(Constant::new(key.to_string()), KEY_SEPARATOR).value()?;
        if segments.iter().any(String::is_empty) {
            return Err(EntryError::InvalidKey {
                key: key.to_string(),
                reason: if key.is_empty() {
                    "key must not be empty".to_string()
                } else {
                    "key contains an empty segment".to_string()
                },
            });
        }
        Ok(Self {
            key: key.to_string(),
            segments,
        })
    }

    /// The segments in traversal order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The original dotted key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// The dotted key made of the first `len` segments.
    fn prefix(&self, len: usize) -> String {
        self.segments[..len].join(KEY_SEPARATOR)
    }
}

impl FromStr for KeyPath {
    type Err = EntryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

/// The value found at the end of a key path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Terminal<'a> {
    /// A scalar's literal text.
    Scalar(&'a str),
    /// The literal texts of a sequence's scalar children, in order.
    Sequence(Vec<&'a str>),
}

impl Terminal<'_> {
    /// The raw string form: scalar text, or sequence items joined with `;`.
    #[must_use]
    pub fn into_raw(self) -> String {
        match self {
            Self::Scalar(text) => text.to_string(),
            Self::Sequence(items) => items.join(DEFAULT_DELIMITER),
        }
    }
}

/// Walks key paths through a parsed document.
///
/// Absent keys and explicit nulls anywhere along the path resolve to `None`,
/// the "missing" signal. Nodes of the wrong shape are
/// [`EntryError::TypeMismatch`] failures.
///
/// # Examples
///
/// ```
/// use entrys::document::{DocumentLoader, YamlLoader};
/// use entrys::key::{KeyPath, KeyResolver};
///
/// let root = YamlLoader.parse("person:\n  age: \"123\"\nages: [1, 2]").unwrap();
///
/// let age = KeyResolver::resolve(&root, &"person.age".parse::<KeyPath>().unwrap()).unwrap();
/// assert_eq!(age, Some("123".to_string()));
///
/// let ages = KeyResolver::resolve(&root, &"ages".parse::<KeyPath>().unwrap()).unwrap();
/// assert_eq!(ages, Some("1;2".to_string()));
///
/// let absent = KeyResolver::resolve(&root, &"person.name".parse::<KeyPath>().unwrap()).unwrap();
/// assert_eq!(absent, None);
/// ```
pub struct KeyResolver;

impl KeyResolver {
    /// Find the node at `path`, whatever its kind.
    ///
    /// # Errors
    ///
    /// Returns an error if a node before the last segment is not a mapping.
    pub fn node<'a>(root: &'a DocumentNode, path: &KeyPath) -> Result<Option<&'a DocumentNode>> {
        let mut current = root;
        for (depth, segment) in path.segments().iter().enumerate() {
            let mapping = match current {
                DocumentNode::Mapping(mapping) => mapping,
                DocumentNode::Null => return Ok(None),
                other => {
                    return Err(EntryError::TypeMismatch {
                        key: if depth == 0 {
                            "<root>".to_string()
                        } else {
                            path.prefix(depth)
                        },
                        expected: "mapping",
                        found: other.kind(),
                    })
                }
            };
            match mapping.get(segment) {
                Some(node) => current = node,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    /// Find the scalar or sequence at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path crosses a non-mapping node, ends on a
    /// mapping, or ends on a sequence holding non-scalar items.
    pub fn terminal<'a>(root: &'a DocumentNode, path: &KeyPath) -> Result<Option<Terminal<'a>>> {
        let Some(node) = Self::node(root, path)? else {
            return Ok(None);
        };
        match node {
            DocumentNode::Null => Ok(None),
            DocumentNode::Scalar(text) => Ok(Some(Terminal::Scalar(text))),
            DocumentNode::Sequence(items) => items
                .iter()
                .map(|item| {
                    item.as_scalar().ok_or_else(|| EntryError::TypeMismatch {
                        key: path.to_string(),
                        expected: "sequence of scalars",
                        found: item.kind(),
                    })
                })
                .collect::<Result<Vec<_>>>()
                .map(|items| Some(Terminal::Sequence(items))),
            DocumentNode::Mapping(_) => Err(EntryError::TypeMismatch {
                key: path.to_string(),
                expected: "scalar or sequence",
                found: node.kind(),
            }),
        }
    }

    /// Resolve `path` to its raw string form, without interpolation.
    ///
    /// # Errors
    ///
    /// Same as [`KeyResolver::terminal`].
    pub fn resolve(root: &DocumentNode, path: &KeyPath) -> Result<Option<String>> {
        Ok(Self::terminal(root, path)?.map(Terminal::into_raw))
    }
}
