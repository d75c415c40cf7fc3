//! Error types for the entrys library.
//!
//! Every entry either produces a value or fails with an [`EntryError`].
//! Causes are chained through [`std::error::Error::source`], so a failure
//! reported at the top of a composed pipeline still carries the original
//! reason it happened.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for computations that may fail with an entry error.
///
/// # Examples
///
/// ```
/// use entrys::{EntryError, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("8080".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, EntryError>;

/// The single error type for every entry computation.
#[derive(Debug, Error)]
pub enum EntryError {
    /// A value is absent: null node, unset environment variable, absent key.
    #[error("{message}")]
    Missing {
        /// Description of what was missing.
        message: String,
    },

    /// A node was found but has the wrong shape.
    #[error("attribute '{key}' is {found}, expected {expected}")]
    TypeMismatch {
        /// The key (or key segment) being resolved.
        key: String,
        /// The node kind that was required.
        expected: &'static str,
        /// The node kind that was found.
        found: &'static str,
    },

    /// Input could not be interpreted: bad placeholder markers, bad number, etc.
    #[error("{message}")]
    Malformed {
        /// Description of the malformed input, including the offending text.
        message: String,
        /// The underlying error, when there is one.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A dotted key path is not usable.
    #[error("invalid key '{key}': {reason}")]
    InvalidKey {
        /// The rejected key.
        key: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A profile is declared but its name is blank.
    #[error("attribute for key '{key}' is empty")]
    BlankProfile {
        /// The key holding the profile declaration.
        key: String,
    },

    /// A failure re-labelled by an outer entry.
    #[error("{message}")]
    Context {
        /// The outer entry's message.
        message: String,
        /// The failure being wrapped.
        #[source]
        source: Box<EntryError>,
    },

    /// A document could not be read from disk.
    #[error("failed to load contents of file for path: '{}'", path.display())]
    Io {
        /// The path that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A YAML document failed to parse.
    #[error("malformed YAML document: {0}")]
    Yaml(#[from] yaml_rust2::scanner::ScanError),

    /// A JSON document failed to parse.
    #[error("malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),
}

impl EntryError {
    /// Create a [`EntryError::Missing`] error.
    pub fn missing(message: impl Into<String>) -> Self {
        Self::Missing {
            message: message.into(),
        }
    }

    /// Create a [`EntryError::Malformed`] error without an underlying cause.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap this error under a new message, keeping it as the cause.
    #[must_use]
    pub fn context(self, message: impl Into<String>) -> Self {
        Self::Context {
            message: message.into(),
            source: Box::new(self),
        }
    }

    /// The innermost entry error in the context chain.
    #[must_use]
    pub fn root(&self) -> &Self {
        let mut current = self;
        while let Self::Context { source, .. } = current {
            current = source;
        }
        current
    }

    /// Check if the failure comes from an absent value.
    ///
    /// # Examples
    ///
    /// ```
    /// use entrys::EntryError;
    ///
    /// let err = EntryError::missing("Empty entry").context("attribute for key 'age' is null");
    /// assert!(err.is_missing());
    /// ```
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self.root(), Self::Missing { .. })
    }

    /// Check if the failure comes from a declared but blank profile.
    #[must_use]
    pub fn is_blank_profile(&self) -> bool {
        matches!(self.root(), Self::BlankProfile { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_missing_error() {
        let err = EntryError::missing("Empty entry");
        assert_eq!(format!("{err}"), "Empty entry");
        assert!(err.is_missing());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_type_mismatch_error() {
        let err = EntryError::TypeMismatch {
            key: "database".to_string(),
            expected: "mapping",
            found: "scalar",
        };
        let display = format!("{err}");
        assert!(display.contains("'database'"));
        assert!(display.contains("expected mapping"));
        assert!(!err.is_missing());
    }

    #[test]
    fn test_context_keeps_cause() {
        let err = EntryError::missing("environment variable 'HOME2' is not set")
            .context("Empty entry");
        assert_eq!(format!("{err}"), "Empty entry");
        let cause = err.source().unwrap();
        assert!(cause.to_string().contains("HOME2"));
        assert!(err.is_missing());
    }

    #[test]
    fn test_blank_profile_error() {
        let err = EntryError::BlankProfile {
            key: "entrys.profile".to_string(),
        }
        .context("attribute for key 'port' is null");
        assert!(err.is_blank_profile());
        assert!(!err.is_missing());
        assert!(err.root().to_string().contains("entrys.profile"));
    }

    #[test]
    fn test_io_error_display() {
        let err = EntryError::Io {
            path: PathBuf::from("/nonexistent/application.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        let display = format!("{err}");
        assert!(display.contains("failed to load contents"));
        assert!(display.contains("application.yaml"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_yaml_error_conversion() {
        use crate::document::{DocumentLoader, YamlLoader};

        let err = YamlLoader.parse("a: [1, 2").unwrap_err();
        assert!(matches!(err, EntryError::Yaml(_)));
        assert!(format!("{err}").contains("malformed YAML"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Err(EntryError::malformed("bad"))
        }

        assert!(returns_result().is_err());
    }
}
