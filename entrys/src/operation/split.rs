//! Delimiter tokenization.

use crate::entry::Entry;
use crate::error::{EntryError, Result};

/// Delimiter used when none is given: the sequence join character.
pub const DEFAULT_DELIMITER: &str = ";";

/// Splits the wrapped string on a literal delimiter.
///
/// The delimiter is matched as plain text, never as a pattern, and every
/// token is kept in order, empty ones included. An empty string yields a
/// single empty token.
///
/// # Examples
///
/// ```
/// use entrys::operation::Split;
/// use entrys::{Constant, Entry};
///
/// let split = Split::new(Constant::new("https://host:8080".to_string()), ":");
/// assert_eq!(split.value().unwrap(), vec!["https", "//host", "8080"]);
///
/// let hosts = Split::semicolon(Constant::new("a;b".to_string()));
/// assert_eq!(hosts.value().unwrap(), vec!["a", "b"]);
/// ```
#[derive(Debug, Clone)]
pub struct Split<E> {
    origin: E,
    delimiter: String,
}

impl<E> Split<E> {
    /// Split `origin` on `delimiter`.
    pub fn new(origin: E, delimiter: impl Into<String>) -> Self {
        Self {
            origin,
            delimiter: delimiter.into(),
        }
    }

    /// Split `origin` on [`DEFAULT_DELIMITER`].
    pub fn semicolon(origin: E) -> Self {
        Self::new(origin, DEFAULT_DELIMITER)
    }
}

impl<E> Entry<Vec<String>> for Split<E>
where
    E: Entry<String>,
{
    fn value(&self) -> Result<Vec<String>> {
        let value = self.origin.value()?;
        if self.delimiter.is_empty() {
            return Err(EntryError::malformed(format!(
                "wrong pattern delimiter: '{}' for entry value: '{value}'",
                self.delimiter
            )));
        }
        Ok(value.split(self.delimiter.as_str()).map(str::to_string).collect())
    }
}
