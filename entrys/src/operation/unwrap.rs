//! Bracketed substring extraction.

use crate::entry::Entry;
use crate::error::{EntryError, Result};

/// Extracts the text between the first `prefix` and the first `suffix` after it.
///
/// # Examples
///
/// ```
/// use entrys::operation::Unwrap;
/// use entrys::Entry;
///
/// assert_eq!(Unwrap::braces("{abc}").value().unwrap(), "abc");
/// assert_eq!(
///     Unwrap::new("${HOST:localhost}", "${", "}").value().unwrap(),
///     "HOST:localhost"
/// );
/// assert!(Unwrap::braces("abc}").value().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unwrap {
    value: String,
    prefix: String,
    suffix: String,
}

impl Unwrap {
    /// Unwrap `value` between `prefix` and `suffix`.
    pub fn new(
        value: impl Into<String>,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Unwrap `value` between `{` and `}`.
    pub fn braces(value: impl Into<String>) -> Self {
        Self::new(value, "{", "}")
    }

    fn failure(&self) -> EntryError {
        EntryError::malformed(format!(
            "failed to unwrap value: '{}' with prefix: '{}' and suffix: '{}'",
            self.value, self.prefix, self.suffix
        ))
    }
}

impl Entry<String> for Unwrap {
    fn value(&self) -> Result<String> {
        let start = self
            .value
            .find(self.prefix.as_str())
            .map(|index| index + self.prefix.len())
            .ok_or_else(|| self.failure())?;
        let end = self.value[start..]
            .find(self.suffix.as_str())
            .map(|offset| start + offset)
            .ok_or_else(|| self.failure())?;
        Ok(self.value[start..end].to_string())
    }
}
