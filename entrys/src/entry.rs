//! The entry abstraction and its null-safety boundary.
//!
//! An [`Entry`] is a deferred computation: nothing happens until
//! [`Entry::value`] is called, and every call recomputes the value from
//! scratch. Entries compose by ownership, each wrapper owning the entries it
//! is built from.
//!
//! Any `Fn() -> Result<T>` closure is an entry, which keeps small pipeline
//! steps inline:
//!
//! ```
//! use entrys::{Entry, Result};
//!
//! let port = || -> Result<String> { Ok("8080".to_string()) };
//! assert_eq!(port.value().unwrap(), "8080");
//! ```

use crate::error::{EntryError, Result};

/// Message used by [`SafeEntry`] when the caller supplies none.
pub const DEFAULT_MESSAGE: &str = "Empty entry";

/// A deferred computation producing a `T` or failing with an [`EntryError`].
pub trait Entry<T> {
    /// Compute the value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be produced.
    fn value(&self) -> Result<T>;
}

impl<T, F> Entry<T> for F
where
    F: Fn() -> Result<T>,
{
    fn value(&self) -> Result<T> {
        self()
    }
}

/// An entry that always yields a clone of the same value.
///
/// # Examples
///
/// ```
/// use entrys::{Constant, Entry};
///
/// let content = Constant::new("port: 8080".to_string());
/// assert_eq!(content.value().unwrap(), "port: 8080");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant<T>(T);

impl<T> Constant<T> {
    /// Create a constant entry.
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow the held value.
    pub const fn get(&self) -> &T {
        &self.0
    }
}

impl<T: Clone> Entry<T> for Constant<T> {
    fn value(&self) -> Result<T> {
        Ok(self.0.clone())
    }
}

/// Wraps an entry whose value may be absent and guarantees a present value.
///
/// An absent value becomes [`EntryError::Missing`] carrying the configured
/// message. Any other failure of the inner entry is re-labelled with the same
/// message, keeping the original error as its cause.
///
/// # Examples
///
/// ```
/// use entrys::{Entry, Result, SafeEntry};
///
/// let absent = SafeEntry::new(|| -> Result<Option<String>> { Ok(None) });
/// let err = absent.value().unwrap_err();
/// assert_eq!(err.to_string(), "Empty entry");
/// assert!(err.is_missing());
///
/// let present = SafeEntry::with_message(
///     || -> Result<Option<u16>> { Ok(Some(8080)) },
///     "port is not set",
/// );
/// assert_eq!(present.value().unwrap(), 8080);
/// ```
#[derive(Debug, Clone)]
pub struct SafeEntry<E> {
    origin: E,
    message: String,
}

impl<E> SafeEntry<E> {
    /// Wrap an entry, failing with [`DEFAULT_MESSAGE`] when it yields nothing.
    pub fn new(origin: E) -> Self {
        Self::with_message(origin, DEFAULT_MESSAGE)
    }

    /// Wrap an entry with a custom failure message.
    pub fn with_message(origin: E, message: impl Into<String>) -> Self {
        Self {
            origin,
            message: message.into(),
        }
    }

    /// The message reported on failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<T, E> Entry<T> for SafeEntry<E>
where
    E: Entry<Option<T>>,
{
    fn value(&self) -> Result<T> {
        match self.origin.value() {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Err(EntryError::missing(self.message.clone())),
            Err(err) => Err(err.context(self.message.clone())),
        }
    }
}
