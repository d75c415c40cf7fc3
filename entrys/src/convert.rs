//! Parsing resolved strings into typed values.

use std::any::type_name;
use std::error::Error as StdError;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::entry::Entry;
use crate::error::{EntryError, Result};

/// An entry's string value parsed with [`FromStr`].
///
/// # Examples
///
/// ```
/// use entrys::convert::{int, Parsed};
/// use entrys::{Entry, Val};
///
/// let port = int(Val::from_text("port", "port: 8080"));
/// assert_eq!(port.value().unwrap(), 8080);
///
/// let debug = Parsed::<_, bool>::new(Val::from_text("debug", "debug: true"));
/// assert!(debug.value().unwrap());
/// ```
pub struct Parsed<E, T> {
    origin: E,
    target: PhantomData<fn() -> T>,
}

impl<E, T> Parsed<E, T> {
    /// Parse the value of `origin`.
    pub const fn new(origin: E) -> Self {
        Self {
            origin,
            target: PhantomData,
        }
    }
}

impl<E: fmt::Debug, T> fmt::Debug for Parsed<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parsed")
            .field("origin", &self.origin)
            .field("target", &type_name::<T>())
            .finish()
    }
}

impl<E, T> Entry<T> for Parsed<E, T>
where
    E: Entry<String>,
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    fn value(&self) -> Result<T> {
        let text = self.origin.value()?;
        text.trim().parse().map_err(|err| EntryError::Malformed {
            message: format!("wrong entry type for {} entry", type_name::<T>()),
            source: Some(Box::new(err)),
        })
    }
}

/// Parse the value of `origin` as an `i32`.
pub const fn int<E>(origin: E) -> Parsed<E, i32> {
    Parsed::new(origin)
}
