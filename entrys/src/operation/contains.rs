//! Existence probe over an entry.

use std::marker::PhantomData;

use crate::entry::Entry;
use crate::error::Result;

/// Yields `true` when the wrapped entry produces a value, `false` when it fails.
///
/// The probe never fails itself; the wrapped entry's error is inspected and
/// dropped.
///
/// # Examples
///
/// ```
/// use entrys::operation::Contains;
/// use entrys::{Constant, Entry, EntryError, Result};
///
/// assert!(Contains::new(Constant::new(1)).value().unwrap());
/// assert!(!Contains::new(|| -> Result<i32> { Err(EntryError::missing("absent")) })
///     .value()
///     .unwrap());
/// ```
pub struct Contains<E, T> {
    entry: E,
    _value: PhantomData<fn() -> T>,
}

impl<E, T> Contains<E, T> {
    /// Create a probe over `entry`.
    pub const fn new(entry: E) -> Self {
        Self {
            entry,
            _value: PhantomData,
        }
    }
}

impl<E, T> Entry<bool> for Contains<E, T>
where
    E: Entry<T>,
{
    fn value(&self) -> Result<bool> {
        let present = self.entry.value().is_ok();
        Ok(present)
    }
}
