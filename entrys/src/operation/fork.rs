//! Conditional selection between two entries.

use crate::entry::Entry;
use crate::error::Result;

/// Yields `primary` when `condition` holds, `fallback` otherwise.
///
/// Only the selected branch is evaluated. A failing condition propagates
/// its error and evaluates neither branch.
///
/// # Examples
///
/// ```
/// use entrys::operation::Fork;
/// use entrys::{Constant, Entry};
///
/// let fork = Fork::new(Constant::new(false), Constant::new("123"), Constant::new("321"));
/// assert_eq!(fork.value().unwrap(), "321");
/// ```
#[derive(Debug, Clone)]
pub struct Fork<C, P, F> {
    condition: C,
    primary: P,
    fallback: F,
}

impl<C, P, F> Fork<C, P, F> {
    /// Create a fork over `condition`.
    pub const fn new(condition: C, primary: P, fallback: F) -> Self {
        Self {
            condition,
            primary,
            fallback,
        }
    }
}

impl<T, C, P, F> Entry<T> for Fork<C, P, F>
where
    C: Entry<bool>,
    P: Entry<T>,
    F: Entry<T>,
{
    fn value(&self) -> Result<T> {
        if self.condition.value()? {
            self.primary.value()
        } else {
            self.fallback.value()
        }
    }
}
