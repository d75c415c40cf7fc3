//! Small composable entries used to build resolution pipelines.
//!
//! - [`Fork`]: evaluate one of two entries depending on a condition
//! - [`Contains`]: probe whether an entry yields a value
//! - [`Split`]: tokenize a string on a literal delimiter
//! - [`Unwrap`]: extract the text between a prefix and a suffix
//!
//! # Examples
//!
//! ```
//! use entrys::operation::{Contains, Fork, Split};
//! use entrys::{Constant, Entry, EntryError, Result};
//!
//! let hosts = Split::new(Constant::new("a;b;c".to_string()), ";");
//! let count = Fork::new(
//!     Contains::new(|| -> Result<String> { Err(EntryError::missing("absent")) }),
//!     Constant::new(0),
//!     || hosts.value().map(|tokens| tokens.len()),
//! );
//! assert_eq!(count.value().unwrap(), 3);
//! ```

pub mod contains;
pub mod fork;
pub mod split;
pub mod unwrap;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use contains::Contains;
pub use fork::Fork;
pub use split::{Split, DEFAULT_DELIMITER};
pub use unwrap::Unwrap;
