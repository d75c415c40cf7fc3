#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # entrys
//!
//! Composable, fail-fast resolution of configuration values.
//!
//! A value is looked up by a dotted key (`database.host`) in a YAML or JSON
//! document. Scalars of the form `${NAME}` or `${NAME:DEFAULT}` are replaced
//! from the environment, sequences resolve to their items joined with `;`,
//! and a base document may redirect lookups to a profile document by
//! declaring `entrys.profile`.
//!
//! ## Core Types
//!
//! - [`Entry`] and [`SafeEntry`]: deferred computations and the null-safety boundary
//! - [`operation`]: the `Fork`, `Split`, `Unwrap` and `Contains` combinators
//! - [`Val`]: one key resolved from one document
//! - [`ProfileResolver`]: one key resolved from the active profile's document
//! - [`EntryError`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: stderr backend for the `log` facade
//!
//! ## Examples
//!
//! ```
//! use entrys::{Entry, Val};
//! use std::collections::HashMap;
//!
//! let yaml = "db:\n  host: ${DB_HOST:localhost}\n  ports: [5432, 5433]\n";
//! let env = HashMap::<String, String>::new();
//!
//! let host = Val::from_text("db.host", yaml).with_environment(env.clone());
//! assert_eq!(host.value().unwrap(), "localhost");
//!
//! let ports = Val::from_text("db.ports", yaml).with_environment(env);
//! assert_eq!(ports.value().unwrap(), "5432;5433");
//! ```

pub mod config;
pub mod convert;
pub mod document;
pub mod entry;
pub mod error;
pub mod file;
pub mod interpolate;
pub mod json;
pub mod key;
pub mod logging;
pub mod operation;
pub mod profile;
pub mod system;
pub mod value;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at crate root for convenience
pub use config::{Settings, SettingsBuilder};
pub use document::{DocumentLoader, DocumentNode, Format};
pub use entry::{Constant, Entry, SafeEntry};
pub use error::{EntryError, Result};
pub use file::FileContent;
pub use interpolate::Interpolator;
pub use key::{KeyPath, KeyResolver};
pub use logging::{init_logger, LogLevel, Logger};
pub use profile::ProfileResolver;
pub use system::{EnvLookup, Environment, ProcessEnvironment};
pub use value::Val;
