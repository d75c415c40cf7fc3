//! Process environment access.
//!
//! The engine never reads `std::env` directly; it goes through the
//! [`Environment`] trait so lookups can be pointed at a fixed map in tests
//! or in embedding applications.

use std::collections::HashMap;
use std::env;

use crate::entry::{Constant, Entry, SafeEntry};
use crate::error::Result;

/// Read-only source of environment variables.
#[cfg_attr(test, mockall::automock)]
pub trait Environment {
    /// Value of the variable `name`, or `None` when it is unset.
    fn get(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn get(&self, name: &str) -> Option<String> {
        // Names that are empty or contain '=' or NUL can never be set.
        if name.is_empty() || name.contains(['=', '\0']) {
            return None;
        }
        env::var(name).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

impl<V: Environment + ?Sized> Environment for &V {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

/// Reads a named environment variable, yielding `None` when it is unset.
///
/// The name is itself an entry so it can be computed by an earlier step of a
/// pipeline. Wrap the lookup in a [`SafeEntry`] (see [`EnvLookup::required`])
/// to turn an unset variable into a failure.
///
/// # Examples
///
/// ```
/// use entrys::system::EnvLookup;
/// use entrys::Entry;
/// use std::collections::HashMap;
///
/// let env = HashMap::from([("my_env".to_string(), "123".to_string())]);
/// let lookup = EnvLookup::named("my_env").with_environment(env);
/// assert_eq!(lookup.value().unwrap(), Some("123".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct EnvLookup<N, V = ProcessEnvironment> {
    name: N,
    environment: V,
}

impl<N> EnvLookup<N> {
    /// Look up the variable named by `name` in the process environment.
    pub const fn new(name: N) -> Self {
        Self {
            name,
            environment: ProcessEnvironment,
        }
    }
}

impl EnvLookup<Constant<String>> {
    /// Look up a variable with a fixed name in the process environment.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(Constant::new(name.into()))
    }
}

impl<N, V> EnvLookup<N, V> {
    /// Read from `environment` instead of the process environment.
    pub fn with_environment<W: Environment>(self, environment: W) -> EnvLookup<N, W> {
        EnvLookup {
            name: self.name,
            environment,
        }
    }
}

impl<V: Environment> EnvLookup<Constant<String>, V> {
    /// Wrap the lookup so an unset variable fails with a message naming it.
    pub fn required(self) -> SafeEntry<Self> {
        let message = format!("environment variable '{}' is not set", self.name.get());
        SafeEntry::with_message(self, message)
    }
}

impl<N, V> Entry<Option<String>> for EnvLookup<N, V>
where
    N: Entry<String>,
    V: Environment,
{
    fn value(&self) -> Result<Option<String>> {
        let name = self.name.value()?;
        let value = self.environment.get(&name);
        if value.is_none() {
            log::trace!("environment variable '{name}' is not set");
        }
        Ok(value)
    }
}
