//! Environment-variable placeholders inside scalar values.
//!
//! A scalar whose whole text is `${NAME}` or `${NAME:DEFAULT}` is replaced by
//! the value of the environment variable `NAME`. Only the first `:` separates
//! the name from the default, so defaults may contain `:` themselves:
//!
//! | Scalar                       | Environment     | Result               |
//! |------------------------------|-----------------|----------------------|
//! | `${X}`                       | `X=123`         | `123`                |
//! | `${X}`                       | unset           | failure              |
//! | `${X:456}`                   | unset           | `456`                |
//! | `${X:456}`                   | `X=789`         | `789`                |
//! | `${X:https://h:80}`          | unset           | `https://h:80`       |
//! | `plain text`                 | any             | `plain text`         |

use crate::entry::{Constant, Entry, SafeEntry};
use crate::error::Result;
use crate::operation::{Contains, Fork, Split, Unwrap};
use crate::system::{EnvLookup, Environment, ProcessEnvironment};

/// Opening marker of a placeholder.
pub const PLACEHOLDER_PREFIX: &str = "${";

/// Closing marker of a placeholder.
pub const PLACEHOLDER_SUFFIX: &str = "}";

/// Separator between a placeholder's variable name and its default.
pub const DEFAULT_SEPARATOR: &str = ":";

/// Check if `text` has placeholder form: starts with `${` and ends with `}`.
///
/// # Examples
///
/// ```
/// use entrys::interpolate::is_placeholder;
///
/// assert!(is_placeholder("${HOME}"));
/// assert!(!is_placeholder("prefix ${HOME}"));
/// ```
#[must_use]
pub fn is_placeholder(text: &str) -> bool {
    text.starts_with(PLACEHOLDER_PREFIX) && text.ends_with(PLACEHOLDER_SUFFIX)
}

/// Resolves placeholders against an [`Environment`].
///
/// # Examples
///
/// ```
/// use entrys::interpolate::Interpolator;
/// use std::collections::HashMap;
///
/// let env = HashMap::from([("PORT".to_string(), "9090".to_string())]);
/// let interpolator = Interpolator::with_environment(env);
///
/// assert_eq!(interpolator.resolve("${PORT:8080}").unwrap(), "9090");
/// assert_eq!(interpolator.resolve("${HOST:localhost}").unwrap(), "localhost");
/// assert_eq!(interpolator.resolve("localhost").unwrap(), "localhost");
/// assert!(interpolator.resolve("${HOST}").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Interpolator<V = ProcessEnvironment> {
    environment: V,
}

impl Interpolator {
    /// Resolve against the process environment.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            environment: ProcessEnvironment,
        }
    }
}

impl<V: Environment> Interpolator<V> {
    /// Resolve against `environment`.
    pub const fn with_environment(environment: V) -> Self {
        Self { environment }
    }

    /// The environment placeholders are resolved against.
    pub const fn environment(&self) -> &V {
        &self.environment
    }

    /// Resolve `text`: placeholders are substituted, anything else is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the placeholder has no default and its variable is
    /// unset, or if the placeholder markers cannot be unwrapped.
    pub fn resolve(&self, text: &str) -> Result<String> {
        Fork::new(
            Constant::new(is_placeholder(text)),
            || {
                self.placeholder(text)
                    .map_err(|err| err.context(format!("failed to resolve placeholder '{text}'")))
            },
            Constant::new(text.to_string()),
        )
        .value()
    }

    fn placeholder(&self, text: &str) -> Result<String> {
        let tokens = Split::new(
            Unwrap::new(text, PLACEHOLDER_PREFIX, PLACEHOLDER_SUFFIX),
            DEFAULT_SEPARATOR,
        )
        .value()?;
        let name = tokens[0].trim();
        Fork::new(
            Constant::new(tokens.len() >= 2),
            Fork::new(
                Contains::new(self.variable(name)),
                || self.variable(name).value().map(|value| value.trim().to_string()),
                || -> Result<String> {
                    log::debug!("environment variable '{name}' is not set, using default");
                    Ok(tokens[1..].join(DEFAULT_SEPARATOR))
                },
            ),
            self.variable(&tokens[0]),
        )
        .value()
    }

    fn variable(&self, name: &str) -> SafeEntry<EnvLookup<Constant<String>, &V>> {
        EnvLookup::named(name)
            .with_environment(&self.environment)
            .required()
    }
}
