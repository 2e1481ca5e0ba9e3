//! Validated function calls
//!
//! An [`Interface`] maps parameter names, plus the special key `"return"`,
//! to validators. [`InterfacedFunction::bind`] attaches one to a function
//! with a declared [`Signature`]; every call then checks the supplied
//! arguments and the result.
//!
//! - [`Interface`] - name → validator
//! - [`InterfacedFunction`] / [`implements`] - binding and calling
//! - [`CallableWithInterface`] - validates that a value is a function bound
//!   to a given interface

pub mod error;
pub mod function;
pub mod signature;
pub mod validator;

use indexmap::IndexMap;

use crate::foundation::{IntoValidator, Validator, Value};

pub use error::{
    ArgumentValidationError, CallError, InterfaceMismatchError, ResultValidationError,
};
pub use function::{Implements, InterfacedFunction, implements};
pub use signature::{Arguments, Parameter, Signature};
pub use validator::CallableWithInterface;

/// Interface key of the result validator.
pub const RETURN_KEY: &str = "return";

/// Parameter names (and `"return"`) mapped to validators.
///
/// ```rust
/// use nebula_watch::prelude::*;
///
/// let interface = Interface::new()
///     .arg("a", instance_of(Kind::Int))
///     .returns(instance_of(Kind::Str));
///
/// assert_eq!(interface.parameter_names().collect::<Vec<_>>(), ["a"]);
/// assert!(interface.accepts("a", &Value::from(1)));
/// assert!(interface.accepts("unlisted", &Value::Null));
/// assert!(!interface.accepts("return", &Value::from(1)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Interface {
    entries: IndexMap<String, Validator>,
}

impl Interface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the validator of a parameter.
    #[must_use]
    pub fn arg(mut self, name: impl Into<String>, validator: impl IntoValidator) -> Self {
        self.entries.insert(name.into(), validator.into_validator());
        self
    }

    /// Sets the result validator.
    #[must_use]
    pub fn returns(self, validator: impl IntoValidator) -> Self {
        self.arg(RETURN_KEY, validator)
    }

    pub fn get(&self, name: &str) -> Option<&Validator> {
        self.entries.get(name)
    }

    /// Tests `value` against the entry for `name`; names without an entry
    /// accept everything.
    pub fn accepts(&self, name: &str, value: &Value) -> bool {
        self.entries.get(name).is_none_or(|validator| validator.test(value))
    }

    /// Every key except `"return"`, in insertion order.
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .keys()
            .map(String::as_str)
            .filter(|name| *name != RETURN_KEY)
    }

    /// Same keys, and each key bound to a structurally equal validator.
    pub fn matches(&self, other: &Interface) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().all(|(name, validator)| {
                other
                    .entries
                    .get(name)
                    .is_some_and(|theirs| format!("{validator:?}") == format!("{theirs:?}"))
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Interface
where
    K: Into<String>,
    V: IntoValidator,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |interface, (k, v)| interface.arg(k, v))
    }
}
