//! Container-of validator
//!
//! [`Container`] checks that a value is an iterable of the configured kind
//! and that every item satisfies the item validator.
//!
//! Validation iterates the value exactly once. A [`Value::Stream`] is
//! single-pass, so testing one consumes it up to and including the first
//! failing item; callers must not expect to read those items afterwards.
//!
//! Iterating a map yields its keys, a string yields one-character strings and
//! bytes yield integers.

use std::fmt;

use crate::foundation::{ConfigurationError, IntoValidator, Kind, Validate, Validator, Value};

use super::AlwaysTrue;

/// Every item of the iterable satisfies `items`.
///
/// # Examples
///
/// ```rust
/// use nebula_watch::prelude::*;
///
/// let ints = container(instance_of(Kind::Int));
/// assert!(ints.test(&Value::list([1, 2, 3])));
/// assert!(!ints.test(&Value::list([Value::from(1), Value::from("2")])));
/// assert!(!ints.test(&Value::from(1)));
///
/// let int_list = container(instance_of(Kind::Int)).with_kind(Kind::List).unwrap();
/// assert!(!int_list.test(&Value::tuple([1, 2])));
/// ```
#[derive(Debug, Clone)]
pub struct Container {
    items: Validator,
    kind: Kind,
}

impl Container {
    /// Creates a container validator over any iterable.
    pub fn new(items: impl IntoValidator) -> Self {
        Self {
            items: items.into_validator(),
            kind: Kind::Iterable,
        }
    }

    /// Restricts the accepted container kind.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::NotIterableKind`] if values of `kind` cannot be
    /// iterated.
    pub fn with_kind(mut self, kind: Kind) -> Result<Self, ConfigurationError> {
        if !kind.is_subkind_of(&Kind::Iterable) {
            return Err(ConfigurationError::NotIterableKind { kind });
        }
        self.kind = kind;
        Ok(self)
    }

    pub fn items(&self) -> &Validator {
        &self.items
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new(AlwaysTrue)
    }
}

impl Validate for Container {
    fn test(&self, value: &Value) -> bool {
        value.kind().is_subkind_of(&self.kind) && value.all_items(|item| self.items.test(item)) == Some(true)
    }

    fn code(&self) -> &'static str {
        "container"
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == Kind::Iterable {
            write!(f, "container({})", self.items)
        } else {
            write!(f, "container({}, kind={})", self.items, self.kind)
        }
    }
}

crate::impl_operators!(Container);

/// Creates a [`Container`] over any iterable.
pub fn container(items: impl IntoValidator) -> Container {
    Container::new(items)
}
