//! Member presence validator

use std::fmt;

use crate::foundation::{ConfigurationError, Validate, Value};

/// Holds when the value exposes the named member.
///
/// Built-in members are `eq`, `hash`, `len`, `iter`, `cmp`, `add` and `call`;
/// objects also expose their attributes. See [`Value::has_member`].
///
/// ```rust
/// use nebula_watch::prelude::*;
///
/// let sized = HasAttr::new("len").unwrap();
/// assert!(sized.test(&Value::from("abc")));
/// assert!(!sized.test(&Value::from(3)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HasAttr {
    name: String,
}

impl HasAttr {
    /// # Errors
    ///
    /// [`ConfigurationError::EmptyAttributeName`] if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigurationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigurationError::EmptyAttributeName);
        }
        Ok(Self { name })
    }

    /// For member names known to be non-empty.
    pub(crate) fn builtin(name: &'static str) -> Self {
        debug_assert!(!name.is_empty());
        Self { name: name.to_owned() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Validate for HasAttr {
    fn test(&self, value: &Value) -> bool {
        value.has_member(&self.name)
    }

    fn code(&self) -> &'static str {
        "has_attr"
    }
}

impl fmt::Display for HasAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "has_attr({:?})", self.name)
    }
}

crate::impl_operators!(HasAttr);
