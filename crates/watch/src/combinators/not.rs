//! NOT combinator - logical negation of validators
//!
//! This module provides the [`Not`] combinator which inverts the result
//! of a validator - it holds when the inner validator does not, and vice versa.
//!
//! # Examples
//!
//! ```rust
//! use nebula_watch::prelude::*;
//!
//! let not_ten = negate(equals_to(10));
//! assert!(!not_ten.test(&Value::from(10)));
//! assert!(not_ten.test(&Value::from("hello")));
//! ```

use std::fmt;

use crate::foundation::{IntoValidator, Validate, Validator, Value};

/// Inverts a validator with logical NOT.
#[derive(Debug, Clone)]
pub struct Not {
    /// The inner validator to invert.
    pub(crate) inner: Validator,
}

impl Not {
    /// Creates a new `Not` combinator.
    pub fn new(inner: impl IntoValidator) -> Self {
        Self {
            inner: inner.into_validator(),
        }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &Validator {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> Validator {
        self.inner
    }
}

impl Validate for Not {
    fn test(&self, value: &Value) -> bool {
        !self.inner.test(value)
    }

    fn code(&self) -> &'static str {
        "not"
    }
}

impl fmt::Display for Not {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "!{}", self.inner)
    }
}

/// Creates a `Not` combinator from a validator.
pub fn negate(validator: impl IntoValidator) -> Not {
    Not::new(validator)
}
