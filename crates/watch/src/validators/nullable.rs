//! Nullable validator
//!
//! This module provides [`Nullable`], which lets the absence sentinel
//! [`Value::Null`] through in addition to whatever its inner validator
//! accepts.
//!
//! # Examples
//!
//! ```rust
//! use nebula_watch::prelude::*;
//!
//! let maybe_int = instance_of(Kind::Int).nullable();
//! assert!(maybe_int.test(&Value::Null));
//! assert!(maybe_int.test(&Value::from(3)));
//! assert!(!maybe_int.test(&Value::from("3")));
//! ```

use std::fmt;

use crate::foundation::{IntoValidator, Validate, Validator, Value};

/// Accepts `Null` or anything the inner validator accepts.
#[derive(Debug, Clone)]
pub struct Nullable {
    inner: Validator,
}

impl Nullable {
    pub fn new(inner: impl IntoValidator) -> Self {
        Self {
            inner: inner.into_validator(),
        }
    }

    pub fn inner(&self) -> &Validator {
        &self.inner
    }
}

impl Validate for Nullable {
    fn test(&self, value: &Value) -> bool {
        value.is_null() || self.inner.test(value)
    }

    fn code(&self) -> &'static str {
        "nullable"
    }
}

impl fmt::Display for Nullable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nullable({})", self.inner)
    }
}

crate::impl_operators!(Nullable);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{Predicate, always_false};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn test_null_bypasses_inner() {
        let called = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&called);
        let validator = Nullable::new(Predicate::new("spy", move |_| {
            flag.store(true, Ordering::SeqCst);
            false
        }));

        assert!(validator.test(&Value::Null));
        assert!(!called.load(Ordering::SeqCst));
        assert!(!validator.test(&Value::from(0)));
        assert!(called.load(Ordering::SeqCst));
    }

    #[test]
    fn test_nullable_nothing_is_null_only() {
        let validator = Nullable::new(always_false());
        assert!(validator.test(&Value::Null));
        assert!(!validator.test(&Value::from(false)));
        assert_eq!(validator.to_string(), "nullable(nothing)");
    }
}
