//! AND combinator - logical conjunction of validators
//!
//! This module provides the [`And`] combinator: every child must hold.
//!
//! # Examples
//!
//! ```rust
//! use nebula_watch::prelude::*;
//!
//! let validator = And::new([instance_of(Kind::Int).boxed(), greater_than(0).boxed()]).unwrap();
//! assert!(validator.test(&Value::from(3)));
//! assert!(!validator.test(&Value::from(-3)));
//! ```

use std::fmt;

use crate::foundation::{ConfigurationError, IntoValidator, Validate, Validator, Value};

/// Combines validators with logical AND.
///
/// Children are evaluated left to right and evaluation stops at the first
/// child that does not hold.
#[derive(Debug, Clone)]
pub struct And {
    pub(crate) children: Vec<Validator>,
}

impl And {
    /// Creates an `And` over one or more children.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::EmptyCombinator`] if `children` is empty.
    pub fn new<I>(children: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator,
        I::Item: IntoValidator,
    {
        let children: Vec<Validator> = children.into_iter().map(IntoValidator::into_validator).collect();
        if children.is_empty() {
            return Err(ConfigurationError::EmptyCombinator { combinator: "and" });
        }
        Ok(Self { children })
    }

    /// Creates `And` from already-erased children without the emptiness
    /// check. Used by the n-ary macros, which always pass at least one child.
    #[doc(hidden)]
    pub fn from_validators(children: Vec<Validator>) -> Self {
        debug_assert!(!children.is_empty());
        Self { children }
    }

    /// Creates a binary `And`.
    pub fn pair(left: impl IntoValidator, right: impl IntoValidator) -> Self {
        Self {
            children: vec![left.into_validator(), right.into_validator()],
        }
    }

    /// Returns the children in evaluation order.
    pub fn children(&self) -> &[Validator] {
        &self.children
    }
}

impl Validate for And {
    fn test(&self, value: &Value) -> bool {
        self.children.iter().all(|child| child.test(value))
    }

    fn code(&self) -> &'static str {
        "and"
    }
}

impl fmt::Display for And {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_infix(f, &self.children, " & ")
    }
}

/// Creates an `And` from any number of children.
///
/// # Errors
///
/// Fails when `children` is empty.
pub fn and_of<I>(children: I) -> Result<And, ConfigurationError>
where
    I: IntoIterator,
    I::Item: IntoValidator,
{
    And::new(children)
}

/// Alias matching the vocabulary of "all of these must hold".
pub type All = And;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Kind, ValidateExt};
    use crate::validators::{Predicate, greater_than, instance_of};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_and_both_pass() {
        let validator = And::pair(instance_of(Kind::Int), greater_than(0));
        assert!(validator.test(&Value::from(3)));
    }

    #[test]
    fn test_and_left_fails() {
        let validator = And::pair(instance_of(Kind::Int), greater_than(0));
        assert!(!validator.test(&Value::from("3")));
        assert!(!validator.test(&Value::from(-3)));
    }

    #[test]
    fn test_and_chain() {
        let validator = instance_of(Kind::Int)
            .and(greater_than(0))
            .and(greater_than(5));
        assert!(validator.test(&Value::from(6)));
        assert!(!validator.test(&Value::from(3)));
    }

    #[test]
    fn test_and_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let counting = Predicate::new("counting", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });

        let validator = And::pair(instance_of(Kind::Int), counting);
        assert!(!validator.test(&Value::from("nope")));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(validator.test(&Value::from(1)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_and_empty_is_rejected() {
        let error = and_of(Vec::<Validator>::new()).unwrap_err();
        assert_eq!(error, ConfigurationError::EmptyCombinator { combinator: "and" });
    }

    #[test]
    fn test_display() {
        let validator = And::pair(instance_of(Kind::Int), greater_than(0));
        assert_eq!(validator.to_string(), "(instance_of(int) & greater_than(0))");
    }
}
