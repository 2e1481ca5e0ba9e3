//! OR combinator - logical disjunction of validators

use std::fmt;

use crate::foundation::{ConfigurationError, IntoValidator, Validate, Validator, Value};

/// Combines validators with logical OR.
///
/// Children are evaluated left to right and evaluation stops at the first
/// child that holds.
///
/// # Examples
///
/// ```rust
/// use nebula_watch::prelude::*;
///
/// let validator = instance_of(Kind::Str).or(instance_of(Kind::Int));
/// assert!(validator.test(&Value::from("hello")));
/// assert!(validator.test(&Value::from(1)));
/// assert!(!validator.test(&Value::from(1.0)));
/// ```
#[derive(Debug, Clone)]
pub struct Or {
    pub(crate) children: Vec<Validator>,
}

impl Or {
    /// Creates an `Or` over one or more children.
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
            return Err(ConfigurationError::EmptyCombinator { combinator: "or" });
        }
        Ok(Self { children })
    }

    /// Creates `Or` from already-erased children without the emptiness
    /// check. Used by the n-ary macros, which always pass at least one child.
    #[doc(hidden)]
    pub fn from_validators(children: Vec<Validator>) -> Self {
        debug_assert!(!children.is_empty());
        Self { children }
    }

    /// Creates a binary `Or`.
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

impl Validate for Or {
    fn test(&self, value: &Value) -> bool {
        self.children.iter().any(|child| child.test(value))
    }

    fn code(&self) -> &'static str {
        "or"
    }
}

impl fmt::Display for Or {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_infix(f, &self.children, " | ")
    }
}

/// Creates an `Or` from any number of children.
///
/// # Errors
///
/// Fails when `children` is empty.
pub fn or_of<I>(children: I) -> Result<Or, ConfigurationError>
where
    I: IntoIterator,
    I::Item: IntoValidator,
{
    Or::new(children)
}

/// Alias matching the vocabulary of "any of these may hold".
pub type AnyOf = Or;
