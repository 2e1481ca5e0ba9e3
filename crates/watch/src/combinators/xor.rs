//! XOR combinator - parity of validators
//!
//! `Xor` holds iff an **odd number** of its children hold. For two children
//! that is the usual exclusive or; for more it is a left-to-right fold with
//! boolean XOR, *not* "exactly one holds": three passing children make an
//! `Xor` pass.

use std::fmt;

use crate::foundation::{ConfigurationError, IntoValidator, Validate, Validator, Value};

/// Combines validators by parity.
///
/// Every child is evaluated, in order, on every test.
///
/// # Examples
///
/// ```rust
/// use nebula_watch::prelude::*;
///
/// let validator = Xor::new([always_true(), always_true(), always_true()]).unwrap();
/// assert!(validator.test(&Value::Null));
///
/// let validator = always_true() ^ always_true();
/// assert!(!validator.test(&Value::Null));
/// ```
#[derive(Debug, Clone)]
pub struct Xor {
    pub(crate) children: Vec<Validator>,
}

impl Xor {
    /// Creates an `Xor` over one or more children.
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
            return Err(ConfigurationError::EmptyCombinator { combinator: "xor" });
        }
        Ok(Self { children })
    }

    /// Creates `Xor` from already-erased children without the emptiness
    /// check. Used by the n-ary macros, which always pass at least one child.
    #[doc(hidden)]
    pub fn from_validators(children: Vec<Validator>) -> Self {
        debug_assert!(!children.is_empty());
        Self { children }
    }

    /// Creates a binary `Xor`.
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

impl Validate for Xor {
    fn test(&self, value: &Value) -> bool {
        self.children
            .iter()
            .fold(false, |acc, child| acc ^ child.test(value))
    }

    fn code(&self) -> &'static str {
        "xor"
    }
}

impl fmt::Display for Xor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_infix(f, &self.children, " ^ ")
    }
}

/// Creates an `Xor` from any number of children.
///
/// # Errors
///
/// Fails when `children` is empty.
pub fn xor_of<I>(children: I) -> Result<Xor, ConfigurationError>
where
    I: IntoIterator,
    I::Item: IntoValidator,
{
    Xor::new(children)
}

/// "Choose one side" reads better than `Xor` at some call sites.
pub type Choose = Xor;
