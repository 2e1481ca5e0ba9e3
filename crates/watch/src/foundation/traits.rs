//! Core traits for the validation system
//!
//! [`Validate`] is the one capability every validator implements: a total
//! boolean test over any [`Value`]. [`Validator`] is the owned, type-erased
//! handle used wherever validators are stored (combinator children, field
//! bindings, interfaces).

use std::any::Any;
use std::fmt;

use crate::combinators::{And, Not, Or, Xor};
use crate::foundation::{ValidationError, Value};
use crate::validators::{Mapping, Nullable};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// `test` must be total: it returns `false` for values it cannot make sense
/// of and never panics. Problems with the validator's own configuration are
/// reported by its constructor as a
/// [`ConfigurationError`](crate::foundation::ConfigurationError).
///
/// `Display` renders the validator as an expression (`instance_of(int)`),
/// `Debug` renders the full tree.
///
/// # Examples
///
/// ```rust
/// use std::fmt;
/// use nebula_watch::foundation::{Validate, Value};
///
/// #[derive(Debug, Clone)]
/// struct Even;
///
/// impl fmt::Display for Even {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("even")
///     }
/// }
///
/// impl Validate for Even {
///     fn test(&self, value: &Value) -> bool {
///         value.as_int().is_some_and(|i| i % 2 == 0)
///     }
///
///     fn code(&self) -> &'static str {
///         "even"
///     }
/// }
///
/// assert!(Even.test(&Value::from(4)));
/// assert!(Even.validate(&Value::from(3)).is_err());
/// ```
pub trait Validate: fmt::Debug + fmt::Display + Send + Sync + DynValidate {
    /// Tests the value.
    fn test(&self, value: &Value) -> bool;

    /// Machine-readable name used as the error code.
    fn code(&self) -> &'static str;

    /// Runs [`test`](Validate::test) and describes a failure.
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        if self.test(value) {
            Ok(())
        } else {
            Err(
                ValidationError::new(self.code(), format!("{value} does not satisfy {self}"))
                    .with_param("validator", self.to_string())
                    .with_param("actual", value.to_string()),
            )
        }
    }
}

/// Object-safe helpers every `Validate + Clone` type gets for free.
pub trait DynValidate {
    /// Deep-copies the validator into a fresh handle.
    fn clone_validator(&self) -> Validator;

    fn as_any(&self) -> &dyn Any;
}

impl<T> DynValidate for T
where
    T: Validate + Clone + 'static,
{
    fn clone_validator(&self) -> Validator {
        Validator::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ============================================================================
// TYPE-ERASED HANDLE
// ============================================================================

/// An owned validator of any kind.
///
/// Cloning a `Validator` deep-copies the tree, so two clones never share
/// mutable state.
pub struct Validator {
    inner: Box<dyn Validate>,
}

impl Validator {
    /// Erases a concrete validator.
    pub fn new<V: Validate + 'static>(validator: V) -> Self {
        Self {
            inner: Box::new(validator),
        }
    }

    /// Tests the value against the wrapped validator.
    #[inline]
    pub fn test(&self, value: &Value) -> bool {
        self.inner.test(value)
    }

    /// See [`Validate::validate`].
    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        self.inner.validate(value)
    }

    /// See [`Validate::code`].
    pub fn code(&self) -> &'static str {
        self.inner.code()
    }

    /// Returns the concrete validator if it is a `V`.
    pub fn downcast_ref<V: Validate + 'static>(&self) -> Option<&V> {
        self.inner.as_any().downcast_ref::<V>()
    }
}

impl Clone for Validator {
    fn clone(&self) -> Self {
        self.inner.clone_validator()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, f)
    }
}

/// Conversion into a [`Validator`] handle.
///
/// Implemented for every validator type and for `Validator` itself, which is
/// passed through unchanged so trees never gain wrapper nodes.
pub trait IntoValidator {
    fn into_validator(self) -> Validator;
}

impl<V: Validate + 'static> IntoValidator for V {
    fn into_validator(self) -> Validator {
        Validator::new(self)
    }
}

impl IntoValidator for Validator {
    fn into_validator(self) -> Validator {
        self
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Each method builds exactly the node its explicit constructor would:
/// `a.and(b)` is `And::pair(a, b)`.
///
/// # Examples
///
/// ```rust
/// use nebula_watch::prelude::*;
///
/// let positive_int = instance_of(Kind::Int).and(greater_than(0));
/// assert!(positive_int.test(&Value::from(3)));
/// assert!(!positive_int.test(&Value::from(-3)));
/// ```
pub trait ValidateExt: IntoValidator + Sized {
    /// Both must hold. Short-circuits on the first failure.
    fn and(self, other: impl IntoValidator) -> And {
        And::pair(self, other)
    }

    /// At least one must hold. Short-circuits on the first success.
    fn or(self, other: impl IntoValidator) -> Or {
        Or::pair(self, other)
    }

    /// Exactly one of the two holds (parity of two).
    fn xor(self, other: impl IntoValidator) -> Xor {
        Xor::pair(self, other)
    }

    /// Inverts the validator.
    fn not(self) -> Not {
        Not::new(self)
    }

    /// Accepts `Null` in addition to whatever `self` accepts.
    fn nullable(self) -> Nullable {
        Nullable::new(self)
    }

    /// Uses `self` as the key validator of a mapping whose values satisfy
    /// `values`.
    fn mapping_to(self, values: impl IntoValidator) -> Mapping {
        Mapping::new(self, values)
    }

    /// Erases the concrete type.
    fn boxed(self) -> Validator {
        self.into_validator()
    }
}

impl<T: IntoValidator> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Kind;
    use crate::validators::{SubclassOf, always_true, instance_of};

    #[test]
    fn validator_handle_delegates() {
        let validator = Validator::new(instance_of(Kind::Int));
        assert!(validator.test(&Value::from(1)));
        assert_eq!(validator.code(), "instance_of");
        assert_eq!(validator.to_string(), "instance_of(int)");
    }

    #[test]
    fn into_validator_does_not_rewrap() {
        let validator = always_true().boxed();
        let debug = format!("{validator:?}");
        assert_eq!(format!("{:?}", validator.into_validator()), debug);
    }

    #[test]
    fn validate_describes_failure() {
        let error = instance_of(Kind::Int).validate(&Value::from("x")).unwrap_err();
        assert_eq!(error.code, "instance_of");
        assert_eq!(error.param("actual"), Some("\"x\""));
        assert_eq!(error.param("validator"), Some("instance_of(int)"));
    }

    #[test]
    fn clone_is_deep() {
        let original = Validator::new(SubclassOf::new(Kind::Number));
        let copy = original.clone();
        assert!(copy.test(&Value::Type(Kind::Int)));

        let original = original.downcast_ref::<SubclassOf>().unwrap();
        let copy = copy.downcast_ref::<SubclassOf>().unwrap();
        assert_eq!(original.last_checked(), None);
        assert_eq!(copy.last_checked(), Some(Kind::Int));
    }
}
