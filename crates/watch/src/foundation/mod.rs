//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Values**: [`Value`], [`Kind`], [`ClassTag`], [`Map`], [`Object`], [`Stream`]
//! - **Traits**: [`Validate`], [`ValidateExt`], [`IntoValidator`]
//! - **Handles**: [`Validator`]
//! - **Errors**: [`ValidationError`], [`ConfigurationError`]
//!
//! # Architecture
//!
//! ## 1. One contract
//!
//! Every validator answers a single question, `test(&Value) -> bool`, and
//! answers it for *any* value. A string handed to a numeric comparison is
//! simply `false`.
//!
//! ## 2. Composition
//!
//! Validators are trees. Combinators own their children as [`Validator`]
//! handles, so a tree can mix any validator kinds:
//!
//! ```rust
//! use nebula_watch::prelude::*;
//!
//! let small_ints = container(instance_of(Kind::Int) & less_than(10));
//! assert!(small_ints.test(&Value::list([1, 2, 3])));
//! assert!(!small_ints.test(&Value::list([1, 20])));
//! ```
//!
//! ## 3. Fail at construction, not at test time
//!
//! Arguments that can never make sense are rejected when the validator is
//! built:
//!
//! ```rust
//! use nebula_watch::prelude::*;
//!
//! assert!(InstanceOf::from_value(&Value::from(10)).is_err());
//! assert!(and_of(Vec::<Validator>::new()).is_err());
//! ```

pub mod error;
pub mod traits;
pub mod value;

pub use error::{ConfigurationError, ValidationError};
pub use traits::{DynValidate, IntoValidator, Validate, ValidateExt, Validator};
pub use value::{ClassTag, Kind, Map, Object, Stream, Value};

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with multiple validators; all must pass.
///
/// Returns the failure of every validator that rejected the value.
///
/// ```rust
/// use nebula_watch::prelude::*;
/// use nebula_watch::foundation::validate_with_all;
///
/// let checks = [instance_of(Kind::Int).boxed(), greater_than(0).boxed()];
/// assert!(validate_with_all(&Value::from(3), &checks).is_ok());
/// assert_eq!(validate_with_all(&Value::from("3"), &checks).unwrap_err().len(), 2);
/// ```
pub fn validate_with_all(value: &Value, validators: &[Validator]) -> Result<(), Vec<ValidationError>> {
    let errors: Vec<ValidationError> = validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validates a value with multiple validators; at least one must pass.
pub fn validate_with_any(value: &Value, validators: &[Validator]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for validator in validators {
        match validator.validate(value) {
            Ok(()) => return Ok(()),
            Err(e) => errors.push(e),
        }
    }

    Err(errors)
}

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod core_tests {
    use super::*;
    use crate::validators::{always_false, always_true};

    #[test]
    fn test_validate_with_all() {
        let value = Value::from(1);
        assert!(validate_with_all(&value, &[always_true().boxed(), always_true().boxed()]).is_ok());

        let errors =
            validate_with_all(&value, &[always_true().boxed(), always_false().boxed()]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, "nothing");
    }

    #[test]
    fn test_validate_with_any() {
        let value = Value::from(1);
        assert!(validate_with_any(&value, &[always_false().boxed(), always_true().boxed()]).is_ok());
        assert_eq!(
            validate_with_any(&value, &[always_false().boxed(), always_false().boxed()])
                .unwrap_err()
                .len(),
            2
        );
    }

    #[test]
    fn empty_any_fails() {
        assert!(validate_with_any(&Value::Null, &[]).is_err());
    }
}
