//! Crate-level error aggregate
//!
//! Each layer raises its own error type. [`WatchError`] gathers all of them
//! so callers mixing layers can propagate with a single `?`.
//!
//! ```rust
//! use nebula_watch::prelude::*;
//!
//! fn configure() -> Result<HostObject, WatchError> {
//!     let point = HostType::builder("Point")
//!         .field("x", InstanceOf::any_of([Kind::Int, Kind::Float])?)
//!         .build();
//!     let mut origin = point.instantiate();
//!     origin.set("x", 0)?;
//!     Ok(origin)
//! }
//!
//! assert!(configure().is_ok());
//! ```

use crate::foundation::{ConfigurationError, ValidationError};
use crate::interface::{CallError, InterfaceMismatchError};
use crate::watch::{MissingAttributeError, ValidationRejectedError};

/// Any failure raised by this crate.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum WatchError {
    /// A validator was built with invalid arguments.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// A value failed [`Validate::validate`](crate::foundation::Validate::validate).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A field was read before it was set.
    #[error(transparent)]
    MissingAttribute(#[from] MissingAttributeError),

    /// A field write was refused.
    #[error(transparent)]
    Rejected(#[from] ValidationRejectedError),

    /// An interface could not be bound to a function.
    #[error(transparent)]
    InterfaceMismatch(#[from] InterfaceMismatchError),

    /// An interfaced function call failed.
    #[error(transparent)]
    Call(#[from] CallError),
}

impl WatchError {
    /// True for failures caused by a value rather than by setup.
    pub fn is_validation_failure(&self) -> bool {
        match self {
            Self::Validation(_) | Self::Rejected(_) => true,
            Self::Call(error) => error.is_argument_failure() || error.is_result_failure(),
            Self::Configuration(_) | Self::MissingAttribute(_) | Self::InterfaceMismatch(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Value;
    use crate::interface::ResultValidationError;

    #[test]
    fn test_conversions_keep_the_message() {
        let error: WatchError = MissingAttributeError {
            host: "User".into(),
            field: "age".into(),
        }
        .into();
        assert_eq!(error.to_string(), "object of type 'User' has no attribute 'age'");
        assert!(!error.is_validation_failure());
    }

    #[test]
    fn test_call_failures_are_validation_failures() {
        let error: WatchError = CallError::from(ResultValidationError {
            function: "f".into(),
            value: Value::Null,
        })
        .into();
        assert!(error.is_validation_failure());

        let error: WatchError = CallError::MissingArgument {
            function: "f".into(),
            parameter: "x".into(),
        }
        .into();
        assert!(!error.is_validation_failure());
    }

    #[test]
    fn test_configuration_error_converts() {
        let error: WatchError = ConfigurationError::EmptyAttributeName.into();
        assert!(matches!(error, WatchError::Configuration(_)));
    }
}
