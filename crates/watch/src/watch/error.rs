//! Errors raised by field access

use crate::foundation::{Validator, Value};

/// A bound field (or plain attribute) was read before any value was
/// committed to it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("object of type '{host}' has no attribute '{field}'")]
pub struct MissingAttributeError {
    pub host: String,
    pub field: String,
}

/// A write was refused by the field's validator.
///
/// The object is unchanged when this is returned.
#[derive(Debug, Clone, thiserror::Error)]
#[error("cannot set '{field}' of '{host}' to {value}: value does not satisfy {validator}")]
pub struct ValidationRejectedError {
    pub host: String,
    pub field: String,
    /// The value that was refused.
    pub value: Value,
    /// The validator that refused it.
    pub validator: Validator,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::instance_of;
    use crate::foundation::{IntoValidator, Kind};

    #[test]
    fn test_messages() {
        let missing = MissingAttributeError {
            host: "Point".into(),
            field: "x".into(),
        };
        assert_eq!(missing.to_string(), "object of type 'Point' has no attribute 'x'");

        let rejected = ValidationRejectedError {
            host: "Point".into(),
            field: "x".into(),
            value: Value::from("1"),
            validator: instance_of(Kind::Int).into_validator(),
        };
        assert_eq!(
            rejected.to_string(),
            "cannot set 'x' of 'Point' to \"1\": value does not satisfy instance_of(int)"
        );
    }
}
