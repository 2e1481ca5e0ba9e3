//! Errors raised by interfaced functions

use crate::foundation::Value;

/// The interface names parameters the function does not declare.
///
/// Raised when binding, never at call time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("function '{function}' does not implement the interface: no parameter named {}", quoted(.missing))]
pub struct InterfaceMismatchError {
    pub function: String,
    /// Interface keys absent from the signature, in interface order.
    pub missing: Vec<String>,
}

/// An argument was refused by its validator.
#[derive(Debug, Clone, thiserror::Error)]
#[error("argument '{parameter}' = {value} of function '{function}' failed validation")]
pub struct ArgumentValidationError {
    pub function: String,
    pub parameter: String,
    pub value: Value,
}

/// The return value was refused by the `"return"` validator.
#[derive(Debug, Clone, thiserror::Error)]
#[error("result {value} of function '{function}' failed validation")]
pub struct ResultValidationError {
    pub function: String,
    pub value: Value,
}

/// Everything that can go wrong when calling an interfaced function.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum CallError {
    #[error(transparent)]
    Argument(#[from] ArgumentValidationError),

    #[error(transparent)]
    Result(#[from] ResultValidationError),

    /// A keyword argument matches no parameter.
    #[error("function '{function}' got an unexpected argument '{argument}'")]
    UnexpectedArgument { function: String, argument: String },

    /// A parameter without a default was not supplied.
    #[error("function '{function}' is missing required argument '{parameter}'")]
    MissingArgument { function: String, parameter: String },

    /// The same keyword was supplied more than once.
    #[error("function '{function}' got multiple values for argument '{argument}'")]
    DuplicateArgument { function: String, argument: String },

    /// Raised by a custom failure handler.
    #[error("{0}")]
    Custom(String),
}

impl CallError {
    /// True when an argument failed validation.
    pub fn is_argument_failure(&self) -> bool {
        matches!(self, Self::Argument(_))
    }

    /// True when the result failed validation.
    pub fn is_result_failure(&self) -> bool {
        matches!(self, Self::Result(_))
    }
}

fn quoted(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("'{name}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_lists_every_missing_name() {
        let error = InterfaceMismatchError {
            function: "add".into(),
            missing: vec!["b".into(), "c".into()],
        };
        assert_eq!(
            error.to_string(),
            "function 'add' does not implement the interface: no parameter named 'b', 'c'"
        );
    }

    #[test]
    fn test_call_error_is_transparent() {
        let error: CallError = ResultValidationError {
            function: "f".into(),
            value: Value::from("x"),
        }
        .into();
        assert!(error.is_result_failure());
        assert!(!error.is_argument_failure());
        assert_eq!(error.to_string(), "result \"x\" of function 'f' failed validation");
    }
}
