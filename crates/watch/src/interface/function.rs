//! Functions whose arguments and result are validated on every call

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use super::error::{
    ArgumentValidationError, CallError, InterfaceMismatchError, ResultValidationError,
};
use super::signature::{Arguments, Signature};
use super::{Interface, RETURN_KEY};
use crate::foundation::Value;

type Body = dyn Fn(&Arguments) -> Value + Send + Sync;
type ArgumentHandler = dyn Fn(ArgumentValidationError) -> Result<(), CallError> + Send + Sync;
type ResultHandler = dyn Fn(ResultValidationError) -> Result<(), CallError> + Send + Sync;

/// A function bound to an [`Interface`].
///
/// Calls take keyword arguments. Each supplied argument is checked against
/// the interface entry of the same name and the result against `"return"`;
/// names without an entry accept anything.
///
/// A failed check goes to a handler. The default handlers turn it into
/// [`CallError::Argument`] or [`CallError::Result`]; see
/// [`with_argument_handler`](Self::with_argument_handler) to change that.
///
/// # Examples
///
/// ```rust
/// use nebula_watch::prelude::*;
///
/// let positive_int = instance_of(Kind::Int) & greater_than(0);
/// let interface = Interface::new()
///     .arg("value", positive_int.clone())
///     .returns(positive_int);
///
/// let factorial = InterfacedFunction::bind(
///     interface,
///     Signature::new("factorial").param("value").param_or("mode", Value::Null),
///     |args| Value::from((1..=args.int("value").unwrap_or(1)).product::<i64>()),
/// )
/// .unwrap();
///
/// assert_eq!(factorial.call([("value", 5)]).unwrap(), Value::from(120));
/// assert!(factorial.call([("value", 0)]).unwrap_err().is_argument_failure());
/// ```
#[derive(Clone)]
pub struct InterfacedFunction {
    interface: Interface,
    signature: Signature,
    body: Arc<Body>,
    on_argument: Option<Arc<ArgumentHandler>>,
    on_result: Option<Arc<ResultHandler>>,
}

impl InterfacedFunction {
    /// Binds `body` to `interface`.
    ///
    /// # Errors
    ///
    /// [`InterfaceMismatchError`] if the interface names a parameter that
    /// `signature` does not declare.
    pub fn bind<F>(interface: Interface, signature: Signature, body: F) -> Result<Self, InterfaceMismatchError>
    where
        F: Fn(&Arguments) -> Value + Send + Sync + 'static,
    {
        let missing: Vec<String> = interface
            .parameter_names()
            .filter(|name| !signature.has(name))
            .map(str::to_owned)
            .collect();
        if !missing.is_empty() {
            tracing::debug!(
                function = signature.name(),
                ?missing,
                "interface names parameters the function does not declare"
            );
            return Err(InterfaceMismatchError {
                function: signature.name().to_owned(),
                missing,
            });
        }
        Ok(Self {
            interface,
            signature,
            body: Arc::new(body),
            on_argument: None,
            on_result: None,
        })
    }

    /// Replaces what happens when an argument fails validation.
    ///
    /// Returning `Ok(())` accepts the argument anyway and the call goes on;
    /// an error aborts the call with it.
    ///
    /// ```rust
    /// use nebula_watch::prelude::*;
    ///
    /// let lenient = implements(Interface::new().arg("n", instance_of(Kind::Int)))
    ///     .define(Signature::new("lenient").param("n"), |args| {
    ///         args.get("n").cloned().unwrap_or_default()
    ///     })
    ///     .unwrap()
    ///     .with_argument_handler(|_| Ok(()));
    ///
    /// assert_eq!(lenient.call([("n", "seven")]).unwrap(), Value::from("seven"));
    /// ```
    #[must_use]
    pub fn with_argument_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(ArgumentValidationError) -> Result<(), CallError> + Send + Sync + 'static,
    {
        self.on_argument = Some(Arc::new(handler));
        self
    }

    /// Replaces what happens when the result fails validation.
    ///
    /// Returning `Ok(())` hands the result back to the caller unchanged.
    #[must_use]
    pub fn with_result_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(ResultValidationError) -> Result<(), CallError> + Send + Sync + 'static,
    {
        self.on_result = Some(Arc::new(handler));
        self
    }

    fn argument_failed(&self, error: ArgumentValidationError) -> Result<(), CallError> {
        tracing::debug!(function = self.name(), parameter = %error.parameter, "argument failed validation");
        match &self.on_argument {
            Some(handler) => handler(error),
            None => Err(error.into()),
        }
    }

    fn result_failed(&self, error: ResultValidationError) -> Result<(), CallError> {
        tracing::debug!(function = self.name(), "result failed validation");
        match &self.on_result {
            Some(handler) => handler(error),
            None => Err(error.into()),
        }
    }

    pub fn name(&self) -> &str {
        self.signature.name()
    }

    pub fn interface(&self) -> &Interface {
        &self.interface
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Calls the function with keyword arguments.
    ///
    /// Arguments are bound first, then validated in parameter order, then
    /// defaults are filled in and the body runs; its result is validated
    /// last.
    ///
    /// # Errors
    ///
    /// - [`CallError::DuplicateArgument`], [`CallError::UnexpectedArgument`]
    ///   or [`CallError::MissingArgument`] when the arguments do not fit the
    ///   signature
    /// - [`CallError::Argument`] for the first argument that fails validation
    /// - [`CallError::Result`] when the result fails validation
    /// - whatever a custom failure handler returns
    pub fn call<I, K, V>(&self, kwargs: I) -> Result<Value, CallError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut supplied: IndexMap<String, Value> = IndexMap::new();
        for (name, value) in kwargs {
            let name = name.into();
            if supplied.contains_key(&name) {
                return Err(CallError::DuplicateArgument {
                    function: self.name().to_owned(),
                    argument: name,
                });
            }
            supplied.insert(name, value.into());
        }

        if let Some(argument) = supplied.keys().find(|name| !self.signature.has(name)) {
            return Err(CallError::UnexpectedArgument {
                function: self.name().to_owned(),
                argument: argument.clone(),
            });
        }
        if let Some(parameter) = self
            .signature
            .parameters()
            .iter()
            .find(|p| p.is_required() && !supplied.contains_key(p.name()))
        {
            return Err(CallError::MissingArgument {
                function: self.name().to_owned(),
                parameter: parameter.name().to_owned(),
            });
        }

        let mut arguments = Arguments::default();
        for parameter in self.signature.parameters() {
            match supplied.shift_remove(parameter.name()) {
                Some(value) => {
                    if !self.interface.accepts(parameter.name(), &value) {
                        self.argument_failed(ArgumentValidationError {
                            function: self.name().to_owned(),
                            parameter: parameter.name().to_owned(),
                            value: value.clone(),
                        })?;
                    }
                    arguments.insert(parameter.name().to_owned(), value);
                }
                None => {
                    if let Some(default) = parameter.default() {
                        arguments.insert(parameter.name().to_owned(), default.clone());
                    }
                }
            }
        }

        let result = (self.body)(&arguments);
        if !self.interface.accepts(RETURN_KEY, &result) {
            self.result_failed(ResultValidationError {
                function: self.name().to_owned(),
                value: result.clone(),
            })?;
        }
        Ok(result)
    }

    /// Wraps the function as a [`Value`] so it can be stored and validated.
    pub fn into_value(self) -> Value {
        Value::Function(Arc::new(self))
    }
}

impl fmt::Debug for InterfacedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterfacedFunction")
            .field("signature", &self.signature)
            .field("interface", &self.interface)
            .field("custom_argument_handler", &self.on_argument.is_some())
            .field("custom_result_handler", &self.on_result.is_some())
            .finish_non_exhaustive()
    }
}

/// Binder returned by [`implements`].
#[derive(Debug, Clone)]
pub struct Implements {
    interface: Interface,
}

impl Implements {
    /// Binds a function to the interface.
    ///
    /// # Errors
    ///
    /// See [`InterfacedFunction::bind`].
    pub fn define<F>(&self, signature: Signature, body: F) -> Result<InterfacedFunction, InterfaceMismatchError>
    where
        F: Fn(&Arguments) -> Value + Send + Sync + 'static,
    {
        InterfacedFunction::bind(self.interface.clone(), signature, body)
    }
}

/// Prepares an interface for binding to any number of functions.
///
/// ```rust
/// use nebula_watch::prelude::*;
///
/// let returns_ints = implements(Interface::new().returns(container(instance_of(Kind::Int))));
///
/// let valid = returns_ints.define(Signature::new("valid"), |_| Value::list([1, 2, 3])).unwrap();
/// let invalid = returns_ints.define(Signature::new("invalid"), |_| Value::from("oops")).unwrap();
///
/// assert!(valid.call(Vec::<(String, Value)>::new()).is_ok());
/// assert!(invalid.call(Vec::<(String, Value)>::new()).unwrap_err().is_result_failure());
/// ```
pub fn implements(interface: Interface) -> Implements {
    Implements { interface }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Kind;
    use crate::validators::{greater_than, instance_of};
    use pretty_assertions::assert_eq;

    fn add() -> InterfacedFunction {
        let interface = Interface::new()
            .arg("a", instance_of(Kind::Int))
            .arg("b", instance_of(Kind::Int))
            .returns(greater_than(0));
        InterfacedFunction::bind(
            interface,
            Signature::new("add").param("a").param_or("b", 1),
            |args| Value::from(args.int("a").unwrap_or(0) + args.int("b").unwrap_or(0)),
        )
        .unwrap()
    }

    #[test]
    fn test_call_applies_defaults() {
        assert_eq!(add().call([("a", 2)]).unwrap(), Value::from(3));
        assert_eq!(add().call([("a", 2), ("b", 5)]).unwrap(), Value::from(7));
    }

    #[test]
    fn test_argument_failure_names_parameter() {
        let error = add().call([("a", Value::from(1)), ("b", Value::from("x"))]).unwrap_err();
        let CallError::Argument(error) = error else {
            panic!("expected an argument failure");
        };
        assert_eq!(error.function, "add");
        assert_eq!(error.parameter, "b");
        assert_eq!(error.value, Value::from("x"));
    }

    #[test]
    fn test_first_failing_argument_in_signature_order() {
        let error = add().call([("b", "x"), ("a", "y")]).unwrap_err();
        let CallError::Argument(error) = error else {
            panic!("expected an argument failure");
        };
        assert_eq!(error.parameter, "a");
    }

    #[test]
    fn test_result_failure() {
        let error = add().call([("a", -5)]).unwrap_err();
        assert!(error.is_result_failure());
    }

    #[test]
    fn test_binding_errors() {
        assert!(matches!(
            add().call([("c", 1)]).unwrap_err(),
            CallError::UnexpectedArgument { .. }
        ));
        assert!(matches!(
            add().call([("b", 1)]).unwrap_err(),
            CallError::MissingArgument { ref parameter, .. } if parameter == "a"
        ));
    }

    #[test]
    fn test_duplicate_keywords_are_rejected() {
        let error = add().call([("a", Value::from(1)), ("a", Value::from("x"))]).unwrap_err();
        assert!(matches!(
            error,
            CallError::DuplicateArgument { ref argument, .. } if argument == "a"
        ));
        assert_eq!(error.to_string(), "function 'add' got multiple values for argument 'a'");
    }

    #[test]
    fn test_argument_handler_can_tolerate_failures() {
        let lenient = add().with_argument_handler(|_| Ok(()));
        assert_eq!(lenient.call([("a", 2), ("b", 1)]).unwrap(), Value::from(3));
        assert_eq!(
            lenient.call([("a", Value::from(2.5)), ("b", Value::from(1))]).unwrap(),
            Value::from(1)
        );
    }

    #[test]
    fn test_argument_handler_can_replace_the_error() {
        let strict = add().with_argument_handler(|error| {
            Err(CallError::Custom(format!("bad {}", error.parameter)))
        });
        let error = strict.call([("a", "x")]).unwrap_err();
        assert_eq!(error.to_string(), "bad a");
        assert!(!error.is_argument_failure());
    }

    #[test]
    fn test_result_handler_sees_the_failure() {
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let quiet = add().with_result_handler(move |error| {
            sink.lock().push(error.value);
            Ok(())
        });

        assert_eq!(quiet.call([("a", -5)]).unwrap(), Value::from(-4));
        assert_eq!(*seen.lock(), vec![Value::from(-4)]);
        assert!(add().call([("a", -5)]).unwrap_err().is_result_failure());
    }

    #[test]
    fn test_interface_naming_unknown_parameter_is_rejected() {
        let interface = Interface::new().arg("a", instance_of(Kind::Int)).arg("c", instance_of(Kind::Int));
        let error = implements(interface)
            .define(Signature::new("f").param("a").param("b"), |_| Value::Null)
            .unwrap_err();
        assert_eq!(error.missing, vec!["c".to_owned()]);
    }

    #[test]
    fn test_unlisted_parameters_accept_anything() {
        let f = implements(Interface::new())
            .define(Signature::new("echo").param("x"), |args| args.get("x").cloned().unwrap_or_default())
            .unwrap();
        assert_eq!(f.call([("x", Value::list([1]))]).unwrap(), Value::list([1]));
    }

    #[test]
    fn test_function_as_value() {
        let value = add().into_value();
        assert_eq!(value.kind(), Kind::Function);
        assert_eq!(value.to_string(), "<function add>");
        assert_eq!(value.clone(), value);
    }
}
