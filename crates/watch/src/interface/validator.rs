//! Validator for interfaced functions stored as values

use std::fmt;

use super::Interface;
use crate::foundation::{Validate, Value};

/// Holds when the value is an [`InterfacedFunction`](super::InterfacedFunction)
/// whose interface [`matches`](Interface::matches) the expected one.
///
/// Useful as the validator of a field that stores callbacks.
///
/// ```rust
/// use nebula_watch::prelude::*;
///
/// let binary_int = Interface::new()
///     .arg("a", instance_of(Kind::Int))
///     .arg("b", instance_of(Kind::Int))
///     .returns(instance_of(Kind::Int));
///
/// let handler = HostType::builder("Handler")
///     .field("on_add", CallableWithInterface::new(binary_int.clone()))
///     .build();
///
/// let add = implements(binary_int)
///     .define(Signature::new("add").param("a").param("b"), |args| {
///         Value::from(args.int("a").unwrap_or(0) + args.int("b").unwrap_or(0))
///     })
///     .unwrap();
///
/// let mut object = handler.instantiate();
/// object.set("on_add", add.into_value()).unwrap();
/// assert!(object.set("on_add", 42).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CallableWithInterface {
    interface: Interface,
}

impl CallableWithInterface {
    pub fn new(interface: Interface) -> Self {
        Self { interface }
    }

    pub fn interface(&self) -> &Interface {
        &self.interface
    }
}

impl Validate for CallableWithInterface {
    fn test(&self, value: &Value) -> bool {
        match value {
            Value::Function(function) => function.interface().matches(&self.interface),
            _ => false,
        }
    }

    fn code(&self) -> &'static str {
        "callable_with_interface"
    }
}

impl fmt::Display for CallableWithInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("callable_with_interface(")?;
        for (i, name) in self.interface.entries.keys().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        f.write_str(")")
    }
}

crate::impl_operators!(CallableWithInterface);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Kind;
    use crate::interface::{Signature, implements};
    use crate::validators::instance_of;

    fn interface(returns: Kind) -> Interface {
        Interface::new()
            .arg("a", instance_of(Kind::Int))
            .arg("b", instance_of(Kind::Int))
            .returns(instance_of(returns))
    }

    fn function(returns: Kind) -> Value {
        implements(interface(returns))
            .define(Signature::new("f").param("a").param("b"), |_| Value::from(0))
            .map(|f| f.into_value())
            .unwrap()
    }

    #[test]
    fn test_matching_interface_passes() {
        let validator = CallableWithInterface::new(interface(Kind::Int));
        assert!(validator.test(&function(Kind::Int)));
        assert!(!validator.test(&function(Kind::Str)));
    }

    #[test]
    fn test_non_functions_fail() {
        let validator = CallableWithInterface::new(interface(Kind::Int));
        assert!(!validator.test(&Value::from(1)));
        assert!(!validator.test(&Value::Type(Kind::Int)));
    }

    #[test]
    fn test_display() {
        let validator = CallableWithInterface::new(interface(Kind::Int));
        assert_eq!(validator.to_string(), "callable_with_interface(a, b, return)");
    }
}
