//! Prelude module for convenient imports.
//!
//! Provides a single `use nebula_watch::prelude::*;` import that brings
//! in all commonly needed traits, types, validators, and combinators.
//!
//! # Examples
//!
//! ```rust
//! use nebula_watch::prelude::*;
//!
//! let port = instance_of(Kind::Int) & greater_than(0) & less_or_equal(65535);
//! let ports = container(port).nullable();
//!
//! assert!(ports.test(&Value::list([80, 443])));
//! assert!(ports.test(&Value::Null));
//! assert!(!ports.test(&Value::list([0])));
//! ```

// ============================================================================
// FOUNDATION: Values, traits, errors
// ============================================================================

pub use crate::foundation::{
    ClassTag, ConfigurationError, IntoValidator, Kind, Map, Object, Stream, Validate, ValidateExt,
    ValidationError, Validator, Value,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    All, And, AnyOf, Choose, Not, Or, Xor, and_of, mapping_of, negate, or_of, xor_of,
};
pub use crate::{all_of, any_of, one_of};

// ============================================================================
// FIELDS: Bindings, hosts, toggle
// ============================================================================

pub use crate::watch::{
    Attributes, FieldBinding, HostObject, HostType, IntoValidatorSpec, MissingAttributeError,
    RejectionHandler, ValidationRejectedError, ValidatorSpec, WatchConfig, Watched,
    WriteInterceptor, toggle,
};

// ============================================================================
// FUNCTIONS: Interfaces
// ============================================================================

pub use crate::interface::{
    Arguments, ArgumentValidationError, CallError, CallableWithInterface, Implements, Interface,
    InterfaceMismatchError, InterfacedFunction, Parameter, ResultValidationError, Signature,
    implements,
};

pub use crate::error::WatchError;
