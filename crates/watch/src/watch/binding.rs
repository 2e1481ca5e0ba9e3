//! Field bindings and the specifications they are built from

use std::fmt;
use std::sync::Arc;

use crate::foundation::{IntoValidator, Validator, Value};

// ============================================================================
// VALIDATOR SPEC
// ============================================================================

type Factory = dyn Fn() -> Validator + Send + Sync;

/// How to build the validator of a field.
///
/// Every binding builds its own validator from the spec, so two host types
/// declared with the same spec never share validator state.
#[derive(Clone)]
pub enum ValidatorSpec {
    /// Deep-cloned for each binding.
    Template(Validator),
    /// Called once per binding.
    Factory(Arc<Factory>),
}

impl ValidatorSpec {
    pub fn template(validator: impl IntoValidator) -> Self {
        Self::Template(validator.into_validator())
    }

    /// ```rust
    /// use nebula_watch::prelude::*;
    ///
    /// let spec = ValidatorSpec::factory(|| SubclassOf::new(Kind::Number));
    /// assert!(spec.build().test(&Value::Type(Kind::Int)));
    /// ```
    pub fn factory<F, V>(factory: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: IntoValidator,
    {
        Self::Factory(Arc::new(move || factory().into_validator()))
    }

    /// Builds a fresh validator.
    pub fn build(&self) -> Validator {
        match self {
            Self::Template(template) => template.clone(),
            Self::Factory(factory) => factory(),
        }
    }
}

impl fmt::Debug for ValidatorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Self::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

/// Anything a field can be declared with: a validator or a [`ValidatorSpec`].
pub trait IntoValidatorSpec {
    fn into_spec(self) -> ValidatorSpec;
}

impl<V: IntoValidator> IntoValidatorSpec for V {
    fn into_spec(self) -> ValidatorSpec {
        ValidatorSpec::template(self)
    }
}

impl IntoValidatorSpec for ValidatorSpec {
    fn into_spec(self) -> ValidatorSpec {
        self
    }
}

// ============================================================================
// FIELD BINDING
// ============================================================================

/// A field name and the validator that guards it.
#[derive(Debug, Clone)]
pub struct FieldBinding {
    name: String,
    validator: Validator,
}

impl FieldBinding {
    /// Builds a binding with its own validator.
    pub fn new(name: impl Into<String>, spec: impl IntoValidatorSpec) -> Self {
        Self {
            name: name.into(),
            validator: spec.into_spec().build(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Runs the bound validator.
    pub fn accepts(&self, value: &Value) -> bool {
        self.validator.test(value)
    }
}
