//! Error types raised by validators themselves.
//!
//! [`ValidationError`] is the structured description of a failed test.
//! [`ConfigurationError`] is raised while *building* a validator, never
//! while testing a value.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

use crate::foundation::Kind;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure.
///
/// Uses `Cow<'static, str>` so the common case of static codes and messages
/// does not allocate.
///
/// # Examples
///
/// ```rust
/// use nebula_watch::foundation::ValidationError;
///
/// let error = ValidationError::new("greater_than", "Value must be greater than 0")
///     .with_field("age")
///     .with_param("bound", "0");
/// assert_eq!(error.param("bound"), Some("0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling, e.g. `"instance_of"`.
    pub code: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Field the failure belongs to, when raised through a binding.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value parameters (typically 0-2).
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
        }
    }

    /// Sets the field this error belongs to.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONFIGURATION ERROR
// ============================================================================

/// A validator was constructed with arguments that can never make sense.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// A combinator needs at least one child.
    #[error("{combinator} needs at least one child validator")]
    EmptyCombinator { combinator: &'static str },

    /// A validator that takes types was handed something else.
    #[error("{validator} expects a type, got {found}")]
    NotAType {
        validator: &'static str,
        found: String,
    },

    /// `InstanceOf` and friends need at least one target kind.
    #[error("{validator} needs at least one target kind")]
    NoTargetKinds { validator: &'static str },

    /// A container validator was given a kind that cannot be iterated.
    #[error("container kind must be iterable, got {kind}")]
    NotIterableKind { kind: Kind },

    /// A mapping validator was given a kind that is not a mapping.
    #[error("mapping kind must be a mapping, got {kind}")]
    NotMappingKind { kind: Kind },

    /// `HasAttr` with an empty member name.
    #[error("attribute name must not be empty")]
    EmptyAttributeName,

    /// `EqualsTo` without any reference value.
    #[error("{validator} needs at least one reference value")]
    NoAlternatives { validator: &'static str },
}

// ============================================================================
// TESTS
// ============================================================================
