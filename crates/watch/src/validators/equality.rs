//! Equality validator

use std::fmt;

use smallvec::{SmallVec, smallvec};

use crate::foundation::{ConfigurationError, Validate, Value};

/// Holds when the value equals any of the reference values.
///
/// Equality follows [`Value`]'s rules: `1`, `1.0` and `true` are all equal,
/// a list never equals a tuple.
///
/// # Examples
///
/// ```rust
/// use nebula_watch::prelude::*;
///
/// let yes_or_no = EqualsTo::any_of(["yes", "no"]).unwrap();
/// assert!(yes_or_no.test(&Value::from("no")));
/// assert!(!yes_or_no.test(&Value::from("maybe")));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EqualsTo {
    alternatives: SmallVec<[Value; 1]>,
}

impl EqualsTo {
    pub fn new(reference: impl Into<Value>) -> Self {
        Self {
            alternatives: smallvec![reference.into()],
        }
    }

    /// Accepts any of `references` (an implicit OR).
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::NoAlternatives`] if `references` is empty.
    pub fn any_of<I>(references: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let alternatives: SmallVec<[Value; 1]> = references.into_iter().map(Into::into).collect();
        if alternatives.is_empty() {
            return Err(ConfigurationError::NoAlternatives {
                validator: "equals_to",
            });
        }
        Ok(Self { alternatives })
    }

    pub fn alternatives(&self) -> &[Value] {
        &self.alternatives
    }
}

impl Validate for EqualsTo {
    fn test(&self, value: &Value) -> bool {
        self.alternatives.iter().any(|reference| reference == value)
    }

    fn code(&self) -> &'static str {
        "equals_to"
    }
}

impl fmt::Display for EqualsTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("equals_to(")?;
        for (i, reference) in self.alternatives.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{reference}")?;
        }
        f.write_str(")")
    }
}

crate::impl_operators!(EqualsTo);

/// Creates an [`EqualsTo`] with a single reference value.
pub fn equals_to(reference: impl Into<Value>) -> EqualsTo {
    EqualsTo::new(reference)
}

/// "Just this value".
pub type Just = EqualsTo;
