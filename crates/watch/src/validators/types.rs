//! Type membership validators
//!
//! - [`InstanceOf`] - the value's kind is one of the targets (or a sub-kind)
//! - [`SubclassOf`] - the value *is* a type, and a sub-kind of the target
//!
//! ```rust
//! use nebula_watch::prelude::*;
//!
//! let number = instance_of(Kind::Number);
//! assert!(number.test(&Value::from(1)));
//! assert!(number.test(&Value::from(1.5)));
//! assert!(!number.test(&Value::from("1")));
//!
//! let number_type = SubclassOf::new(Kind::Number);
//! assert!(number_type.test(&Value::Type(Kind::Float)));
//! assert!(!number_type.test(&Value::from(1.5)));
//! ```

use std::fmt;

use parking_lot::Mutex;
use smallvec::{SmallVec, smallvec};

use crate::foundation::{ConfigurationError, Kind, Validate, Value};

// ============================================================================
// INSTANCE OF
// ============================================================================

/// Holds when the value's kind is a sub-kind of any target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceOf {
    targets: SmallVec<[Kind; 2]>,
}

impl InstanceOf {
    /// Creates an `InstanceOf` with a single target kind.
    pub fn new(target: Kind) -> Self {
        Self {
            targets: smallvec![target],
        }
    }

    /// Creates an `InstanceOf` that accepts any of `targets`.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::NoTargetKinds`] if `targets` is empty.
    pub fn any_of(targets: impl IntoIterator<Item = Kind>) -> Result<Self, ConfigurationError> {
        let targets: SmallVec<[Kind; 2]> = targets.into_iter().collect();
        if targets.is_empty() {
            return Err(ConfigurationError::NoTargetKinds {
                validator: "instance_of",
            });
        }
        Ok(Self { targets })
    }

    /// Creates an `InstanceOf` from a runtime value.
    ///
    /// Accepts a type value, or a list/tuple of type values.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::NotAType`] if the value (or one of its items) is
    /// not a type, [`ConfigurationError::NoTargetKinds`] for an empty list.
    pub fn from_value(value: &Value) -> Result<Self, ConfigurationError> {
        match value {
            Value::Type(kind) => Ok(Self::new(kind.clone())),
            Value::List(items) | Value::Tuple(items) => {
                let targets = items
                    .iter()
                    .map(|item| expect_type("instance_of", item))
                    .collect::<Result<Vec<_>, _>>()?;
                Self::any_of(targets)
            }
            other => Err(not_a_type("instance_of", other)),
        }
    }

    pub fn targets(&self) -> &[Kind] {
        &self.targets
    }
}

impl Validate for InstanceOf {
    fn test(&self, value: &Value) -> bool {
        let kind = value.kind();
        self.targets.iter().any(|target| kind.is_subkind_of(target))
    }

    fn code(&self) -> &'static str {
        "instance_of"
    }
}

impl fmt::Display for InstanceOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("instance_of(")?;
        for (i, target) in self.targets.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{target}")?;
        }
        f.write_str(")")
    }
}

/// Creates an [`InstanceOf`] for a single kind.
#[must_use]
pub fn instance_of(target: Kind) -> InstanceOf {
    InstanceOf::new(target)
}

// ============================================================================
// SUBCLASS OF
// ============================================================================

/// Holds when the value is a type (`Value::Type`) that is a sub-kind of the
/// target.
///
/// Each test records the type it was last handed. Bound fields get their own
/// copy, so that record is never shared between hosts.
pub struct SubclassOf {
    target: Kind,
    last_checked: Mutex<Option<Kind>>,
}

impl SubclassOf {
    pub fn new(target: Kind) -> Self {
        Self {
            target,
            last_checked: Mutex::new(None),
        }
    }

    /// Creates a `SubclassOf` from a runtime value.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::NotAType`] if the value is not a type.
    pub fn from_value(value: &Value) -> Result<Self, ConfigurationError> {
        expect_type("subclass_of", value).map(Self::new)
    }

    pub fn target(&self) -> &Kind {
        &self.target
    }

    /// The type seen by the most recent test, if it was handed a type.
    pub fn last_checked(&self) -> Option<Kind> {
        self.last_checked.lock().clone()
    }
}

impl Clone for SubclassOf {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            last_checked: Mutex::new(self.last_checked()),
        }
    }
}

impl Validate for SubclassOf {
    fn test(&self, value: &Value) -> bool {
        let Value::Type(kind) = value else {
            *self.last_checked.lock() = None;
            return false;
        };
        *self.last_checked.lock() = Some(kind.clone());
        kind.is_subkind_of(&self.target)
    }

    fn code(&self) -> &'static str {
        "subclass_of"
    }
}

// Tree identity is about configuration, not about what was last checked.
impl fmt::Debug for SubclassOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubclassOf").field("target", &self.target).finish_non_exhaustive()
    }
}

impl fmt::Display for SubclassOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subclass_of({})", self.target)
    }
}

crate::impl_operators!(InstanceOf, SubclassOf);

fn expect_type(validator: &'static str, value: &Value) -> Result<Kind, ConfigurationError> {
    match value {
        Value::Type(kind) => Ok(kind.clone()),
        other => Err(not_a_type(validator, other)),
    }
}

fn not_a_type(validator: &'static str, value: &Value) -> ConfigurationError {
    ConfigurationError::NotAType {
        validator,
        found: value.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
