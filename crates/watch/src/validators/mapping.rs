//! Mapping-of validator

use std::fmt;

use crate::combinators::And;
use crate::foundation::{ConfigurationError, IntoValidator, Kind, Validate, Validator, Value};

use super::{AlwaysTrue, HasAttr};

/// Every key satisfies `keys` and every value satisfies `values`.
///
/// Keys must also be equatable and hashable, whatever the key validator says:
/// the stored key rule is `has_attr("eq") & has_attr("hash") & keys`.
///
/// `keys >> values` builds the same validator.
///
/// # Examples
///
/// ```rust
/// use nebula_watch::prelude::*;
///
/// let flags = instance_of(Kind::Int) >> instance_of(Kind::Bool);
/// assert!(flags.test(&Value::map([(1, true), (2, false)])));
/// assert!(!flags.test(&Value::map([(1, 2)])));
/// assert!(!flags.test(&Value::list([1])));
/// ```
#[derive(Debug, Clone)]
pub struct Mapping {
    keys: And,
    values: Validator,
    kind: Kind,
}

impl Mapping {
    pub fn new(keys: impl IntoValidator, values: impl IntoValidator) -> Self {
        Self {
            keys: And::from_validators(vec![
                HasAttr::builtin("eq").into_validator(),
                HasAttr::builtin("hash").into_validator(),
                keys.into_validator(),
            ]),
            values: values.into_validator(),
            kind: Kind::Mapping,
        }
    }

    /// Restricts the accepted mapping kind.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::NotMappingKind`] if `kind` is not a mapping kind.
    pub fn with_kind(mut self, kind: Kind) -> Result<Self, ConfigurationError> {
        if !kind.is_subkind_of(&Kind::Mapping) {
            return Err(ConfigurationError::NotMappingKind { kind });
        }
        self.kind = kind;
        Ok(self)
    }

    /// The full key rule, including the implicit `eq`/`hash` requirement.
    pub fn keys(&self) -> &And {
        &self.keys
    }

    pub fn values(&self) -> &Validator {
        &self.values
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    fn declared_keys(&self) -> Option<&Validator> {
        self.keys.children().last()
    }
}

impl Default for Mapping {
    fn default() -> Self {
        Self::new(AlwaysTrue, AlwaysTrue)
    }
}

impl Validate for Mapping {
    fn test(&self, value: &Value) -> bool {
        value.kind().is_subkind_of(&self.kind)
            && value.all_pairs(|key, item| self.keys.test(key) && self.values.test(item)) == Some(true)
    }

    fn code(&self) -> &'static str {
        "mapping"
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.declared_keys() {
            Some(keys) => write!(f, "({keys} >> {})", self.values),
            None => write!(f, "({} >> {})", self.keys, self.values),
        }
    }
}

crate::impl_operators!(Mapping);
