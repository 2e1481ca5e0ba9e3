//! A single validated slot for plain Rust structs

use std::fmt;

use super::binding::{FieldBinding, IntoValidatorSpec};
use super::error::{MissingAttributeError, ValidationRejectedError};
use super::toggle;
use crate::foundation::Value;

/// A typed field guarded by a validator.
///
/// Use it as a struct member when a whole [`HostType`](super::HostType) is
/// more than needed. Validation sees the value converted to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use nebula_watch::prelude::*;
///
/// struct Account {
///     balance: Watched<i64>,
/// }
///
/// let mut account = Account {
///     balance: Watched::new("balance", greater_or_equal(0)),
/// };
///
/// assert!(account.balance.get().is_err());
/// account.balance.set(100).unwrap();
/// assert!(account.balance.set(-5).is_err());
/// assert_eq!(*account.balance.get().unwrap(), 100);
/// ```
#[derive(Clone)]
pub struct Watched<T> {
    binding: FieldBinding,
    slot: Option<T>,
    active: Option<bool>,
}

impl<T> Watched<T>
where
    T: Clone + Into<Value>,
{
    /// Creates an unset cell.
    pub fn new(name: impl Into<String>, spec: impl IntoValidatorSpec) -> Self {
        Self {
            binding: FieldBinding::new(name, spec),
            slot: None,
            active: None,
        }
    }

    /// # Errors
    ///
    /// [`MissingAttributeError`] if no value was ever committed.
    pub fn get(&self) -> Result<&T, MissingAttributeError> {
        self.slot.as_ref().ok_or_else(|| MissingAttributeError {
            host: "watched".to_owned(),
            field: self.binding.name().to_owned(),
        })
    }

    /// # Errors
    ///
    /// [`ValidationRejectedError`] if validation is active and the value is
    /// refused; the cell is unchanged.
    pub fn set(&mut self, value: T) -> Result<(), ValidationRejectedError> {
        if toggle::resolve(self.active, None) {
            let candidate: Value = value.clone().into();
            if !self.binding.accepts(&candidate) {
                tracing::debug!(
                    field = self.binding.name(),
                    validator = %self.binding.validator(),
                    "write rejected"
                );
                return Err(ValidationRejectedError {
                    host: "watched".to_owned(),
                    field: self.binding.name().to_owned(),
                    value: candidate,
                    validator: self.binding.validator().clone(),
                });
            }
        } else {
            tracing::trace!(field = self.binding.name(), "validation bypassed");
        }
        self.slot = Some(value);
        Ok(())
    }

    /// Empties the cell, returning the committed value.
    pub fn take(&mut self) -> Option<T> {
        self.slot.take()
    }

    pub fn is_set(&self) -> bool {
        self.slot.is_some()
    }

    pub fn set_active(&mut self, active: Option<bool>) {
        self.active = active;
    }

    pub fn binding(&self) -> &FieldBinding {
        &self.binding
    }
}

impl<T: fmt::Debug> fmt::Debug for Watched<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Watched")
            .field("name", &self.binding.name())
            .field("validator", self.binding.validator())
            .field("value", &self.slot)
            .finish()
    }
}
