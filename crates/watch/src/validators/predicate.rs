//! Custom predicate validator

use std::fmt;
use std::sync::Arc;

use crate::foundation::{Validate, Value};

type PredicateFn = dyn Fn(&Value) -> bool + Send + Sync;

/// Wraps a closure as a named validator.
///
/// The name is what the validator displays as, so pick something that reads
/// well in an error message.
///
/// # Examples
///
/// ```rust
/// use nebula_watch::prelude::*;
///
/// let even = Predicate::new("even", |v| v.as_int().is_some_and(|i| i % 2 == 0));
/// assert!(even.test(&Value::from(4)));
/// assert!(!even.test(&Value::from(3)));
/// assert_eq!(even.to_string(), "even");
/// ```
#[derive(Clone)]
pub struct Predicate {
    name: String,
    check: Arc<PredicateFn>,
}

impl Predicate {
    /// Creates a predicate from a name and a closure.
    ///
    /// The closure must be total: return `false` for values it does not
    /// understand rather than panicking.
    pub fn new<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            check: Arc::new(check),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Validate for Predicate {
    fn test(&self, value: &Value) -> bool {
        (self.check)(value)
    }

    fn code(&self) -> &'static str {
        "predicate"
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").field("name", &self.name).finish_non_exhaustive()
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

crate::impl_operators!(Predicate);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_delegates() {
        let short = Predicate::new("short", |v| v.len().is_some_and(|len| len < 3));
        assert!(short.test(&Value::from("ab")));
        assert!(!short.test(&Value::from("abc")));
        assert!(!short.test(&Value::from(1)));
    }

    #[test]
    fn test_clones_share_the_closure() {
        let a = Predicate::new("positive", |v| v.as_int().is_some_and(|i| i > 0));
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.check, &b.check));
        assert_eq!(b.name(), "positive");
    }

    #[test]
    fn test_debug_omits_closure() {
        let p = Predicate::new("any", |_| true);
        assert_eq!(format!("{p:?}"), "Predicate { name: \"any\", .. }");
    }
}
