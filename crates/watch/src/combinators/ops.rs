//! Operator sugar.
//!
//! `a & b`, `a | b`, `a ^ b`, `!a` and `keys >> values` build the same nodes
//! as [`And::pair`], [`Or::pair`], [`Xor::pair`], [`Not::new`] and
//! [`Mapping::new`]. Nothing is evaluated when an expression is built.
//!
//! ```rust
//! use nebula_watch::prelude::*;
//!
//! let scores = instance_of(Kind::Str) >> (instance_of(Kind::Int) & greater_or_equal(0));
//! assert!(scores.test(&Value::map([("alice", 3), ("bob", 0)])));
//! assert!(!scores.test(&Value::map([("alice", -1)])));
//! ```

use crate::foundation::{IntoValidator, Validator};
use crate::validators::Mapping;

use super::{And, Not, Or, Xor};

crate::impl_operators!(Validator, And, Or, Xor, Not);

/// Named form of `keys >> values`.
pub fn mapping_of(keys: impl IntoValidator, values: impl IntoValidator) -> Mapping {
    Mapping::new(keys, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Kind, Validate, ValidateExt, Value};
    use crate::validators::{always_true, greater_than, instance_of};
    use pretty_assertions::assert_eq;

    fn debug(v: impl std::fmt::Debug) -> String {
        format!("{v:?}")
    }

    #[test]
    fn operators_match_named_builders() {
        let int = || instance_of(Kind::Int);
        let pos = || greater_than(0);

        assert_eq!(debug(int() & pos()), debug(And::pair(int(), pos())));
        assert_eq!(debug(int() | pos()), debug(Or::pair(int(), pos())));
        assert_eq!(debug(int() ^ pos()), debug(Xor::pair(int(), pos())));
        assert_eq!(debug(!int()), debug(Not::new(int())));
        assert_eq!(debug(int() >> pos()), debug(mapping_of(int(), pos())));
    }

    #[test]
    fn chained_operators_nest_left() {
        let a = || instance_of(Kind::Int);
        let chained = a() & a() & a();
        let explicit = And::pair(And::pair(a(), a()), a());
        assert_eq!(debug(chained), debug(explicit));
    }

    #[test]
    fn erased_handles_compose() {
        let left: Validator = instance_of(Kind::Int).boxed();
        let validator = left | instance_of(Kind::Str);
        assert!(validator.test(&Value::from("x")));
        assert!(!validator.test(&Value::from(1.5)));
    }

    #[test]
    fn shift_builds_a_mapping() {
        let validator = instance_of(Kind::Int) >> always_true();
        assert!(validator.test(&Value::map([(1, "a")])));
        assert!(!validator.test(&Value::map([("a", 1)])));
    }
}
