//! Ordering validators
//!
//! Each holds a bound and compares the tested value against it with
//! [`Value`]'s partial order. Values that cannot be ordered against the bound
//! (a string against a number, a map against anything) never satisfy the
//! comparison.
//!
//! ```rust
//! use nebula_watch::prelude::*;
//!
//! let adult = greater_or_equal(18);
//! assert!(adult.test(&Value::from(18)));
//! assert!(adult.test(&Value::from(40.5)));
//! assert!(!adult.test(&Value::from("40")));
//!
//! let before_m = less_than("m");
//! assert!(before_m.test(&Value::from("apple")));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::foundation::{Validate, Value};

macro_rules! comparison {
    (
        $(#[$meta:meta])*
        $name:ident, $factory:ident, $code:literal, |$ord:ident| $holds:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            bound: Value,
        }

        impl $name {
            pub fn new(bound: impl Into<Value>) -> Self {
                Self { bound: bound.into() }
            }

            pub fn bound(&self) -> &Value {
                &self.bound
            }
        }

        impl Validate for $name {
            fn test(&self, value: &Value) -> bool {
                value
                    .partial_cmp(&self.bound)
                    .is_some_and(|$ord: Ordering| $holds)
            }

            fn code(&self) -> &'static str {
                $code
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($code, "({})"), self.bound)
            }
        }

        crate::impl_operators!($name);

        #[doc = concat!("Creates a [`", stringify!($name), "`].")]
        pub fn $factory(bound: impl Into<Value>) -> $name {
            $name::new(bound)
        }
    };
}

comparison! {
    /// `value > bound`.
    GreaterThan, greater_than, "greater_than", |ord| ord.is_gt()
}

comparison! {
    /// `value >= bound`.
    GreaterOrEqual, greater_or_equal, "greater_or_equal", |ord| ord.is_ge()
}

comparison! {
    /// `value < bound`.
    LessThan, less_than, "less_than", |ord| ord.is_lt()
}

comparison! {
    /// `value <= bound`.
    LessOrEqual, less_or_equal, "less_or_equal", |ord| ord.is_le()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::from(1), true)]
    #[case(Value::from(0), false)]
    #[case(Value::from(-1), false)]
    #[case(Value::from(0.5), true)]
    #[case(Value::from(true), true)]
    #[case(Value::from("1"), false)]
    #[case(Value::Null, false)]
    #[case(Value::from(f64::NAN), false)]
    fn test_greater_than_zero(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(greater_than(0).test(&value), expected);
    }

    #[test]
    fn test_boundaries() {
        assert!(greater_or_equal(5).test(&Value::from(5)));
        assert!(!greater_than(5).test(&Value::from(5)));
        assert!(less_or_equal(5).test(&Value::from(5)));
        assert!(!less_than(5).test(&Value::from(5)));
    }

    #[test]
    fn test_large_ints_against_floats() {
        let above = Value::from((1_i64 << 53) + 1);
        let float_bound = (1_i64 << 53) as f64;
        assert!(greater_than(float_bound).test(&above));
        assert!(!less_or_equal(float_bound).test(&above));
        assert!(!crate::validators::equals_to(float_bound).test(&above));
        assert!(crate::validators::equals_to(float_bound).test(&Value::from(1_i64 << 53)));
    }

    #[test]
    fn test_non_numeric_orders() {
        assert!(less_than("b").test(&Value::from("a")));
        assert!(greater_than(Value::list([1, 2])).test(&Value::list([1, 3])));
        assert!(less_than(Value::list([1, 2])).test(&Value::list([1])));
        assert!(!less_than(Value::list([1])).test(&Value::tuple([0])));
        assert!(!greater_than(Value::map([(1, 1)])).test(&Value::map([(2, 2)])));
    }

    #[test]
    fn test_display() {
        assert_eq!(greater_than(0).to_string(), "greater_than(0)");
        assert_eq!(less_or_equal("z").to_string(), "less_or_equal(\"z\")");
    }
}
