//! Macros for creating validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`] - Create a unit validator (struct + `Validate` + `Display` + factory fn)
//! - [`impl_operators!`] - Give validator types the `& | ^ ! >>` operators
//! - [`all_of!`] - AND over several validators
//! - [`any_of!`] - OR over several validators
//! - [`one_of!`] - XOR (parity) over several validators
//!
//! # Examples
//!
//! ```rust
//! use nebula_watch::validator;
//! use nebula_watch::foundation::{Validate, Value};
//!
//! validator! {
//!     /// Non-empty strings.
//!     pub NonEmpty = "non_empty";
//!     rule(value) { value.as_str().is_some_and(|s| !s.is_empty()) }
//!     fn non_empty();
//! }
//!
//! assert!(non_empty().test(&Value::from("x")));
//! assert!(!non_empty().test(&Value::from("")));
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete unit validator: struct definition, `Validate` and
/// `Display` implementations, operators, and optionally a factory function.
///
/// `#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]` is always
/// applied. The string literal is both the error code and the display form.
#[macro_export]
macro_rules! validator {
    // ── Variant 1a: unit validator + factory fn ──────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident = $code:literal;
        rule($inp:ident) $rule:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name = $code;
            rule($inp) $rule
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: unit validator, no factory ───────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident = $code:literal;
        rule($inp:ident) $rule:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            #[inline]
            fn test(&self, $inp: &$crate::foundation::Value) -> bool $rule

            fn code(&self) -> &'static str {
                $code
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($code)
            }
        }

        $crate::impl_operators!($name);
    };
}

// ============================================================================
// OPERATORS
// ============================================================================

/// Implements `&`, `|`, `^`, `!` and `>>` for validator types.
///
/// The right-hand side may be any [`IntoValidator`](crate::foundation::IntoValidator).
#[macro_export]
macro_rules! impl_operators {
    ($($ty:ty),+ $(,)?) => {$(
        impl<R: $crate::foundation::IntoValidator> ::std::ops::BitAnd<R> for $ty {
            type Output = $crate::combinators::And;

            fn bitand(self, rhs: R) -> Self::Output {
                $crate::combinators::And::pair(self, rhs)
            }
        }

        impl<R: $crate::foundation::IntoValidator> ::std::ops::BitOr<R> for $ty {
            type Output = $crate::combinators::Or;

            fn bitor(self, rhs: R) -> Self::Output {
                $crate::combinators::Or::pair(self, rhs)
            }
        }

        impl<R: $crate::foundation::IntoValidator> ::std::ops::BitXor<R> for $ty {
            type Output = $crate::combinators::Xor;

            fn bitxor(self, rhs: R) -> Self::Output {
                $crate::combinators::Xor::pair(self, rhs)
            }
        }

        impl ::std::ops::Not for $ty {
            type Output = $crate::combinators::Not;

            fn not(self) -> Self::Output {
                $crate::combinators::Not::new(self)
            }
        }

        impl<R: $crate::foundation::IntoValidator> ::std::ops::Shr<R> for $ty {
            type Output = $crate::validators::Mapping;

            fn shr(self, rhs: R) -> Self::Output {
                $crate::validators::Mapping::new(self, rhs)
            }
        }
    )+};
}

// ============================================================================
// N-ARY MACROS
// ============================================================================

/// Composes validators with AND into a single flat node.
///
/// ```rust
/// use nebula_watch::prelude::*;
///
/// let validator = all_of![instance_of(Kind::Int), greater_than(0), less_than(10)];
/// assert!(validator.test(&Value::from(5)));
/// ```
#[macro_export]
macro_rules! all_of {
    ($($v:expr),+ $(,)?) => {
        $crate::combinators::And::from_validators(::std::vec![
            $($crate::foundation::IntoValidator::into_validator($v)),+
        ])
    };
}

/// Composes validators with OR into a single flat node.
#[macro_export]
macro_rules! any_of {
    ($($v:expr),+ $(,)?) => {
        $crate::combinators::Or::from_validators(::std::vec![
            $($crate::foundation::IntoValidator::into_validator($v)),+
        ])
    };
}

/// Composes validators with XOR (odd-count parity) into a single flat node.
#[macro_export]
macro_rules! one_of {
    ($($v:expr),+ $(,)?) => {
        $crate::combinators::Xor::from_validators(::std::vec![
            $($crate::foundation::IntoValidator::into_validator($v)),+
        ])
    };
}

// ============================================================================
// TESTS
// ============================================================================
