//! # nebula-watch
//!
//! Composable runtime validation for dynamically typed values, enforced on
//! field writes and function calls.
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_watch::prelude::*;
//!
//! // Compose validators with & | ^ ! >> or .and() / .or() / .xor() / .not()
//! let age = instance_of(Kind::Int) & greater_or_equal(0);
//! assert!(age.test(&Value::from(30)));
//! assert!(!age.test(&Value::from("30")));
//!
//! // Enforce them on writes
//! let user = HostType::builder("User").field("age", age).build();
//! let mut alice = user.instantiate();
//! assert!(alice.set("age", 30).is_ok());
//! assert!(alice.set("age", -1).is_err());
//! ```
//!
//! ## Layers
//!
//! - [`foundation`] - [`Value`](foundation::Value), [`Kind`](foundation::Kind)
//!   and the [`Validate`](foundation::Validate) contract
//! - [`validators`] - primitive and structural validators
//! - [`combinators`] - `Not`, `And`, `Or`, `Xor`
//! - [`watch`] - validated fields and the validation toggle
//! - [`interface`] - functions with validated arguments and results
//!
//! ## Creating Validators
//!
//! Use [`Predicate`](validators::Predicate) for one-off checks, the
//! [`validator!`] macro for reusable stateless ones, or implement
//! [`Validate`](foundation::Validate) manually for complex cases.
//!
//! ## Logging
//!
//! Rejected writes, toggle changes and interface mismatches are reported
//! through `tracing` at `debug` level; committed and bypassed writes at
//! `trace`. No subscriber is installed.

// ValidationError and the rejection errors carry the offending value; boxing
// them would add an allocation to every failed check.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod error;
pub mod foundation;
pub mod interface;
pub mod json;
mod macros;
pub mod prelude;
pub mod validators;
pub mod watch;

pub use error::WatchError;
