//! Combinators for composing validators
//!
//! - [`Not`] - inverts one child
//! - [`And`] - every child holds, short-circuits on the first failure
//! - [`Or`] - some child holds, short-circuits on the first success
//! - [`Xor`] - an odd number of children hold, evaluates all of them
//!
//! Every combinator can be built three equivalent ways:
//!
//! ```rust
//! use nebula_watch::prelude::*;
//!
//! let explicit = And::new([instance_of(Kind::Int).boxed(), greater_than(0).boxed()]).unwrap();
//! let method = instance_of(Kind::Int).and(greater_than(0));
//! let operator = instance_of(Kind::Int) & greater_than(0);
//!
//! assert_eq!(format!("{explicit:?}"), format!("{method:?}"));
//! assert_eq!(format!("{explicit:?}"), format!("{operator:?}"));
//! ```

pub mod and;
pub mod not;
pub mod ops;
pub mod or;
pub mod xor;

use std::fmt;

use crate::foundation::Validator;

pub use and::{All, And, and_of};
pub use not::{Not, negate};
pub use ops::mapping_of;
pub use or::{AnyOf, Or, or_of};
pub use xor::{Choose, Xor, xor_of};

/// Writes `(a op b op c)`, or just `a` for a single child.
fn write_infix(f: &mut fmt::Formatter<'_>, children: &[Validator], op: &str) -> fmt::Result {
    if let [only] = children {
        return write!(f, "{only}");
    }
    f.write_str("(")?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            f.write_str(op)?;
        }
        write!(f, "{child}")?;
    }
    f.write_str(")")
}
