//! Built-in validators
//!
//! This module provides the primitive and structural validators every tree
//! is built from.
//!
//! # Categories
//!
//! - **Constants**: [`AlwaysTrue`] / [`Whatever`], [`AlwaysFalse`] / [`Nothing`]
//! - **Types**: [`InstanceOf`], [`SubclassOf`], kind checkers ([`Integer`], [`Text`], ...)
//! - **Members**: [`HasAttr`]
//! - **Values**: [`EqualsTo`] / [`Just`], ordering comparisons, [`Nullable`]
//! - **Structure**: [`Container`], [`Mapping`]
//! - **Custom**: [`Predicate`]
//!
//! # Examples
//!
//! ```rust
//! use nebula_watch::prelude::*;
//!
//! // Scalars
//! let percentage = instance_of(Kind::Number) & greater_or_equal(0) & less_or_equal(100);
//!
//! // Collections
//! let scores = container(percentage.clone());
//! assert!(scores.test(&Value::list([10, 55, 100])));
//!
//! // Mappings
//! let by_name = instance_of(Kind::Str) >> percentage;
//! assert!(by_name.test(&Value::map([("alice", 90.5)])));
//! ```

pub mod attr;
pub mod comparison;
pub mod constant;
pub mod container;
pub mod equality;
pub mod kinds;
pub mod mapping;
pub mod nullable;
pub mod predicate;
pub mod types;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use attr::HasAttr;
pub use comparison::{
    GreaterOrEqual, GreaterThan, LessOrEqual, LessThan, greater_or_equal, greater_than,
    less_or_equal, less_than,
};
pub use constant::{AlwaysFalse, AlwaysTrue, Nothing, Whatever, always_false, always_true};
pub use container::{Container, container};
pub use equality::{EqualsTo, Just, equals_to};
pub use kinds::{
    Binary, Boolean, Callable, Float, Integer, IterableKind, MappingKind, Null, Text, binary,
    boolean, callable, float, integer, iterable_kind, mapping_kind, null, text,
};
pub use mapping::Mapping;
pub use nullable::Nullable;
pub use predicate::Predicate;
pub use types::{InstanceOf, SubclassOf, instance_of};
