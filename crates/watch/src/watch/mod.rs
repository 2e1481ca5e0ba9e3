//! Validated fields
//!
//! This module enforces validators on writes:
//!
//! - [`HostType`] / [`HostObject`] - named fields declared on a type, with
//!   inheritance, late binding and write interceptors
//! - [`Watched`] - a single validated slot for plain structs
//! - [`toggle`] - the global / per-type / per-instance validation switch
//! - [`WatchConfig`] - start-up configuration for the switch
//!
//! # Examples
//!
//! ```rust
//! use nebula_watch::prelude::*;
//!
//! let user = HostType::builder("User")
//!     .field("age", instance_of(Kind::Int) & greater_or_equal(0))
//!     .field("email", instance_of(Kind::Str).nullable())
//!     .build();
//!
//! let mut alice = user.instantiate();
//! alice.set("age", 30).unwrap();
//! alice.set("email", Value::Null).unwrap();
//!
//! let error = alice.set("age", -1).unwrap_err();
//! assert_eq!(error.field, "age");
//! assert_eq!(alice.get("age").unwrap(), &Value::from(30));
//! ```

pub mod binding;
pub mod config;
pub mod error;
pub mod host;
pub mod toggle;
pub mod watched;

pub use binding::{FieldBinding, IntoValidatorSpec, ValidatorSpec};
pub use config::WatchConfig;
pub use error::{MissingAttributeError, ValidationRejectedError};
pub use host::{
    Attributes, HostObject, HostType, HostTypeBuilder, HostTypeId, RejectionHandler, WriteInterceptor,
};
pub use watched::Watched;
