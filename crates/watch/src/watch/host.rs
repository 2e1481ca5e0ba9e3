//! Host types and the objects built from them
//!
//! A [`HostType`] declares which fields are validated; a [`HostObject`] is
//! an instance holding the committed values. Every write goes through
//! [`HostObject::set`]:
//!
//! 1. every write interceptor of the type and its ancestors fires, ancestors
//!    first, in registration order;
//! 2. if the field is bound and validation is active (see [`toggle`](super::toggle)),
//!    the bound validator decides;
//! 3. the value is committed, or the write is rejected and the object is left
//!    exactly as it was.
//!
//! Names without a binding are plain attributes and are never validated.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;
use parking_lot::RwLock;

use super::binding::{FieldBinding, IntoValidatorSpec};
use super::error::{MissingAttributeError, ValidationRejectedError};
use super::toggle::{self, TypeOverride};
use crate::foundation::Value;

// ============================================================================
// IDENTITY
// ============================================================================

/// Process-unique identity of a host type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HostTypeId(u64);

impl HostTypeId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

// ============================================================================
// ATTRIBUTES
// ============================================================================

/// The committed attribute values of an object, in first-write order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(IndexMap<String, Value>);

impl Attributes {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Stores a value without any validation.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ============================================================================
// WRITE INTERCEPTOR
// ============================================================================

/// Bookkeeping that runs on every write attempt, before validation.
///
/// Interceptors see the attempted value whether or not it is later
/// rejected, and anything they store stays stored either way.
///
/// Closures of the right shape implement this trait:
///
/// ```rust
/// use nebula_watch::prelude::*;
///
/// let audited = HostType::builder("Audited")
///     .interceptor(|attrs: &mut Attributes, field: &str, _: &Value| {
///         attrs.insert("last_field", field);
///     })
///     .field("n", instance_of(Kind::Int))
///     .build();
///
/// let mut object = audited.instantiate();
/// assert!(object.set("n", "nope").is_err());
/// assert_eq!(object.get("last_field").unwrap(), &Value::from("n"));
/// ```
pub trait WriteInterceptor: Send + Sync {
    fn before_write(&self, attributes: &mut Attributes, field: &str, value: &Value);
}

impl<F> WriteInterceptor for F
where
    F: Fn(&mut Attributes, &str, &Value) + Send + Sync,
{
    fn before_write(&self, attributes: &mut Attributes, field: &str, value: &Value) {
        self(attributes, field, value);
    }
}

// ============================================================================
// REJECTION HANDLER
// ============================================================================

/// Decides what a refused write turns into.
///
/// Returning `Ok(())` drops the write silently: the field keeps its old
/// value and [`HostObject::set`] succeeds. Returning an error makes `set`
/// fail with it. Without a handler the rejection is returned as is.
///
/// ```rust
/// use nebula_watch::prelude::*;
///
/// let forgiving = HostType::builder("Forgiving")
///     .field("n", instance_of(Kind::Int))
///     .on_rejection(|_: ValidationRejectedError| Ok(()))
///     .build();
///
/// let mut object = forgiving.instantiate();
/// assert!(object.set("n", "nope").is_ok());
/// assert!(!object.is_set("n"));
/// ```
pub trait RejectionHandler: Send + Sync {
    fn rejected(&self, error: ValidationRejectedError) -> Result<(), ValidationRejectedError>;
}

impl<F> RejectionHandler for F
where
    F: Fn(ValidationRejectedError) -> Result<(), ValidationRejectedError> + Send + Sync,
{
    fn rejected(&self, error: ValidationRejectedError) -> Result<(), ValidationRejectedError> {
        self(error)
    }
}

// ============================================================================
// HOST TYPE
// ============================================================================

struct HostTypeInner {
    id: HostTypeId,
    name: String,
    parent: Option<HostType>,
    fields: RwLock<IndexMap<String, Arc<FieldBinding>>>,
    interceptors: RwLock<Vec<Arc<dyn WriteInterceptor>>>,
    on_rejection: RwLock<Option<Arc<dyn RejectionHandler>>>,
    active: TypeOverride,
}

/// A type whose instances have validated fields.
///
/// `HostType` is a cheap handle; clones refer to the same type. Fields bound
/// after instances exist apply to those instances from the next write on.
///
/// # Examples
///
/// ```rust
/// use nebula_watch::prelude::*;
///
/// let point = HostType::builder("Point")
///     .field("x", instance_of(Kind::Int))
///     .field("y", instance_of(Kind::Int))
///     .build();
///
/// let mut p = point.instantiate();
/// p.set("x", 10).unwrap();
/// assert!(p.set("y", "ten").is_err());
/// assert_eq!(p.get("x").unwrap(), &Value::from(10));
/// assert!(p.get("y").is_err());
/// ```
#[derive(Clone)]
pub struct HostType(Arc<HostTypeInner>);

impl HostType {
    /// Starts a root host type.
    pub fn builder(name: impl Into<String>) -> HostTypeBuilder {
        HostTypeBuilder::new(name.into(), None)
    }

    /// Starts a sub-type that inherits this type's fields, interceptors and
    /// toggle override.
    pub fn subtype(&self, name: impl Into<String>) -> HostTypeBuilder {
        HostTypeBuilder::new(name.into(), Some(self.clone()))
    }

    pub fn id(&self) -> HostTypeId {
        self.0.id
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn parent(&self) -> Option<&HostType> {
        self.0.parent.as_ref()
    }

    /// This type followed by its ancestors, nearest first.
    pub fn lineage(&self) -> impl Iterator<Item = &HostType> {
        std::iter::successors(Some(self), |ty| ty.parent())
    }

    pub fn is_subtype_of(&self, other: &HostType) -> bool {
        self.lineage().any(|ty| ty == other)
    }

    /// Binds (or rebinds) a field on this type.
    ///
    /// Existing instances of this type and its sub-types are affected.
    pub fn bind(&self, name: impl Into<String>, spec: impl IntoValidatorSpec) {
        let binding = FieldBinding::new(name, spec);
        tracing::debug!(
            host = self.name(),
            field = binding.name(),
            validator = %binding.validator(),
            "field bound"
        );
        self.0
            .fields
            .write()
            .insert(binding.name().to_owned(), Arc::new(binding));
    }

    /// The binding in effect for `name`: this type's own, else the nearest
    /// ancestor's.
    pub fn binding(&self, name: &str) -> Option<Arc<FieldBinding>> {
        self.lineage()
            .find_map(|ty| ty.0.fields.read().get(name).cloned())
    }

    /// Names of every bound field, inherited ones included, ancestors first.
    pub fn field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        let chain: Vec<&HostType> = self.lineage().collect();
        for ty in chain.into_iter().rev() {
            for name in ty.0.fields.read().keys() {
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
        }
        names
    }

    /// Adds a write interceptor to this type.
    pub fn add_interceptor(&self, interceptor: impl WriteInterceptor + 'static) {
        self.0.interceptors.write().push(Arc::new(interceptor));
    }

    /// Interceptors that fire for writes on this type, ancestors first.
    fn interceptors(&self) -> Vec<Arc<dyn WriteInterceptor>> {
        let chain: Vec<&HostType> = self.lineage().collect();
        chain
            .into_iter()
            .rev()
            .flat_map(|ty| ty.0.interceptors.read().clone())
            .collect()
    }

    /// Installs the handler for refused writes on this type and the
    /// sub-types that have none of their own.
    pub fn set_rejection_handler(&self, handler: impl RejectionHandler + 'static) {
        *self.0.on_rejection.write() = Some(Arc::new(handler));
    }

    /// The nearest rejection handler in this type's lineage.
    fn rejection_handler(&self) -> Option<Arc<dyn RejectionHandler>> {
        self.lineage().find_map(|ty| ty.0.on_rejection.read().clone())
    }

    /// Sets (`Some`) or clears (`None`) this type's validation override.
    ///
    /// Sub-types without an override of their own follow it.
    pub fn set_active(&self, active: Option<bool>) {
        self.0.active.set(active);
        tracing::debug!(host = self.name(), ?active, "host type validation toggle changed");
    }

    /// This type's own override, ignoring ancestors.
    pub fn active_override(&self) -> Option<bool> {
        self.0.active.get()
    }

    /// Whether a write on an instance without its own override is validated.
    pub fn is_active(&self) -> bool {
        toggle::resolve(None, Some(self))
    }

    /// Creates an instance with every field unset.
    pub fn instantiate(&self) -> HostObject {
        HostObject {
            host: self.clone(),
            attributes: Attributes::default(),
            active: None,
        }
    }
}

impl PartialEq for HostType {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for HostType {}

impl fmt::Debug for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostType")
            .field("id", &self.0.id)
            .field("name", &self.0.name)
            .field("parent", &self.parent().map(HostType::name))
            .field("fields", &self.0.fields.read().keys().collect::<Vec<_>>())
            .field("active", &self.active_override())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Builder for [`HostType`].
pub struct HostTypeBuilder {
    name: String,
    parent: Option<HostType>,
    fields: IndexMap<String, Arc<FieldBinding>>,
    interceptors: Vec<Arc<dyn WriteInterceptor>>,
    on_rejection: Option<Arc<dyn RejectionHandler>>,
}

impl HostTypeBuilder {
    fn new(name: String, parent: Option<HostType>) -> Self {
        Self {
            name,
            parent,
            fields: IndexMap::new(),
            interceptors: Vec::new(),
            on_rejection: None,
        }
    }

    /// Declares a validated field. Declaring the same name twice keeps the
    /// last declaration.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, spec: impl IntoValidatorSpec) -> Self {
        let binding = FieldBinding::new(name, spec);
        self.fields.insert(binding.name().to_owned(), Arc::new(binding));
        self
    }

    #[must_use]
    pub fn interceptor(mut self, interceptor: impl WriteInterceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    /// See [`RejectionHandler`].
    #[must_use]
    pub fn on_rejection(mut self, handler: impl RejectionHandler + 'static) -> Self {
        self.on_rejection = Some(Arc::new(handler));
        self
    }

    pub fn build(self) -> HostType {
        let host = HostType(Arc::new(HostTypeInner {
            id: HostTypeId::next(),
            name: self.name,
            parent: self.parent,
            fields: RwLock::new(self.fields),
            interceptors: RwLock::new(self.interceptors),
            on_rejection: RwLock::new(self.on_rejection),
            active: TypeOverride::default(),
        }));
        tracing::trace!(host = host.name(), id = ?host.id(), "host type created");
        host
    }
}

impl fmt::Debug for HostTypeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostTypeBuilder")
            .field("name", &self.name)
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// HOST OBJECT
// ============================================================================

/// An instance of a [`HostType`].
///
/// Each bound field is either unset (reads fail with
/// [`MissingAttributeError`]) or holds the last committed value.
#[derive(Debug, Clone)]
pub struct HostObject {
    host: HostType,
    attributes: Attributes,
    active: Option<bool>,
}

impl HostObject {
    pub fn host(&self) -> &HostType {
        &self.host
    }

    /// Reads a field or plain attribute.
    ///
    /// # Errors
    ///
    /// [`MissingAttributeError`] if nothing was ever committed under `name`.
    /// Disabling validation does not change this.
    pub fn get(&self, name: &str) -> Result<&Value, MissingAttributeError> {
        self.attributes.get(name).ok_or_else(|| MissingAttributeError {
            host: self.host.name().to_owned(),
            field: name.to_owned(),
        })
    }

    /// Writes a field or plain attribute.
    ///
    /// # Errors
    ///
    /// [`ValidationRejectedError`] if `name` is bound, validation is active
    /// and the value does not satisfy the bound validator. The attribute
    /// keeps its previous value (or stays unset); interceptor bookkeeping is
    /// kept. A [`RejectionHandler`] on the type may swallow or replace the
    /// error.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), ValidationRejectedError> {
        let value = value.into();

        for interceptor in self.host.interceptors() {
            interceptor.before_write(&mut self.attributes, name, &value);
        }

        if let Some(binding) = self.host.binding(name) {
            if toggle::resolve(self.active, Some(&self.host)) {
                if !binding.accepts(&value) {
                    tracing::debug!(
                        host = self.host.name(),
                        field = name,
                        validator = %binding.validator(),
                        "write rejected"
                    );
                    let error = ValidationRejectedError {
                        host: self.host.name().to_owned(),
                        field: name.to_owned(),
                        value,
                        validator: binding.validator().clone(),
                    };
                    return match self.host.rejection_handler() {
                        Some(handler) => handler.rejected(error),
                        None => Err(error),
                    };
                }
            } else {
                tracing::trace!(host = self.host.name(), field = name, "validation bypassed");
            }
        }

        tracing::trace!(host = self.host.name(), field = name, "write committed");
        self.attributes.insert(name, value);
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }

    /// Sets (`Some`) or clears (`None`) this instance's validation override.
    pub fn set_active(&mut self, active: Option<bool>) {
        tracing::debug!(host = self.host.name(), ?active, "instance validation toggle changed");
        self.active = active;
    }

    pub fn active_override(&self) -> Option<bool> {
        self.active
    }

    /// Whether the next write will be validated.
    pub fn is_active(&self) -> bool {
        toggle::resolve(self.active, Some(&self.host))
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

// ============================================================================
// TESTS
// ============================================================================
