//! Dynamic values and their kinds.
//!
//! [`Value`] is the "any value" every validator tests. [`Kind`] classifies
//! values and forms a small single-inheritance lattice, so that
//! `Kind::Bool.is_subkind_of(&Kind::Number)` holds and user classes
//! ([`ClassTag`]) can derive from one another.
//!
//! ```rust
//! use nebula_watch::foundation::{Kind, Value};
//!
//! let v = Value::from(3);
//! assert_eq!(v.kind(), Kind::Int);
//! assert!(v.kind().is_subkind_of(&Kind::Number));
//! assert!(Value::from(true) == Value::from(1));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use indexmap::IndexMap;
use parking_lot::Mutex;

use crate::interface::InterfacedFunction;

// ============================================================================
// CLASS TAGS
// ============================================================================

static NEXT_CLASS_ID: AtomicU64 = AtomicU64::new(1);

/// A nominal, user-defined class with single inheritance.
///
/// Two tags are equal only if one was cloned from the other; creating two
/// classes with the same name yields distinct types.
#[derive(Clone)]
pub struct ClassTag(Arc<ClassInfo>);

struct ClassInfo {
    id: u64,
    name: String,
    parent: Option<ClassTag>,
}

impl ClassTag {
    /// Creates a root class.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_parent(name, None)
    }

    /// Creates a subclass of `self`.
    #[must_use]
    pub fn derive(&self, name: impl Into<String>) -> Self {
        Self::with_parent(name, Some(self.clone()))
    }

    fn with_parent(name: impl Into<String>, parent: Option<ClassTag>) -> Self {
        Self(Arc::new(ClassInfo {
            id: NEXT_CLASS_ID.fetch_add(1, AtomicOrdering::Relaxed),
            name: name.into(),
            parent,
        }))
    }

    /// Returns the class name.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Returns the direct parent class, if any.
    pub fn parent(&self) -> Option<&ClassTag> {
        self.0.parent.as_ref()
    }

    /// Returns true if `self` is `other` or derives from it.
    pub fn is_subclass_of(&self, other: &ClassTag) -> bool {
        let mut current = Some(self);
        while let Some(class) = current {
            if class == other {
                return true;
            }
            current = class.parent();
        }
        false
    }
}

impl PartialEq for ClassTag {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for ClassTag {}

impl Hash for ClassTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

impl fmt::Debug for ClassTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassTag({})", self.0.name)
    }
}

// ============================================================================
// KINDS
// ============================================================================

/// The kind (runtime type) of a [`Value`].
///
/// Concrete kinds are what [`Value::kind`] returns; abstract kinds
/// (`Any`, `Number`, `Sequence`, `Iterable`, `Mapping`, `Callable`, `Object`)
/// only appear as validation targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Kind {
    Any,
    Null,
    Bool,
    Int,
    Float,
    Number,
    Str,
    Bytes,
    List,
    Tuple,
    Sequence,
    Map,
    Mapping,
    Iterable,
    Stream,
    Function,
    Callable,
    Type,
    Object,
    Class(ClassTag),
}

impl Kind {
    /// Returns a descriptive name.
    pub fn name(&self) -> &str {
        match self {
            Self::Any => "any",
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Number => "number",
            Self::Str => "str",
            Self::Bytes => "bytes",
            Self::List => "list",
            Self::Tuple => "tuple",
            Self::Sequence => "sequence",
            Self::Map => "map",
            Self::Mapping => "mapping",
            Self::Iterable => "iterable",
            Self::Stream => "stream",
            Self::Function => "function",
            Self::Callable => "callable",
            Self::Type => "type",
            Self::Object => "object",
            Self::Class(class) => class.name(),
        }
    }

    /// Returns the direct super-kind; `None` only for `Any`.
    pub fn parent(&self) -> Option<Kind> {
        let parent = match self {
            Self::Any => return None,
            Self::Null | Self::Number | Self::Iterable | Self::Callable | Self::Object => Self::Any,
            Self::Bool => Self::Int,
            Self::Int | Self::Float => Self::Number,
            Self::Str | Self::Bytes | Self::List | Self::Tuple => Self::Sequence,
            Self::Sequence | Self::Mapping | Self::Stream => Self::Iterable,
            Self::Map => Self::Mapping,
            Self::Function | Self::Type => Self::Callable,
            Self::Class(class) => class.parent().cloned().map_or(Self::Object, Self::Class),
        };
        Some(parent)
    }

    /// Returns true if `self` equals `other` or is one of its descendants.
    pub fn is_subkind_of(&self, other: &Kind) -> bool {
        if self == other || *other == Self::Any {
            return true;
        }
        let mut current = self.parent();
        while let Some(kind) = current {
            if kind == *other {
                return true;
            }
            current = kind.parent();
        }
        false
    }

    /// Returns true for kinds no value reports as its own.
    pub const fn is_abstract(&self) -> bool {
        matches!(
            self,
            Self::Any
                | Self::Number
                | Self::Sequence
                | Self::Mapping
                | Self::Iterable
                | Self::Callable
                | Self::Object
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// MAP
// ============================================================================

/// An ordered associative container keyed by arbitrary values.
///
/// Inserting a key equal to an existing one replaces its value in place.
/// Keys hash through the numeric tower, so `1`, `1.0` and `true` are the
/// same key.
#[derive(Debug, Clone, Default)]
pub struct Map {
    entries: IndexMap<MapKey, Value>,
}

/// A [`Value`] used as a map key.
///
/// `Value` is only `PartialEq` because of NaN; a NaN key never matches a
/// lookup, itself included.
#[derive(Debug, Clone)]
struct MapKey(Value);

impl PartialEq for MapKey {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for MapKey {}

impl Hash for MapKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl indexmap::Equivalent<MapKey> for Value {
    fn equivalent(&self, key: &MapKey) -> bool {
        *self == key.0
    }
}

impl Map {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a pair, returning the previous value for an equal key.
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(MapKey(key.into()), value.into())
    }

    /// Looks up the value paired with `key`.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Iterates pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (&k.0, v))
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.keys().map(|k| &k.0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

// ============================================================================
// OBJECT
// ============================================================================

/// An instance of a [`ClassTag`] with named attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    class: ClassTag,
    attributes: IndexMap<String, Value>,
}

impl Object {
    /// Creates an instance without attributes.
    pub fn new(class: &ClassTag) -> Self {
        Self {
            class: class.clone(),
            attributes: IndexMap::new(),
        }
    }

    /// Adds an attribute.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn class(&self) -> &ClassTag {
        &self.class
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn has(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }
}

// ============================================================================
// STREAM
// ============================================================================

type BoxedIter = Box<dyn Iterator<Item = Value> + Send>;

/// A single-pass lazy sequence.
///
/// Clones share the same underlying iterator: validating a stream consumes
/// the items it looks at, and every clone observes that.
#[derive(Clone)]
pub struct Stream {
    inner: Arc<Mutex<BoxedIter>>,
}

impl Stream {
    /// Wraps an iterator.
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: Send + 'static,
    {
        Self {
            inner: Arc::new(Mutex::new(Box::new(items.into_iter()))),
        }
    }

    /// Pulls the next item, if any.
    pub fn next_item(&self) -> Option<Value> {
        self.inner.lock().next()
    }

    /// Collects whatever items are left.
    pub fn drain(&self) -> Vec<Value> {
        std::iter::from_fn(|| self.next_item()).collect()
    }

    /// Returns true if both handles share one iterator.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Stream(..)")
    }
}

// ============================================================================
// VALUE
// ============================================================================

/// Any value a validator can be asked about.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The absence sentinel.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Map(Map),
    /// A type used as a value, e.g. the argument of `SubclassOf`.
    Type(Kind),
    Object(Object),
    Stream(Stream),
    Function(Arc<InterfacedFunction>),
}

/// Numeric view shared by `Bool`, `Int` and `Float`.
#[derive(Clone, Copy)]
enum Numeric {
    Int(i64),
    Float(f64),
}

/// `i64::MAX + 1`, the first float above every `i64`.
const I64_END: f64 = 9_223_372_036_854_775_808.0;

impl Numeric {
    fn partial_cmp(self, other: Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(&b)),
            (Self::Int(a), Self::Float(b)) => cmp_int_float(a, b),
            (Self::Float(a), Self::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(&b),
        }
    }

    /// Feeds the hasher so that numerically equal values collide.
    fn hash<H: Hasher>(self, state: &mut H) {
        match self {
            Self::Int(i) => i.hash(state),
            Self::Float(f) if f.fract() == 0.0 && (-I64_END..I64_END).contains(&f) => {
                (f as i64).hash(state);
            }
            Self::Float(f) => f.to_bits().hash(state),
        }
    }
}

/// Compares an integer with a float without rounding either.
fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    if f >= I64_END {
        return Some(Ordering::Less);
    }
    if f < -I64_END {
        return Some(Ordering::Greater);
    }
    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(f - whole)),
        ordering => Some(ordering),
    }
}

impl Value {
    /// Builds a list.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Builds a tuple.
    pub fn tuple<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Builds a map from pairs.
    pub fn map<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Self::Map(pairs.into_iter().collect())
    }

    /// Builds a byte string.
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(bytes.into())
    }

    /// Wraps an iterator as a single-pass stream.
    pub fn stream<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: Send + 'static,
    {
        Self::Stream(Stream::new(items))
    }

    /// Returns the concrete kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Self::Null => Kind::Null,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Float(_) => Kind::Float,
            Self::Str(_) => Kind::Str,
            Self::Bytes(_) => Kind::Bytes,
            Self::List(_) => Kind::List,
            Self::Tuple(_) => Kind::Tuple,
            Self::Map(_) => Kind::Map,
            Self::Type(_) => Kind::Type,
            Self::Object(object) => Kind::Class(object.class().clone()),
            Self::Stream(_) => Kind::Stream,
            Self::Function(_) => Kind::Function,
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    fn numeric(&self) -> Option<Numeric> {
        match self {
            Self::Bool(b) => Some(Numeric::Int(i64::from(*b))),
            Self::Int(i) => Some(Numeric::Int(*i)),
            Self::Float(f) => Some(Numeric::Float(*f)),
            _ => None,
        }
    }

    /// Number of items for sized values.
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Str(s) => Some(s.chars().count()),
            Self::Bytes(b) => Some(b.len()),
            Self::List(items) | Self::Tuple(items) => Some(items.len()),
            Self::Map(map) => Some(map.len()),
            _ => None,
        }
    }

    /// Lists, maps, and tuples containing them cannot be used as map keys.
    pub fn is_hashable(&self) -> bool {
        match self {
            Self::List(_) | Self::Map(_) => false,
            Self::Tuple(items) => items.iter().all(Self::is_hashable),
            _ => true,
        }
    }

    /// Returns true if the value exposes the named member.
    ///
    /// Built-in members: `eq`, `hash`, `len`, `iter`, `cmp`, `add`, `call`.
    /// Objects additionally expose their attributes.
    pub fn has_member(&self, name: &str) -> bool {
        if let Self::Object(object) = self {
            if object.has(name) {
                return true;
            }
        }
        match name {
            "eq" => true,
            "hash" => self.is_hashable(),
            "len" => self.len().is_some(),
            "iter" => self.kind().is_subkind_of(&Kind::Iterable),
            "cmp" | "add" => matches!(
                self,
                Self::Bool(_)
                    | Self::Int(_)
                    | Self::Float(_)
                    | Self::Str(_)
                    | Self::Bytes(_)
                    | Self::List(_)
                    | Self::Tuple(_)
            ),
            "call" => matches!(self, Self::Function(_) | Self::Type(_)),
            _ => false,
        }
    }

    /// Checks `pred` against every item, stopping at the first `false`.
    ///
    /// Returns `None` for non-iterable values. Maps yield their keys, strings
    /// yield one-character strings, bytes yield integers. Streams are
    /// consumed up to and including the first failing item.
    pub fn all_items(&self, mut pred: impl FnMut(&Value) -> bool) -> Option<bool> {
        let holds = match self {
            Self::List(items) | Self::Tuple(items) => items.iter().all(pred),
            Self::Map(map) => map.keys().all(pred),
            Self::Str(s) => s.chars().all(|c| pred(&Self::Str(c.to_string()))),
            Self::Bytes(bytes) => bytes.iter().all(|b| pred(&Self::Int(i64::from(*b)))),
            Self::Stream(stream) => loop {
                match stream.next_item() {
                    Some(item) if pred(&item) => {}
                    Some(_) => break false,
                    None => break true,
                }
            },
            _ => return None,
        };
        Some(holds)
    }

    /// Checks `pred` against every key/value pair of a map.
    ///
    /// Returns `None` for anything that is not a map.
    pub fn all_pairs(&self, mut pred: impl FnMut(&Value, &Value) -> bool) -> Option<bool> {
        match self {
            Self::Map(map) => Some(map.iter().all(|(k, v)| pred(k, v))),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        if let (Some(a), Some(b)) = (self.numeric(), other.numeric()) {
            return a.partial_cmp(b) == Some(Ordering::Equal);
        }
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::List(a), Self::List(b)) | (Self::Tuple(a), Self::Tuple(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Type(a), Self::Type(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Stream(a), Self::Stream(b)) => a.ptr_eq(b),
            (Self::Function(a), Self::Function(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl PartialOrd for Value {
    /// Orders numbers (across bool/int/float), strings, bytes, and lists or
    /// tuples lexicographically. Everything else is incomparable.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if let (Some(a), Some(b)) = (self.numeric(), other.numeric()) {
            return a.partial_cmp(b);
        }
        match (self, other) {
            (Self::Str(a), Self::Str(b)) => Some(a.cmp(b)),
            (Self::Bytes(a), Self::Bytes(b)) => Some(a.cmp(b)),
            (Self::List(a), Self::List(b)) | (Self::Tuple(a), Self::Tuple(b)) => {
                for (x, y) in a.iter().zip(b) {
                    match x.partial_cmp(y)? {
                        Ordering::Equal => {}
                        ordering => return Some(ordering),
                    }
                }
                Some(a.len().cmp(&b.len()))
            }
            _ => None,
        }
    }
}

impl Hash for Value {
    /// Consistent with `==`: numbers hash by numeric value, maps by size,
    /// and objects, streams and functions by identity.
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Bool(b) => {
                state.write_u8(0);
                Numeric::Int(i64::from(*b)).hash(state);
            }
            Self::Int(i) => {
                state.write_u8(0);
                Numeric::Int(*i).hash(state);
            }
            Self::Float(f) => {
                state.write_u8(0);
                Numeric::Float(*f).hash(state);
            }
            Self::Null => state.write_u8(1),
            Self::Str(s) => {
                state.write_u8(2);
                s.hash(state);
            }
            Self::Bytes(b) => {
                state.write_u8(3);
                b.hash(state);
            }
            Self::List(items) => {
                state.write_u8(4);
                items.hash(state);
            }
            Self::Tuple(items) => {
                state.write_u8(5);
                items.hash(state);
            }
            Self::Map(map) => {
                state.write_u8(6);
                map.len().hash(state);
            }
            Self::Type(kind) => {
                state.write_u8(7);
                kind.hash(state);
            }
            Self::Object(object) => {
                state.write_u8(8);
                object.class().hash(state);
            }
            Self::Stream(stream) => {
                state.write_u8(9);
                std::ptr::hash(Arc::as_ptr(&stream.inner), state);
            }
            Self::Function(function) => {
                state.write_u8(10);
                std::ptr::hash(Arc::as_ptr(function), state);
            }
        }
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Bytes(b) => write!(f, "bytes{b:?}"),
            Self::List(items) => {
                f.write_str("[")?;
                write_items(f, items)?;
                f.write_str("]")
            }
            Self::Tuple(items) => {
                f.write_str("(")?;
                write_items(f, items)?;
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Self::Map(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
            Self::Type(kind) => write!(f, "<type {kind}>"),
            Self::Object(object) => write!(f, "<{} object>", object.class().name()),
            Self::Stream(_) => f.write_str("<stream>"),
            Self::Function(function) => write!(f, "<function {}>", function.name()),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        i64::try_from(v).map_or(Self::Float(v as f64), Self::Int)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Kind> for Value {
    fn from(v: Kind) -> Self {
        Self::Type(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Map(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl From<Stream> for Value {
    fn from(v: Stream) -> Self {
        Self::Stream(v)
    }
}

impl From<Arc<InterfacedFunction>> for Value {
    fn from(v: Arc<InterfacedFunction>) -> Self {
        Self::Function(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::list(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

// ============================================================================
// TESTS
// ============================================================================
