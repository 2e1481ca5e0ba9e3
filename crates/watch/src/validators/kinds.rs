//! Ready-made kind checkers
//!
//! Shorthands for the most common [`instance_of`](super::instance_of)
//! targets. `Integer` follows the kind lattice and accepts booleans.

use crate::foundation::Kind;

crate::validator! {
    /// Integers (and booleans).
    pub Integer = "integer";
    rule(value) { value.kind().is_subkind_of(&Kind::Int) }
    fn integer();
}

crate::validator! {
    pub Float = "float";
    rule(value) { value.kind().is_subkind_of(&Kind::Float) }
    fn float();
}

crate::validator! {
    pub Boolean = "boolean";
    rule(value) { value.kind().is_subkind_of(&Kind::Bool) }
    fn boolean();
}

crate::validator! {
    /// Unicode strings.
    pub Text = "text";
    rule(value) { value.kind().is_subkind_of(&Kind::Str) }
    fn text();
}

crate::validator! {
    /// Byte strings.
    pub Binary = "binary";
    rule(value) { value.kind().is_subkind_of(&Kind::Bytes) }
    fn binary();
}

crate::validator! {
    /// Functions and types.
    pub Callable = "callable";
    rule(value) { value.kind().is_subkind_of(&Kind::Callable) }
    fn callable();
}

crate::validator! {
    pub MappingKind = "mapping";
    rule(value) { value.kind().is_subkind_of(&Kind::Mapping) }
    fn mapping_kind();
}

crate::validator! {
    /// Anything that can be iterated, maps and strings included.
    pub IterableKind = "iterable";
    rule(value) { value.kind().is_subkind_of(&Kind::Iterable) }
    fn iterable_kind();
}

crate::validator! {
    pub Null = "null";
    rule(value) { value.is_null() }
    fn null();
}
