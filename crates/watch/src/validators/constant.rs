//! Constant validators
//!
//! [`AlwaysTrue`] and [`AlwaysFalse`] fill every optional validator slot
//! (container items, mapping keys and values, interface parameters).

crate::validator! {
    /// Holds for every value.
    pub AlwaysTrue = "whatever";
    rule(_value) { true }
    fn always_true();
}

crate::validator! {
    /// Holds for no value.
    pub AlwaysFalse = "nothing";
    rule(_value) { false }
    fn always_false();
}

/// Reads well as a default: "the items may be whatever".
pub type Whatever = AlwaysTrue;

pub type Nothing = AlwaysFalse;
