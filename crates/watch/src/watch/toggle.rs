//! Validation on/off switches
//!
//! Three tiers decide whether a write is validated:
//!
//! 1. the instance override ([`HostObject::set_active`](super::HostObject::set_active)),
//! 2. the nearest host type override, walking from the object's type up
//!    through its ancestors ([`HostType::set_active`](super::HostType::set_active)),
//! 3. the process-wide default ([`set_global_active`]).
//!
//! The first tier that has an opinion wins. The global default starts out
//! active; [`reset`] restores it and clears every host type override.
//!
//! The switches are process-wide. Flipping them from several threads while
//! writes are in flight is safe but the order in which writes observe the
//! change is not specified; serialize the two when ordering matters.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use super::host::HostType;

static GLOBAL_ACTIVE: AtomicBool = AtomicBool::new(true);

/// Bumped by [`reset`]; overrides set in an older epoch read as unset.
static EPOCH: AtomicU64 = AtomicU64::new(0);

/// Sets the process-wide default.
pub fn set_global_active(active: bool) {
    let previous = GLOBAL_ACTIVE.swap(active, Ordering::SeqCst);
    if previous != active {
        tracing::debug!(active, "global validation toggle changed");
    }
}

/// Returns the process-wide default.
pub fn is_globally_active() -> bool {
    GLOBAL_ACTIVE.load(Ordering::SeqCst)
}

/// Restores the default: globally active, no host type overrides.
///
/// Instance overrides live on the objects themselves and are left alone.
pub fn reset() {
    GLOBAL_ACTIVE.store(true, Ordering::SeqCst);
    EPOCH.fetch_add(1, Ordering::SeqCst);
    tracing::debug!("validation toggles reset");
}

/// Sets the global default for as long as the guard lives.
///
/// ```rust
/// use nebula_watch::watch::toggle;
///
/// {
///     let _off = toggle::scoped_global(false);
///     assert!(!toggle::is_globally_active());
/// }
/// assert!(toggle::is_globally_active());
/// ```
#[must_use = "the previous setting is restored when the guard is dropped"]
pub fn scoped_global(active: bool) -> GlobalGuard {
    let previous = is_globally_active();
    set_global_active(active);
    GlobalGuard { previous }
}

/// Restores the previous global default on drop.
#[derive(Debug)]
pub struct GlobalGuard {
    previous: bool,
}

impl Drop for GlobalGuard {
    fn drop(&mut self) {
        set_global_active(self.previous);
    }
}

/// A host type's own override, stored on the type.
///
/// Packs the epoch it was set in above a two-bit state.
#[derive(Debug, Default)]
pub(crate) struct TypeOverride(AtomicU64);

impl TypeOverride {
    const UNSET: u64 = 0;
    const OFF: u64 = 1;
    const ON: u64 = 2;

    pub(crate) fn set(&self, active: Option<bool>) {
        let state = match active {
            None => Self::UNSET,
            Some(false) => Self::OFF,
            Some(true) => Self::ON,
        };
        self.0.store((EPOCH.load(Ordering::SeqCst) << 2) | state, Ordering::SeqCst);
    }

    pub(crate) fn get(&self) -> Option<bool> {
        let raw = self.0.load(Ordering::SeqCst);
        if raw >> 2 != EPOCH.load(Ordering::SeqCst) {
            return None;
        }
        match raw & 0b11 {
            Self::OFF => Some(false),
            Self::ON => Some(true),
            _ => None,
        }
    }
}

/// Resolves the effective switch for a write on an instance of `host`.
///
/// Standalone cells have no host and skip the middle tier.
pub(crate) fn resolve(instance: Option<bool>, host: Option<&HostType>) -> bool {
    if let Some(active) = instance {
        return active;
    }
    let Some(host) = host else {
        return is_globally_active();
    };
    host.lineage()
        .find_map(HostType::active_override)
        .unwrap_or_else(is_globally_active)
}
