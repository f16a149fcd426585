//! Instance-counting element fixtures.
//!
//! - [`Tally`]: shared counters for live instances and clones.
//! - [`Tracked`]: an element bound to a tally; default values are
//!   untracked so containers can fill spare slots without skewing the
//!   counts.

use std::cmp::Ordering;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::Arc;

/// Shared live-instance and clone counters.
#[derive(Clone, Debug, Default)]
pub struct Tally {
    live: Arc<AtomicUsize>,
    clones: Arc<AtomicUsize>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracked element carrying `value`.
    pub fn track(&self, value: i64) -> Tracked {
        self.live.fetch_add(1, AtomicOrdering::SeqCst);
        Tracked {
            value,
            tally: Some(self.clone()),
        }
    }

    /// Number of tracked elements currently alive.
    pub fn live(&self) -> usize {
        self.live.load(AtomicOrdering::SeqCst)
    }

    /// Number of clones made of tracked elements so far.
    pub fn clones(&self) -> usize {
        self.clones.load(AtomicOrdering::SeqCst)
    }
}

/// An element that counts itself in a [`Tally`] while alive.
///
/// Equality and ordering compare `value` only.
#[derive(Default)]
pub struct Tracked {
    pub value: i64,
    tally: Option<Tally>,
}

impl Tracked {
    /// Whether this element is counted by a tally.
    pub fn is_tracked(&self) -> bool {
        self.tally.is_some()
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        match &self.tally {
            Some(tally) => {
                tally.clones.fetch_add(1, AtomicOrdering::SeqCst);
                tally.track(self.value)
            }
            None => Tracked {
                value: self.value,
                tally: None,
            },
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some(tally) = &self.tally {
            tally.live.fetch_sub(1, AtomicOrdering::SeqCst);
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl PartialOrd for Tracked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tracked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}
