//! Buffer identities.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`BufferId`] allocation. Zero is reserved for
/// [`BufferId::NONE`].
static BUFFER_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identity of one storage allocation.
///
/// Every successful allocation by a buffer owner receives a fresh ID
/// from a monotonic atomic counter, so two buffers never share an ID
/// even if the second one lands at the address the first one freed.
/// Positions record the ID of the buffer they were taken from; a
/// reallocation changes the container's ID and thereby invalidates
/// every outstanding position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(u64);

impl BufferId {
    /// The identity of a buffer that owns no storage.
    pub const NONE: BufferId = BufferId(0);

    /// Allocate a fresh, unique ID. Thread-safe.
    pub fn next() -> Self {
        Self(BUFFER_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Whether this is [`BufferId::NONE`].
    pub fn is_none(&self) -> bool {
        self.0 == 0
    }

    /// The raw counter value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl Default for BufferId {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "none")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_ids_are_unique_and_never_none() {
        let a = BufferId::next();
        let b = BufferId::next();
        assert_ne!(a, b);
        assert!(!a.is_none());
        assert!(!b.is_none());
        assert!(b > a);
    }

    #[test]
    fn default_is_none() {
        assert_eq!(BufferId::default(), BufferId::NONE);
        assert_eq!(BufferId::NONE.to_string(), "none");
    }
}
