//! Container configuration.

use crate::error::VecError;

/// What happens to slots that leave the logical range.
///
/// Applies to `clear`, `pop_back`, `erase`, and shrinking `resize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShrinkPolicy {
    /// Only the size is decremented. Removed slots keep their values
    /// (and whatever resources those values hold) until they are
    /// overwritten or the buffer is released.
    #[default]
    Retain,
    /// Removed slots are overwritten with `T::default()` immediately,
    /// dropping the resources the old values held.
    Reset,
}

/// Configuration for a `SimpleVector`.
///
/// Travels with the buffer: copies carry the source's configuration,
/// swaps and moves exchange it together with the storage. It never
/// participates in equality or ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VecConfig {
    /// Treatment of slots that leave the logical range.
    ///
    /// Default: [`ShrinkPolicy::Retain`].
    pub shrink_policy: ShrinkPolicy,

    /// Maximum number of slots the container may allocate.
    ///
    /// Default: `usize::MAX` (bounded in practice by the address space).
    /// Doubling growth saturates at this value; explicit requests above
    /// it fail with [`VecError::CapacityExceeded`].
    pub max_capacity: usize,
}

impl VecConfig {
    /// Default shrink policy.
    pub const DEFAULT_SHRINK_POLICY: ShrinkPolicy = ShrinkPolicy::Retain;

    /// Default capacity ceiling.
    pub const DEFAULT_MAX_CAPACITY: usize = usize::MAX;

    /// Create a configuration with default values.
    pub const fn new() -> Self {
        Self {
            shrink_policy: Self::DEFAULT_SHRINK_POLICY,
            max_capacity: Self::DEFAULT_MAX_CAPACITY,
        }
    }

    /// Replace the shrink policy.
    pub const fn with_shrink_policy(mut self, shrink_policy: ShrinkPolicy) -> Self {
        self.shrink_policy = shrink_policy;
        self
    }

    /// Replace the capacity ceiling.
    pub const fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Check an explicit capacity request against the ceiling.
    pub fn check_capacity(&self, requested: usize) -> Result<(), VecError> {
        if requested > self.max_capacity {
            return Err(VecError::CapacityExceeded {
                requested,
                limit: self.max_capacity,
            });
        }
        Ok(())
    }

    /// Whether removed slots must be reset to their default value.
    pub fn resets_on_shrink(&self) -> bool {
        self.shrink_policy == ShrinkPolicy::Reset
    }
}

impl Default for VecConfig {
    fn default() -> Self {
        Self::new()
    }
}
