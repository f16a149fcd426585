//! Capacity arithmetic for reallocating operations.
//!
//! The growth law is doubling: a full buffer of capacity `C` is replaced
//! by one of capacity `max(1, 2 * C)`. With a finite
//! [`VecConfig::max_capacity`] the doubled value saturates at the
//! ceiling, and growth fails once the ceiling itself is full.

use simvec_core::{VecConfig, VecError};

/// Capacity after one growth step from `current`: `max(1, 2 * current)`.
///
/// Returns `None` if doubling overflows `usize`.
pub fn doubled(current: usize) -> Option<usize> {
    if current == 0 {
        Some(1)
    } else {
        current.checked_mul(2)
    }
}

/// Capacity to grow to when a buffer of `current` slots is full and one
/// more slot is needed.
///
/// # Errors
///
/// [`VecError::CapacityExceeded`] if `current` already equals the
/// configured ceiling, [`VecError::CapacityOverflow`] if no larger
/// capacity is representable.
pub fn grow_one(current: usize, config: &VecConfig) -> Result<usize, VecError> {
    let required = current
        .checked_add(1)
        .ok_or(VecError::CapacityOverflow { requested: current })?;
    config.check_capacity(required)?;
    let target = doubled(current).unwrap_or(usize::MAX);
    Ok(target.min(config.max_capacity))
}

/// Capacity to grow to when at least `required` slots are needed:
/// `max(required, 2 * current)`, saturating at the ceiling.
///
/// # Errors
///
/// [`VecError::CapacityExceeded`] if `required` is above the ceiling.
pub fn grow_to(current: usize, required: usize, config: &VecConfig) -> Result<usize, VecError> {
    config.check_capacity(required)?;
    let target = required.max(current.saturating_mul(2));
    Ok(target.min(config.max_capacity))
}
