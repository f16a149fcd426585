//! Error types for the simvec container.
//!
//! Two kinds of failure are reported: allocation failures, raised while
//! obtaining storage, and out-of-range failures, raised only by checked
//! element access. Contract violations (popping an empty container,
//! stale positions) are not errors; they panic.

use std::error::Error;
use std::fmt;

/// Errors reported by the buffer owner and the container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VecError {
    /// The requested slot count cannot be represented as an allocation
    /// (byte size overflows `isize::MAX`, or capacity doubling overflows).
    CapacityOverflow {
        /// Number of slots requested.
        requested: usize,
    },
    /// The requested slot count is above the configured ceiling.
    CapacityExceeded {
        /// Number of slots requested.
        requested: usize,
        /// Configured maximum capacity.
        limit: usize,
    },
    /// The allocator could not provide the storage.
    AllocationFailed {
        /// Number of slots requested.
        requested: usize,
        /// Size of the refused allocation in bytes.
        bytes: usize,
    },
    /// Checked access at an index not less than the logical size.
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// Logical size of the container at the time of the access.
        size: usize,
    },
}

impl VecError {
    /// Whether this error was raised while obtaining storage.
    pub fn is_allocation_failure(&self) -> bool {
        !matches!(self, Self::OutOfRange { .. })
    }
}

impl fmt::Display for VecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: {requested} slots cannot be allocated")
            }
            Self::CapacityExceeded { requested, limit } => {
                write!(
                    f,
                    "capacity exceeded: requested {requested} slots, limit {limit} slots"
                )
            }
            Self::AllocationFailed { requested, bytes } => {
                write!(
                    f,
                    "allocation failed: {requested} slots ({bytes} bytes) could not be obtained"
                )
            }
            Self::OutOfRange { index, size } => {
                write!(f, "index {index} out of range for size {size}")
            }
        }
    }
}

impl Error for VecError {}
