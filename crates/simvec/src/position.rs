//! Positions into a container's logical range.
//!
//! A [`Position`] stands where a raw element pointer would in a C-style
//! container: it names a slot by index and remembers which allocation
//! it was taken from. Any reallocation hands the container a new
//! [`BufferId`], so positions taken before the reallocation no longer
//! match and are rejected by `insert` and `erase`.

use std::fmt;
use std::ops::{Add, Sub};

use simvec_core::BufferId;

/// A cursor into a `SimpleVector`, valid until the next reallocation.
///
/// Obtained from [`begin`](crate::SimpleVector::begin),
/// [`end`](crate::SimpleVector::end), or returned by
/// [`insert`](crate::SimpleVector::insert) and
/// [`erase`](crate::SimpleVector::erase). Shift it with `+` and `-`;
/// the distance between two positions of the same buffer is `a - b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) index: usize,
    pub(crate) buffer: BufferId,
}

impl Position {
    pub(crate) fn new(index: usize, buffer: BufferId) -> Self {
        Self { index, buffer }
    }

    /// Slot index this position names.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The allocation this position was taken from.
    pub fn buffer(&self) -> BufferId {
        self.buffer
    }
}

impl Add<usize> for Position {
    type Output = Position;

    fn add(self, rhs: usize) -> Position {
        match self.index.checked_add(rhs) {
            Some(index) => Position::new(index, self.buffer),
            None => panic!("position {self} advanced past usize::MAX"),
        }
    }
}

impl Sub<usize> for Position {
    type Output = Position;

    fn sub(self, rhs: usize) -> Position {
        match self.index.checked_sub(rhs) {
            Some(index) => Position::new(index, self.buffer),
            None => panic!("position {self} moved {rhs} slots before the first slot"),
        }
    }
}

impl Sub for Position {
    type Output = usize;

    /// Number of slots from `rhs` to `self`.
    ///
    /// # Panics
    ///
    /// Panics if the positions come from different allocations or `rhs`
    /// lies after `self`.
    fn sub(self, rhs: Position) -> usize {
        assert_eq!(
            self.buffer, rhs.buffer,
            "distance between positions of different buffers"
        );
        match self.index.checked_sub(rhs.index) {
            Some(distance) => distance,
            None => panic!("position {rhs} lies after {self}"),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(index={}, buffer={})", self.index, self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_keeps_buffer() {
        let id = BufferId::next();
        let begin = Position::new(0, id);
        let third = begin + 2;
        assert_eq!(third.index(), 2);
        assert_eq!(third.buffer(), id);
        assert_eq!((third - 1).index(), 1);
        assert_eq!(third - begin, 2);
    }

    #[test]
    #[should_panic(expected = "before the first slot")]
    fn moving_before_first_slot_panics() {
        let _ = Position::new(1, BufferId::NONE) - 2;
    }

    #[test]
    #[should_panic(expected = "different buffers")]
    fn distance_across_buffers_panics() {
        let a = Position::new(3, BufferId::next());
        let b = Position::new(1, BufferId::next());
        let _ = a - b;
    }

    #[test]
    fn display_names_index_and_buffer() {
        let pos = Position::new(4, BufferId::NONE);
        assert_eq!(pos.to_string(), "Position(index=4, buffer=none)");
    }
}
