//! Standard trait implementations for [`SimpleVector`].
//!
//! Comparison, hashing, and formatting look only at the logical range;
//! capacity, spare slots, and configuration are invisible to them.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut, Index, IndexMut};

use crate::position::Position;
use crate::reservation::Reservation;
use crate::vector::SimpleVector;

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVector<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for SimpleVector<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        debug_assert!(
            index < self.size(),
            "index {index} out of range for size {}",
            self.size()
        );
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for SimpleVector<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.size(),
            "index {index} out of range for size {}",
            self.size()
        );
        &mut self.as_mut_slice()[index]
    }
}

impl<T> Index<Position> for SimpleVector<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, pos: Position) -> &T {
        let index = self.resolve(pos, false);
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<Position> for SimpleVector<T> {
    #[track_caller]
    fn index_mut(&mut self, pos: Position) -> &mut T {
        let index = self.resolve(pos, false);
        &mut self.as_mut_slice()[index]
    }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SimpleVector<T> {}

impl<T: PartialEq> PartialEq<[T]> for SimpleVector<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for SimpleVector<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for SimpleVector<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for SimpleVector<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SimpleVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    /// Adopt the elements of `values`; size and capacity are both
    /// `values.len()`.
    fn from(values: Vec<T>) -> Self {
        Self::from_slots(values.into_boxed_slice())
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    /// Move the elements of the list in order; size and capacity are both `N`.
    fn from(values: [T; N]) -> Self {
        Self::from(Vec::from(values))
    }
}

impl<T: Default> From<Reservation> for SimpleVector<T> {
    #[track_caller]
    fn from(reservation: Reservation) -> Self {
        Self::with_reservation(reservation)
    }
}
