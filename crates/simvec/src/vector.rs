//! The dynamic array container.
//!
//! [`SimpleVector`] owns exactly one [`ArrayBuffer`] at a time and tracks
//! the logical size separately from the buffer's capacity:
//!
//! ```text
//! slots:  [ v0 | v1 | v2 | ·· | ·· ]
//!           \__ size = 3 __/
//!           \____ capacity = 5 ____/
//! ```
//!
//! Slots in `[0, size)` are the elements. Slots in `[size, capacity)`
//! hold default values or leftovers from earlier elements, depending on
//! the configured [`ShrinkPolicy`](simvec_core::ShrinkPolicy).
//!
//! # Growth
//!
//! An append or insert into a full container allocates a new buffer of
//! `max(1, 2 * capacity)` slots, moves the elements over in order, and
//! swaps the new buffer in. The old buffer is only released after the
//! new one is fully populated, so a failed allocation leaves the
//! container untouched.
//!
//! # Fallible and infallible operations
//!
//! Every allocating operation comes in two forms. The `try_` form
//! returns [`VecError`]; the plain form treats allocation failure as
//! fatal and panics with the error message.

use std::mem;
use std::ops::Range;

use simvec_buffer::{growth, ArrayBuffer};
use simvec_core::{BufferId, VecConfig, VecError};

use crate::position::Position;
use crate::reservation::Reservation;

/// A growable sequence over contiguous storage with explicit capacity
/// control.
///
/// ```
/// use simvec::SimpleVector;
///
/// let mut v = SimpleVector::new();
/// v.push_back(1);
/// v.push_back(2);
/// v.push_back(3);
/// assert_eq!(v, [1, 2, 3]);
/// assert_eq!(v.capacity(), 4);
///
/// let pos = v.insert(v.begin() + 1, 9);
/// assert_eq!(v[pos], 9);
/// assert_eq!(v, [1, 9, 2, 3]);
/// ```
pub struct SimpleVector<T> {
    /// Owned storage; `buffer.capacity()` is the container's capacity.
    buffer: ArrayBuffer<T>,
    /// Number of logically present elements. Always `<= buffer.capacity()`.
    size: usize,
    config: VecConfig,
}

impl<T> SimpleVector<T> {
    /// An empty container. Does not allocate.
    pub fn new() -> Self {
        Self::with_config(VecConfig::default())
    }

    /// An empty container with the given configuration. Does not allocate.
    pub fn with_config(config: VecConfig) -> Self {
        Self {
            buffer: ArrayBuffer::empty(),
            size: 0,
            config,
        }
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Whether the container holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The configuration this container was built with.
    pub fn config(&self) -> &VecConfig {
        &self.config
    }

    /// Identity of the current allocation. Changes on every reallocation.
    pub fn buffer_id(&self) -> BufferId {
        self.buffer.id()
    }

    /// The elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.buffer.as_slice()[..self.size]
    }

    /// The elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let size = self.size;
        &mut self.buffer.as_mut_slice()[..size]
    }

    /// Position of the first element.
    pub fn begin(&self) -> Position {
        Position::new(0, self.buffer.id())
    }

    /// Position one past the last element.
    pub fn end(&self) -> Position {
        Position::new(self.size, self.buffer.id())
    }

    /// Checked access.
    ///
    /// # Errors
    ///
    /// [`VecError::OutOfRange`] if `index >= self.size()`.
    pub fn at(&self, index: usize) -> Result<&T, VecError> {
        self.as_slice().get(index).ok_or(VecError::OutOfRange {
            index,
            size: self.size,
        })
    }

    /// Checked mutable access.
    ///
    /// # Errors
    ///
    /// [`VecError::OutOfRange`] if `index >= self.size()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, VecError> {
        let size = self.size;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(VecError::OutOfRange { index, size })
    }

    /// Exchange storage, size, and configuration with `other`. O(1).
    pub fn swap(&mut self, other: &mut Self) {
        self.buffer.swap(&mut other.buffer);
        mem::swap(&mut self.size, &mut other.size);
        mem::swap(&mut self.config, &mut other.config);
    }

    /// Move the contents out, leaving `self` with size 0 and capacity 0.
    ///
    /// The returned container owns the buffer that `self` owned; no
    /// element is copied. `self` keeps its configuration.
    pub fn take(&mut self) -> Self {
        let mut taken = Self::with_config(self.config);
        self.swap(&mut taken);
        taken
    }

    /// Move-assign: replace the contents of `self` with those of `source`,
    /// leaving `source` with size 0 and capacity 0.
    ///
    /// The previous contents of `self` are dropped.
    pub fn move_from(&mut self, source: &mut Self) {
        let mut incoming = source.take();
        self.swap(&mut incoming);
    }

    /// Consume the container, returning its elements in a `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        let mut slots = self.buffer.into_boxed_slice().into_vec();
        slots.truncate(self.size);
        slots
    }

    /// Build a container owning `slots`, all of them present.
    pub(crate) fn from_slots(slots: Box<[T]>) -> Self {
        let size = slots.len();
        Self {
            buffer: ArrayBuffer::from_boxed(slots),
            size,
            config: VecConfig::default(),
        }
    }

    pub(crate) fn position_at(&self, index: usize) -> Position {
        Position::new(index, self.buffer.id())
    }

    /// Resolve `pos` to an index within `[0, size)`, or `[0, size]` when
    /// `allow_end` is set.
    ///
    /// # Panics
    ///
    /// Panics if `pos` was taken from another allocation or lies outside
    /// the accepted range.
    #[track_caller]
    pub(crate) fn resolve(&self, pos: Position, allow_end: bool) -> usize {
        if pos.buffer != self.buffer.id() {
            stale_position(pos, self.buffer.id());
        }
        let in_range = if allow_end {
            pos.index <= self.size
        } else {
            pos.index < self.size
        };
        if !in_range {
            position_out_of_range(pos, self.size);
        }
        pos.index
    }
}

impl<T: Default> SimpleVector<T> {
    /// `n` default-valued elements; size and capacity are both `n`.
    ///
    /// # Panics
    ///
    /// Panics if the storage cannot be allocated.
    #[track_caller]
    pub fn with_size(n: usize) -> Self {
        handle_alloc(Self::try_with_size(n))
    }

    /// Fallible form of [`with_size`](Self::with_size).
    pub fn try_with_size(n: usize) -> Result<Self, VecError> {
        Ok(Self {
            buffer: ArrayBuffer::try_allocate(n)?,
            size: n,
            config: VecConfig::default(),
        })
    }

    /// An empty container with `reservation.capacity()` allocated slots.
    ///
    /// # Panics
    ///
    /// Panics if the storage cannot be allocated.
    #[track_caller]
    pub fn with_reservation(reservation: Reservation) -> Self {
        handle_alloc(Self::try_with_reservation(reservation))
    }

    /// Fallible form of [`with_reservation`](Self::with_reservation).
    pub fn try_with_reservation(reservation: Reservation) -> Result<Self, VecError> {
        Ok(Self {
            buffer: ArrayBuffer::try_allocate(reservation.capacity())?,
            size: 0,
            config: VecConfig::default(),
        })
    }

    /// Append `value`, growing to `max(1, 2 * capacity)` slots when full.
    ///
    /// # Panics
    ///
    /// Panics if growth is needed and the storage cannot be allocated.
    #[track_caller]
    pub fn push_back(&mut self, value: T) {
        handle_alloc(self.try_push_back(value))
    }

    /// Fallible form of [`push_back`](Self::push_back). On error the
    /// container is unchanged and `value` is dropped.
    pub fn try_push_back(&mut self, value: T) -> Result<(), VecError> {
        if self.size == self.capacity() {
            let new_capacity = growth::grow_one(self.capacity(), &self.config)?;
            self.reallocate(new_capacity)?;
        }
        self.buffer[self.size] = value;
        self.size += 1;
        Ok(())
    }

    /// Insert `value` before `pos`, returning the position of the new
    /// element.
    ///
    /// `pos` must come from this container's current allocation and lie in
    /// `[begin(), end()]`. If the container is full, the returned position
    /// belongs to the new allocation and every earlier position is stale.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is stale, foreign, or out of range, or if growth is
    /// needed and the storage cannot be allocated.
    #[track_caller]
    pub fn insert(&mut self, pos: Position, value: T) -> Position {
        handle_alloc(self.try_insert(pos, value))
    }

    /// Fallible form of [`insert`](Self::insert). On error the container
    /// is unchanged and `value` is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is stale, foreign, or out of range.
    #[track_caller]
    pub fn try_insert(&mut self, pos: Position, value: T) -> Result<Position, VecError> {
        let index = self.resolve(pos, true);
        if self.size == self.capacity() {
            let new_capacity = growth::grow_one(self.capacity(), &self.config)?;
            let mut fresh = ArrayBuffer::try_allocate(new_capacity)?;
            self.buffer.transfer(0..index, &mut fresh, 0);
            fresh[index] = value;
            self.buffer.transfer(index..self.size, &mut fresh, index + 1);
            self.replace_buffer(fresh);
        } else {
            // The spare slot at `size` takes the value, then rotates down
            // into place while the tail shifts one slot toward the end.
            self.buffer[self.size] = value;
            self.buffer.as_mut_slice()[index..=self.size].rotate_right(1);
        }
        self.size += 1;
        Ok(self.position_at(index))
    }

    /// Remove the last element.
    ///
    /// # Panics
    ///
    /// Panics if the container is empty.
    #[track_caller]
    pub fn pop_back(&mut self) {
        assert!(self.size > 0, "pop_back on an empty SimpleVector");
        self.size -= 1;
        self.release(self.size..self.size + 1);
    }

    /// Remove the element at `pos`, shifting later elements one slot
    /// earlier. Returns the position now holding the next element, which
    /// is `end()` if the last element was removed.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is stale, foreign, or not in `[begin(), end())`.
    #[track_caller]
    pub fn erase(&mut self, pos: Position) -> Position {
        let index = self.resolve(pos, false);
        let size = self.size;
        self.buffer.as_mut_slice()[index..size].rotate_left(1);
        self.size -= 1;
        self.release(self.size..size);
        self.position_at(index)
    }

    /// Grow the capacity to exactly `new_capacity` slots. No-op if the
    /// capacity is already at least `new_capacity`; never shrinks.
    ///
    /// # Panics
    ///
    /// Panics if the storage cannot be allocated.
    #[track_caller]
    pub fn reserve(&mut self, new_capacity: usize) {
        handle_alloc(self.try_reserve(new_capacity))
    }

    /// Fallible form of [`reserve`](Self::reserve). On error the container
    /// is unchanged.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), VecError> {
        if new_capacity > self.capacity() {
            self.config.check_capacity(new_capacity)?;
            self.reallocate(new_capacity)?;
        }
        Ok(())
    }

    /// Change the size to `new_size`.
    ///
    /// Growing past the capacity reallocates to
    /// `max(new_size, 2 * capacity)` slots. New elements are
    /// default-valued. Shrinking only lowers the size; the capacity is
    /// kept.
    ///
    /// # Panics
    ///
    /// Panics if the storage cannot be allocated.
    #[track_caller]
    pub fn resize(&mut self, new_size: usize) {
        handle_alloc(self.try_resize(new_size))
    }

    /// Fallible form of [`resize`](Self::resize). On error the container
    /// is unchanged.
    pub fn try_resize(&mut self, new_size: usize) -> Result<(), VecError> {
        let old_size = self.size;
        if new_size > self.capacity() {
            let new_capacity = growth::grow_to(self.capacity(), new_size, &self.config)?;
            // Slots past the moved elements come out of allocation default-valued.
            self.reallocate(new_capacity)?;
            self.size = new_size;
        } else if new_size > old_size {
            self.buffer.as_mut_slice()[old_size..new_size]
                .iter_mut()
                .for_each(|slot| *slot = T::default());
            self.size = new_size;
        } else {
            self.size = new_size;
            self.release(new_size..old_size);
        }
        Ok(())
    }

    /// Remove all elements. The capacity is kept.
    pub fn clear(&mut self) {
        let old_size = self.size;
        self.size = 0;
        self.release(0..old_size);
    }

    /// Move the elements into a fresh buffer of `new_capacity` slots and
    /// release the old one.
    fn reallocate(&mut self, new_capacity: usize) -> Result<(), VecError> {
        debug_assert!(new_capacity >= self.size);
        let mut fresh = ArrayBuffer::try_allocate(new_capacity)?;
        self.buffer.transfer(0..self.size, &mut fresh, 0);
        self.replace_buffer(fresh);
        Ok(())
    }

    fn replace_buffer(&mut self, mut fresh: ArrayBuffer<T>) {
        log::trace!(
            "buffer {} ({} slots) replaced by {} ({} slots), size {}",
            self.buffer.id(),
            self.buffer.capacity(),
            fresh.id(),
            fresh.capacity(),
            self.size
        );
        self.buffer.swap(&mut fresh);
    }

    /// Apply the shrink policy to slots that just left the logical range.
    fn release(&mut self, slots: Range<usize>) {
        if self.config.resets_on_shrink() {
            self.buffer.as_mut_slice()[slots]
                .iter_mut()
                .for_each(|slot| *slot = T::default());
        }
    }
}

impl<T: Clone> SimpleVector<T> {
    /// `n` copies of `value`; size and capacity are both `n`.
    ///
    /// # Panics
    ///
    /// Panics if the storage cannot be allocated.
    #[track_caller]
    pub fn with_value(n: usize, value: &T) -> Self {
        handle_alloc(Self::try_with_value(n, value))
    }

    /// Fallible form of [`with_value`](Self::with_value).
    pub fn try_with_value(n: usize, value: &T) -> Result<Self, VecError> {
        Ok(Self {
            buffer: ArrayBuffer::try_allocate_with(n, || value.clone())?,
            size: n,
            config: VecConfig::default(),
        })
    }
}

impl<T: Clone + Default> SimpleVector<T> {
    /// Deep copy into new storage of the same capacity.
    ///
    /// # Errors
    ///
    /// Any allocation error from obtaining the new storage.
    pub fn try_clone(&self) -> Result<Self, VecError> {
        let mut buffer = ArrayBuffer::try_allocate(self.capacity())?;
        buffer.as_mut_slice()[..self.size].clone_from_slice(self.as_slice());
        Ok(Self {
            buffer,
            size: self.size,
            config: self.config,
        })
    }

    /// Copy-assign: build a copy of `source`, then swap it in.
    ///
    /// If the copy cannot be built, `self` is left wholly unmodified.
    pub fn try_assign(&mut self, source: &Self) -> Result<(), VecError> {
        let mut copy = source.try_clone()?;
        self.swap(&mut copy);
        Ok(())
    }
}

impl<T: Clone + Default> Clone for SimpleVector<T> {
    #[track_caller]
    fn clone(&self) -> Self {
        handle_alloc(self.try_clone())
    }

    #[track_caller]
    fn clone_from(&mut self, source: &Self) {
        handle_alloc(self.try_assign(source))
    }
}

/// Unwrap the result of an allocating operation, treating failure as fatal.
#[inline]
#[track_caller]
fn handle_alloc<R>(result: Result<R, VecError>) -> R {
    match result {
        Ok(value) => value,
        Err(err) => allocation_failure(err),
    }
}

#[cold]
#[track_caller]
fn allocation_failure(err: VecError) -> ! {
    log::debug!("fatal allocation failure: {err}");
    panic!("{err}");
}

#[cold]
#[track_caller]
fn stale_position(pos: Position, current: BufferId) -> ! {
    panic!("stale or foreign position {pos}: container buffer is {current}");
}

#[cold]
#[track_caller]
fn position_out_of_range(pos: Position, size: usize) -> ! {
    panic!("position {pos} out of range for size {size}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservation::reserve;
    use simvec_core::ShrinkPolicy;

    fn collect<T: Clone>(v: &SimpleVector<T>) -> Vec<T> {
        v.as_slice().to_vec()
    }

    #[test]
    fn new_does_not_allocate() {
        let v: SimpleVector<i32> = SimpleVector::new();
        assert_eq!(v.size(), 0);
        assert_eq!(v.capacity(), 0);
        assert!(v.is_empty());
        assert!(v.buffer_id().is_none());
    }

    #[test]
    fn with_size_fills_defaults() {
        let v: SimpleVector<i32> = SimpleVector::with_size(5);
        assert_eq!(v.size(), 5);
        assert_eq!(v.capacity(), 5);
        assert_eq!(collect(&v), vec![0; 5]);
    }

    #[test]
    fn with_value_fills_copies() {
        let v = SimpleVector::with_value(3, &"x".to_string());
        assert_eq!(v.size(), 3);
        assert_eq!(v.capacity(), 3);
        assert!(v.as_slice().iter().all(|s| s == "x"));
    }

    #[test]
    fn with_reservation_sets_capacity_only() {
        let v: SimpleVector<u8> = SimpleVector::with_reservation(reserve(10));
        assert_eq!(v.size(), 0);
        assert_eq!(v.capacity(), 10);
    }

    #[test]
    fn push_back_grows_by_doubling() {
        let mut v = SimpleVector::new();
        let mut capacities = Vec::new();
        for i in 0..9 {
            v.push_back(i);
            capacities.push(v.capacity());
        }
        assert_eq!(capacities, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
        assert_eq!(collect(&v), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn push_back_into_reserved_space_keeps_buffer() {
        let mut v = SimpleVector::with_reservation(reserve(4));
        let id = v.buffer_id();
        for i in 0..4 {
            v.push_back(i);
        }
        assert_eq!(v.buffer_id(), id);
        v.push_back(4);
        assert_ne!(v.buffer_id(), id);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn insert_without_growth_shifts_tail() {
        let mut v = SimpleVector::with_reservation(reserve(8));
        for i in [1, 2, 3] {
            v.push_back(i);
        }
        let pos = v.insert(v.begin() + 1, 9);
        assert_eq!(pos.index(), 1);
        assert_eq!(collect(&v), vec![1, 9, 2, 3]);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn insert_with_growth_moves_three_segments() {
        let mut v = SimpleVector::from([1, 2, 3, 4]);
        let pos = v.insert(v.begin() + 2, 7);
        assert_eq!(collect(&v), vec![1, 2, 7, 3, 4]);
        assert_eq!(v.capacity(), 8);
        assert_eq!(v[pos], 7);
    }

    #[test]
    fn insert_at_end_and_into_empty() {
        let mut v = SimpleVector::new();
        let pos = v.insert(v.end(), 5);
        assert_eq!(pos.index(), 0);
        let pos = v.insert(v.end(), 6);
        assert_eq!(pos.index(), 1);
        assert_eq!(collect(&v), vec![5, 6]);
    }

    #[test]
    #[should_panic(expected = "stale or foreign position")]
    fn insert_with_stale_position_panics() {
        let mut v = SimpleVector::from([1, 2]);
        let stale = v.begin();
        v.push_back(3); // full: reallocates
        v.insert(stale, 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn insert_past_end_panics() {
        let mut v = SimpleVector::from([1, 2]);
        v.insert(v.end() + 1, 0);
    }

    #[test]
    fn erase_shifts_and_returns_next() {
        let mut v = SimpleVector::from([1, 2, 3]);
        let next = v.erase(v.begin());
        assert_eq!(collect(&v), vec![2, 3]);
        assert_eq!(v[next], 2);
        let next = v.erase(v.end() - 1);
        assert_eq!(next, v.end());
        assert_eq!(collect(&v), vec![2]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn erase_at_end_panics() {
        let mut v = SimpleVector::from([1]);
        v.erase(v.end());
    }

    #[test]
    fn pop_back_keeps_capacity() {
        let mut v = SimpleVector::from([1, 2, 3]);
        v.pop_back();
        assert_eq!(collect(&v), vec![1, 2]);
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    #[should_panic(expected = "pop_back on an empty SimpleVector")]
    fn pop_back_on_empty_panics() {
        let mut v: SimpleVector<i32> = SimpleVector::new();
        v.pop_back();
    }

    #[test]
    fn reserve_is_exact_and_never_shrinks() {
        let mut v = SimpleVector::from([1, 2]);
        v.reserve(10);
        assert_eq!(v.capacity(), 10);
        v.reserve(3);
        assert_eq!(v.capacity(), 10);
        assert_eq!(collect(&v), vec![1, 2]);
    }

    #[test]
    fn resize_three_cases() {
        let mut v = SimpleVector::from([1, 2, 3]);
        // (a) past capacity: max(new_size, 2 * capacity)
        v.resize(4);
        assert_eq!(v.capacity(), 6);
        assert_eq!(collect(&v), vec![1, 2, 3, 0]);
        v.resize(10);
        assert_eq!(v.capacity(), 12);
        assert_eq!(v.size(), 10);
        // (c) shrink keeps capacity
        v.resize(2);
        assert_eq!(collect(&v), vec![1, 2]);
        assert_eq!(v.capacity(), 12);
        // (b) regrow within capacity exposes defaults, not leftovers
        v.resize(4);
        assert_eq!(collect(&v), vec![1, 2, 0, 0]);
        assert_eq!(v.capacity(), 12);
    }

    #[test]
    fn clear_keeps_capacity_and_buffer() {
        let mut v = SimpleVector::from([1, 2, 3]);
        let id = v.buffer_id();
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 3);
        assert_eq!(v.buffer_id(), id);
    }

    #[test]
    fn retain_policy_leaves_values_in_spare_slots() {
        let mut v = SimpleVector::from(["a".to_string(), "b".to_string()]);
        v.pop_back();
        assert_eq!(v.buffer.as_slice()[1], "b");
    }

    #[test]
    fn reset_policy_clears_spare_slots() {
        let mut v = SimpleVector::with_config(
            VecConfig::new().with_shrink_policy(ShrinkPolicy::Reset),
        );
        for s in ["a", "b", "c"] {
            v.push_back(s.to_string());
        }
        v.pop_back();
        assert_eq!(v.buffer.as_slice()[2], "");
        v.erase(v.begin());
        assert_eq!(v.buffer.as_slice()[1], "");
        v.clear();
        assert!(v.buffer.as_slice().iter().all(String::is_empty));
    }

    #[test]
    fn at_reports_out_of_range() {
        let mut v = SimpleVector::from([10, 20]);
        assert_eq!(v.at(1), Ok(&20));
        assert_eq!(v.at(2), Err(VecError::OutOfRange { index: 2, size: 2 }));
        *v.at_mut(0).unwrap() = 11;
        assert_eq!(v.at(0), Ok(&11));
        assert!(v.at_mut(5).is_err());

        let empty: SimpleVector<i32> = SimpleVector::new();
        assert_eq!(
            empty.at(0),
            Err(VecError::OutOfRange { index: 0, size: 0 })
        );
    }

    #[test]
    fn at_ignores_spare_capacity() {
        let v: SimpleVector<i32> = SimpleVector::with_reservation(reserve(4));
        assert!(v.at(0).is_err());
    }

    #[test]
    fn swap_exchanges_everything() {
        let mut a = SimpleVector::from([1, 2, 3]);
        let mut b = SimpleVector::with_config(VecConfig::new().with_max_capacity(9));
        b.push_back(7);
        a.swap(&mut b);
        assert_eq!(collect(&a), vec![7]);
        assert_eq!(a.capacity(), 1);
        assert_eq!(a.config().max_capacity, 9);
        assert_eq!(collect(&b), vec![1, 2, 3]);
        assert_eq!(b.capacity(), 3);
    }

    #[test]
    fn take_leaves_source_empty() {
        let mut a = SimpleVector::from([1, 2, 3]);
        let id = a.buffer_id();
        let b = a.take();
        assert_eq!(a.size(), 0);
        assert_eq!(a.capacity(), 0);
        assert_eq!(collect(&b), vec![1, 2, 3]);
        assert_eq!(b.buffer_id(), id);
    }

    #[test]
    fn move_from_is_a_true_move() {
        let mut a = SimpleVector::from([1, 2, 3]);
        let mut b = SimpleVector::from([9]);
        let id = a.buffer_id();
        b.move_from(&mut a);
        assert_eq!(collect(&b), vec![1, 2, 3]);
        assert_eq!(b.buffer_id(), id);
        assert_eq!(a.size(), 0);
        assert_eq!(a.capacity(), 0);
    }

    #[test]
    fn clone_copies_capacity_and_is_independent() {
        let mut a = SimpleVector::with_reservation(reserve(8));
        a.push_back(1);
        a.push_back(2);
        let mut b = a.clone();
        assert_eq!(b.capacity(), 8);
        assert_ne!(b.buffer_id(), a.buffer_id());
        b.push_back(3);
        assert_eq!(collect(&a), vec![1, 2]);
        assert_eq!(collect(&b), vec![1, 2, 3]);
    }

    #[test]
    fn clone_from_replaces_contents() {
        let a = SimpleVector::from([4, 5]);
        let mut b = SimpleVector::from([1, 2, 3]);
        b.clone_from(&a);
        assert_eq!(collect(&b), vec![4, 5]);
        assert_eq!(b.capacity(), 2);
    }

    #[test]
    fn failed_growth_leaves_container_unchanged() {
        let mut v = SimpleVector::with_config(VecConfig::new().with_max_capacity(2));
        v.push_back(1);
        v.push_back(2);
        let id = v.buffer_id();
        let err = v.try_push_back(3).unwrap_err();
        assert_eq!(
            err,
            VecError::CapacityExceeded {
                requested: 3,
                limit: 2
            }
        );
        assert_eq!(collect(&v), vec![1, 2]);
        assert_eq!(v.capacity(), 2);
        assert_eq!(v.buffer_id(), id);

        assert!(v.try_insert(v.begin(), 0).is_err());
        assert!(v.try_reserve(3).is_err());
        assert!(v.try_resize(3).is_err());
        assert_eq!(collect(&v), vec![1, 2]);
        assert_eq!(v.buffer_id(), id);
    }

    #[test]
    fn growth_saturates_at_ceiling() {
        let mut v = SimpleVector::with_config(VecConfig::new().with_max_capacity(3));
        v.push_back(1);
        v.push_back(2);
        v.push_back(3);
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    #[should_panic(expected = "capacity exceeded")]
    fn infallible_push_panics_on_allocation_failure() {
        let mut v = SimpleVector::with_config(VecConfig::new().with_max_capacity(1));
        v.push_back(1);
        v.push_back(2);
    }

    #[test]
    fn oversized_construction_reports_overflow() {
        let result: Result<SimpleVector<u64>, _> = SimpleVector::try_with_size(usize::MAX);
        assert!(matches!(result, Err(VecError::CapacityOverflow { .. })));
    }

    #[test]
    fn into_vec_drops_spare_slots() {
        let mut v = SimpleVector::from([1, 2, 3]);
        v.pop_back();
        assert_eq!(v.into_vec(), vec![1, 2]);
    }

    #[test]
    fn zero_sized_elements() {
        let mut v = SimpleVector::new();
        for _ in 0..5 {
            v.push_back(());
        }
        assert_eq!(v.size(), 5);
        assert_eq!(v.capacity(), 8);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Clone, Debug)]
        enum Op {
            Push(i32),
            Insert(usize, i32),
            Erase(usize),
            Pop,
            Resize(usize),
            Reserve(usize),
            Clear,
        }

        fn arb_op() -> impl Strategy<Value = Op> {
            prop_oneof![
                4 => any::<i32>().prop_map(Op::Push),
                2 => (any::<usize>(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
                2 => any::<usize>().prop_map(Op::Erase),
                1 => Just(Op::Pop),
                1 => (0usize..40).prop_map(Op::Resize),
                1 => (0usize..40).prop_map(Op::Reserve),
                1 => Just(Op::Clear),
            ]
        }

        proptest! {
            #[test]
            fn matches_std_vec_model(ops in proptest::collection::vec(arb_op(), 0..80)) {
                let mut v = SimpleVector::new();
                let mut model: Vec<i32> = Vec::new();
                for op in ops {
                    match op {
                        Op::Push(x) => {
                            v.push_back(x);
                            model.push(x);
                        }
                        Op::Insert(i, x) => {
                            let i = i % (model.len() + 1);
                            let pos = v.insert(v.begin() + i, x);
                            model.insert(i, x);
                            prop_assert_eq!(pos.index(), i);
                        }
                        Op::Erase(i) => {
                            if !model.is_empty() {
                                let i = i % model.len();
                                v.erase(v.begin() + i);
                                model.remove(i);
                            }
                        }
                        Op::Pop => {
                            if !model.is_empty() {
                                v.pop_back();
                                model.pop();
                            }
                        }
                        Op::Resize(n) => {
                            v.resize(n);
                            model.resize(n, 0);
                        }
                        Op::Reserve(n) => {
                            let before = v.capacity();
                            v.reserve(n);
                            prop_assert_eq!(v.capacity(), before.max(n));
                        }
                        Op::Clear => {
                            v.clear();
                            model.clear();
                        }
                    }
                    prop_assert_eq!(v.as_slice(), model.as_slice());
                    prop_assert!(v.capacity() >= v.size());
                }
            }

            #[test]
            fn capacity_never_shrinks(pushes in 0usize..50, new_size in 0usize..50) {
                let mut v = SimpleVector::new();
                for i in 0..pushes {
                    v.push_back(i);
                }
                let before = v.capacity();
                v.resize(new_size);
                prop_assert!(v.capacity() >= before);
                v.clear();
                prop_assert!(v.capacity() >= before);
            }
        }
    }
}
