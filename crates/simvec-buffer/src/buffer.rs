//! The raw buffer owner.
//!
//! An [`ArrayBuffer`] exclusively owns a fixed number of contiguous
//! slots. Its capacity never changes after allocation: growing means
//! allocating a second buffer, transferring slots into it, and swapping
//! owners. Dropping a buffer releases its storage together with every
//! value still sitting in its slots.

use std::alloc::Layout;
use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut, Range};

use simvec_core::{BufferId, VecError};

/// Exclusively owned block of `capacity` contiguous slots.
///
/// Every slot always holds a valid `T`; slots are filled when the
/// buffer is allocated. The owner of the buffer decides which slots are
/// logically present.
pub struct ArrayBuffer<T> {
    /// Backing storage. Its length is the capacity and never changes.
    slots: Box<[T]>,
    /// Identity of this allocation. `BufferId::NONE` when `slots` is empty.
    id: BufferId,
}

impl<T> ArrayBuffer<T> {
    /// A buffer that owns no storage.
    pub fn empty() -> Self {
        Self {
            slots: Vec::new().into_boxed_slice(),
            id: BufferId::NONE,
        }
    }

    /// Allocate `capacity` slots, filling each one with `fill()`.
    ///
    /// A zero capacity yields [`ArrayBuffer::empty`] without touching the
    /// allocator.
    ///
    /// # Errors
    ///
    /// [`VecError::CapacityOverflow`] if the byte size of the block cannot
    /// be represented, [`VecError::AllocationFailed`] if the allocator
    /// refuses the request.
    pub fn try_allocate_with<F>(capacity: usize, fill: F) -> Result<Self, VecError>
    where
        F: FnMut() -> T,
    {
        if capacity == 0 {
            return Ok(Self::empty());
        }
        let layout = Layout::array::<T>(capacity)
            .map_err(|_| VecError::CapacityOverflow {
                requested: capacity,
            })?;

        let mut slots = Vec::new();
        if slots.try_reserve_exact(capacity).is_err() {
            log::debug!(
                "allocation of {capacity} slots ({} bytes) refused",
                layout.size()
            );
            return Err(VecError::AllocationFailed {
                requested: capacity,
                bytes: layout.size(),
            });
        }
        slots.resize_with(capacity, fill);

        let id = BufferId::next();
        log::trace!("allocated buffer {id}: {capacity} slots");
        Ok(Self {
            slots: slots.into_boxed_slice(),
            id,
        })
    }

    /// Adopt existing storage. The capacity is the length of `slots`.
    pub fn from_boxed(slots: Box<[T]>) -> Self {
        let id = if slots.is_empty() {
            BufferId::NONE
        } else {
            BufferId::next()
        };
        Self { slots, id }
    }

    /// Number of slots owned.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Whether the buffer owns no storage.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Identity of the owned allocation.
    pub fn id(&self) -> BufferId {
        self.id
    }

    /// All slots, present or not.
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// All slots, present or not, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Exchange storage and identity with `other`. O(1), never fails.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Move the values in `src` into `dst` slots starting at `dst_start`.
    ///
    /// The values previously in the destination slots end up in the
    /// source slots, which the caller is about to discard.
    ///
    /// # Panics
    ///
    /// Panics if either range lies outside its buffer.
    pub fn transfer(&mut self, src: Range<usize>, dst: &mut Self, dst_start: usize) {
        let dst_end = dst_start + src.len();
        self.slots[src].swap_with_slice(&mut dst.slots[dst_start..dst_end]);
    }

    /// Give up the storage, returning the slots.
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.slots
    }
}

impl<T: Default> ArrayBuffer<T> {
    /// Allocate `capacity` default-valued slots.
    ///
    /// # Errors
    ///
    /// See [`ArrayBuffer::try_allocate_with`].
    pub fn try_allocate(capacity: usize) -> Result<Self, VecError> {
        Self::try_allocate_with(capacity, T::default)
    }
}

impl<T> Default for ArrayBuffer<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Index<usize> for ArrayBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.slots[index]
    }
}

impl<T> IndexMut<usize> for ArrayBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots[index]
    }
}

impl<T> fmt::Debug for ArrayBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayBuffer")
            .field("id", &self.id)
            .field("capacity", &self.capacity())
            .finish()
    }
}
