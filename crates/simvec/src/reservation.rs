//! Capacity reservation requests.

/// A request to preallocate capacity without setting the logical size.
///
/// Built with [`reserve`] and consumed by
/// [`SimpleVector::with_reservation`](crate::SimpleVector::with_reservation)
/// or the `From<Reservation>` conversion.
///
/// ```
/// use simvec::{reserve, SimpleVector};
///
/// let v: SimpleVector<u32> = SimpleVector::with_reservation(reserve(16));
/// assert_eq!(v.size(), 0);
/// assert_eq!(v.capacity(), 16);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Reservation {
    capacity: usize,
}

impl Reservation {
    /// Request `capacity` slots.
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The requested capacity.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`Reservation::new`].
pub const fn reserve(capacity: usize) -> Reservation {
    Reservation::new(capacity)
}
