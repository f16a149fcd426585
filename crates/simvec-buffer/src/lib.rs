//! Exclusively owned contiguous storage for the simvec container.
//!
//! The container never touches memory directly. It asks this crate for
//! a block of slots, reads and writes the slots by index, and hands
//! whole blocks back and forth by swapping owners:
//!
//! ```text
//! SimpleVector<T>
//! └── ArrayBuffer<T>   (one allocation, one BufferId, never shared)
//!     └── Box<[T]>     (capacity slots, default-valued on allocation)
//! ```
//!
//! [`growth`] holds the capacity arithmetic shared by every reallocating
//! operation.
//!
//! All storage is a `Box<[T]>` filled at allocation time. No
//! `MaybeUninit`, no `unsafe`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod growth;

pub use buffer::ArrayBuffer;
