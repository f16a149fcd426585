//! simvec: a growable contiguous sequence container with explicit
//! capacity control.
//!
//! [`SimpleVector`] keeps its logical size separate from its allocated
//! capacity, grows by doubling, supports insertion and removal at any
//! [`Position`], and has full value semantics: deep copy, O(1) move and
//! swap, and lexicographic comparison.
//!
//! # Quick start
//!
//! ```rust
//! use simvec::prelude::*;
//!
//! let mut v = SimpleVector::new();
//! v.push_back(1);
//! v.push_back(2);
//! v.push_back(3);
//! assert_eq!(v.capacity(), 4);
//!
//! v.insert(v.begin() + 1, 9);
//! v.erase(v.begin());
//! assert_eq!(v, [9, 2, 3]);
//!
//! v.resize(5);
//! assert_eq!(v, [9, 2, 3, 0, 0]);
//!
//! assert!(matches!(v.at(5), Err(VecError::OutOfRange { index: 5, size: 5 })));
//!
//! let reserved: SimpleVector<String> = SimpleVector::with_reservation(reserve(32));
//! assert_eq!((reserved.size(), reserved.capacity()), (0, 32));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `simvec-core` | `VecError`, `VecConfig`, `ShrinkPolicy`, `BufferId` |
//! | [`buffer`] | `simvec-buffer` | `ArrayBuffer` storage owner and growth arithmetic |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Errors, configuration, and identities (`simvec-core`).
pub use simvec_core as types;

/// Storage owner and growth policy (`simvec-buffer`).
pub use simvec_buffer as buffer;

pub mod iter;
mod macros;
pub mod position;
pub mod reservation;
mod traits;
pub mod vector;

pub use iter::IntoIter;
pub use position::Position;
pub use reservation::{reserve, Reservation};
pub use simvec_core::{ShrinkPolicy, VecConfig, VecError};
pub use vector::SimpleVector;

/// Common imports.
///
/// ```rust
/// use simvec::prelude::*;
/// ```
pub mod prelude {
    pub use crate::simple_vector;
    pub use crate::{reserve, Position, Reservation, SimpleVector};
    pub use simvec_core::{ShrinkPolicy, VecConfig, VecError};
}
