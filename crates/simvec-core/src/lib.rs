//! Core types for the simvec workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the buffer owner and the container: the
//! error type, buffer identities, and container configuration.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod id;

pub use config::{ShrinkPolicy, VecConfig};
pub use error::VecError;
pub use id::BufferId;
