//! Test fixtures for simvec development.
//!
//! Provides [`Tracked`], an element type that reports how many of its
//! instances are alive and how many clones were made, so tests can
//! observe copies, moves, and resource release inside a container.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{Tally, Tracked};
