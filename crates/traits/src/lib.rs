//! Core traits for configurable checksum engines.
//!
//! This crate provides the foundational traits that checksum implementations
//! conform to. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Checksum`] | Streaming checksum computation | parametric CRC engines |
//! | [`ChecksumCombine`] | Parallel checksum combination | CRC with O(log n) combine |
//!
//! Unlike fixed-algorithm hashers, the implementors targeted here carry their
//! configuration at runtime (polynomial, width, reflection, ...). The traits
//! therefore work on *instances*: an already-configured engine acts as the
//! prototype for clones, resets and one-shot computations.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
#[cfg(feature = "std")]
pub mod io;

pub use checksum::{Checksum, ChecksumCombine};
#[cfg(feature = "std")]
pub use io::{ChecksumReader, ChecksumWriter};
