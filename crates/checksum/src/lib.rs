//! Parametric CRC engine covering every width from 1 to 64 bits.
//!
//! One engine, any CRC: configurations follow the Rocksoft model
//! `(width, poly, init, refin, refout, xorout)` with full parameter freedom,
//! and a catalogue of standard variants (CRC-3 through CRC-64, with all their
//! common aliases) provides pre-validated parameter sets by name.
//!
//! # Quick Start
//!
//! ```
//! use checksum::Crc;
//!
//! // By catalogue name
//! let mut crc = Crc::from_name("crc-32")?;
//! crc.update(b"123456789");
//! assert_eq!(crc.finalize(), 0xCBF43926);
//!
//! // Custom parameters
//! let params = checksum::CrcParams::builder().width(16).poly(0x1021).init(0xFFFF).build()?;
//! let mut crc = Crc::new(params, checksum::Method::Wordwise)?;
//! crc.update(b"123456789");
//! assert_eq!(crc.finalize(), 0x29B1);
//! # Ok::<(), checksum::CrcError>(())
//! ```
//!
//! # Update Methods
//!
//! Three observationally equivalent kernels trade table memory for speed:
//!
//! | Method | Tables | Notes |
//! |--------|--------|-------|
//! | [`Method::Bitwise`] | none | any width, smallest footprint |
//! | [`Method::Bytewise`] | 2 KiB | slice-by-1 |
//! | [`Method::Wordwise`] | 18 KiB | slice-by-8, default |
//!
//! Tables are built at configure time and shared process-wide between engines
//! with identical parameters (feature `std`); an engine can switch kernels
//! mid-stream without disturbing its digest.
//!
//! # Combine
//!
//! [`Crc::combine`] merges two digests as if their byte streams had been
//! concatenated, in O(log n) of the second length — the enabler for chunked
//! and parallel computation (see [`parallel`]).
//!
//! # no_std Support
//!
//! The crate is `no_std` but requires `alloc` (lookup tables are built at
//! runtime and shared via `Arc`). Without the `std` feature there is no
//! process-wide table cache and no `std::io` integration.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod bits;
pub mod catalog;
mod combine;
mod engine;
mod error;
pub mod parallel;
mod params;

mod cache;
mod kernels;
mod tables;

#[cfg(feature = "std")]
pub mod io;

pub use engine::{Crc, Digest, Method};
pub use error::CrcError;
pub use params::{Builder, CrcParams};
// Re-export traits for convenience
pub use traits::{Checksum, ChecksumCombine};

/// Bits per input byte.
pub const BYTE_WIDTH: u8 = 8;

/// Largest supported CRC width in bits.
pub const MAX_WIDTH: u8 = 64;

/// Largest representable CRC value (width 64, all ones).
pub const MAX_VALUE: u64 = u64::MAX;
