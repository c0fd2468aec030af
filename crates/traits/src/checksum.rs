//! Non-cryptographic checksum traits.
//!
//! Traits for checksum algorithms whose configuration lives in the value, not
//! the type: a CRC engine parameterized over width, polynomial and reflection
//! is one *type* with many *configurations*, so construction is left to the
//! implementing crate and the traits operate on configured instances.
//!
//! - **Streaming**: incremental updates for large data
//! - **Prototype**: any configured instance can mint fresh ones via [`Checksum::checksum`]
//! - **Parallelism**: [`ChecksumCombine`] merges independently computed parts

use core::fmt::Debug;

/// Streaming checksum over a byte stream.
///
/// # Usage Pattern
///
/// ```text
/// let mut engine = /* configured by the implementing crate */;
/// engine.update(b"hello ");
/// engine.update(b"world");
/// let crc = engine.finalize();
///
/// // One-shot against the same configuration:
/// let crc = engine.checksum(b"hello world");
/// ```
pub trait Checksum: Clone {
  /// The checksum output type.
  ///
  /// `u64` for engines up to 64 bits wide; narrower results are LSb-aligned.
  type Output: Copy + Eq + Debug;

  /// Update the state with additional data.
  ///
  /// May be called any number of times; feeding a buffer in pieces yields the
  /// same result as feeding it whole.
  fn update(&mut self, data: &[u8]);

  /// Return the checksum of all data fed since the last reset.
  ///
  /// Does not consume or modify the instance; further updates may follow.
  fn finalize(&self) -> Self::Output;

  /// Reset to the configured initial state.
  ///
  /// After calling this, the instance behaves as if newly constructed with
  /// the same configuration.
  fn reset(&mut self);

  /// Compute the checksum of `data` in one shot, using this instance as the
  /// configuration prototype. The instance itself is left untouched.
  #[inline]
  fn checksum(&self, data: &[u8]) -> Self::Output {
    let mut fresh = self.clone();
    fresh.reset();
    fresh.update(data);
    fresh.finalize()
  }
}

/// Checksums that support parallel computation via combination.
///
/// The combine operation computes `crc(A || B)` from `crc(A)`, `crc(B)`, and
/// `len(B)` without access to either byte stream:
///
/// 1. Split data into chunks
/// 2. Compute checksums independently (in parallel if desired)
/// 3. Combine the results
///
/// # Mathematical Background
///
/// CRC is linear over GF(2): appending `len(B)` bytes multiplies the first
/// state by `x^(8*len(B))` modulo the generator polynomial, after which the
/// second checksum XORs in. Implementations typically use square-and-multiply
/// for O(log n) complexity.
///
/// ```text
/// let crc_a = engine.checksum(a);
/// let crc_b = engine.checksum(b);
/// assert_eq!(engine.combine(crc_a, crc_b, b.len()), engine.checksum(ab));
/// ```
pub trait ChecksumCombine: Checksum {
  /// Combine two checksums produced under this instance's configuration.
  ///
  /// # Arguments
  ///
  /// * `crc_a` - Checksum of the first part (A)
  /// * `crc_b` - Checksum of the second part (B)
  /// * `len_b` - Length of the second part in bytes
  ///
  /// Operands wider than the configured output are reduced to it.
  fn combine(&self, crc_a: Self::Output, crc_b: Self::Output, len_b: usize) -> Self::Output;
}
