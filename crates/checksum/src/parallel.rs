//! Parallel checksum computation utilities.
//!
//! Helpers for computing checksums over chunked data with user-provided
//! parallelism (rayon, threads, etc.). The combine operation merges the
//! per-chunk results in O(log n) per chunk, so the expensive byte-crunching
//! parallelizes freely while the merge stays cheap.
//!
//! Because the engine is configured at runtime, every helper takes a
//! configured instance as its prototype; results are identical to feeding the
//! concatenated data through that instance.
//!
//! # Example
//!
//! ```
//! use checksum::{Crc, parallel::checksum_chunks};
//! use traits::Checksum as _;
//!
//! let engine = Crc::from_name("crc-32")?;
//! let data = b"The quick brown fox jumps over the lazy dog";
//! let chunks: Vec<&[u8]> = data.chunks(16).collect();
//!
//! assert_eq!(checksum_chunks(&engine, &chunks), engine.checksum(data));
//! # Ok::<(), checksum::CrcError>(())
//! ```
//!
//! With rayon (user brings the dependency):
//!
//! ```ignore
//! use rayon::prelude::*;
//! use checksum::{Crc, parallel::combine_checksums};
//! use traits::Checksum as _;
//!
//! let engine = Crc::from_name("crc-64-xz")?;
//! let parts: Vec<(u64, usize)> = large_data
//!   .par_chunks(1024 * 1024)
//!   .map(|chunk| (engine.checksum(chunk), chunk.len()))
//!   .collect();
//!
//! let crc = combine_checksums(&engine, &parts);
//! ```

use traits::ChecksumCombine;

/// Checksum of the concatenation of `chunks`, computed chunk by chunk and
/// merged with combine.
///
/// With no chunks at all, this is the checksum of empty data.
#[inline]
pub fn checksum_chunks<C: ChecksumCombine>(prototype: &C, chunks: &[&[u8]]) -> C::Output {
  let Some((first, rest)) = chunks.split_first() else {
    return prototype.checksum(&[]);
  };

  let mut result = prototype.checksum(first);
  for chunk in rest {
    let chunk_crc = prototype.checksum(chunk);
    result = prototype.combine(result, chunk_crc, chunk.len());
  }

  result
}

/// Merge pre-computed `(checksum, length)` pairs, in order, into the checksum
/// of the concatenated data.
///
/// Returns `None` when `parts` is empty.
#[inline]
pub fn combine_checksums<C: ChecksumCombine>(
  prototype: &C,
  parts: &[(C::Output, usize)],
) -> Option<C::Output> {
  let (first, rest) = parts.split_first()?;
  let mut result = first.0;
  for &(crc, len) in rest {
    result = prototype.combine(result, crc, len);
  }
  Some(result)
}

#[cfg(test)]
mod tests {
  extern crate std;

  use std::vec::Vec;

  use traits::Checksum as _;

  use super::*;
  use crate::Crc;

  #[test]
  fn test_checksum_chunks_matches_oneshot() {
    let engine = Crc::from_name("crc-32").unwrap();
    let data = b"The quick brown fox jumps over the lazy dog";
    for size in [1usize, 3, 7, 16, 64] {
      let chunks: Vec<&[u8]> = data.chunks(size).collect();
      assert_eq!(checksum_chunks(&engine, &chunks), engine.checksum(data), "chunk size {size}");
    }
  }

  #[test]
  fn test_checksum_chunks_empty() {
    let engine = Crc::from_name("crc-16-gsm").unwrap();
    let empty: &[&[u8]] = &[];
    assert_eq!(checksum_chunks(&engine, empty), engine.checksum(b""));
  }

  #[test]
  fn test_combine_checksums() {
    let engine = Crc::from_name("crc-64-xz").unwrap();
    let data = b"123456789abcdef";
    let parts: Vec<(u64, usize)> =
      data.chunks(4).map(|chunk| (engine.checksum(chunk), chunk.len())).collect();
    assert_eq!(combine_checksums(&engine, &parts), Some(engine.checksum(data)));
    assert_eq!(combine_checksums(&engine, &[]), None);
  }
}
