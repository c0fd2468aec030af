//! Lookup table construction for the bytewise and wordwise kernels.
//!
//! Tables are a function of `(width, poly, refin)` only, but they are cached
//! under the exact parameter set (see [`cache`](crate::cache)), so equal
//! configurations share one allocation. Entries hold internalized values.

// 256-entry loops with u8-derived indices; bounds are structural.
#![allow(clippy::indexing_slicing)]

use crate::{kernels, params::CrcParams};

/// Slice-by-1 table: the CRC contribution of one input byte.
pub(crate) type ByteTable = [u64; 256];

/// Slice-by-8 table: slice `s` holds the contribution of a byte seen `s`
/// positions before the end of an 8-byte block.
pub(crate) type WordTable = [[u64; 256]; 8];

/// Build the single-byte table: entry `k` is the state after feeding byte `k`
/// into a zero accumulator.
pub(crate) fn bytewise_table(params: &CrcParams) -> ByteTable {
  let poly = params.internalize(params.poly);
  let mut table = [0u64; 256];
  for (byte, entry) in table.iter_mut().enumerate() {
    *entry = kernels::word(0, poly, params.refin, byte as u64, 8);
  }
  table
}

/// Build the slice-by-8 table from the single-byte table.
///
/// Slice `s` derives from slice `s - 1` by advancing one more zero byte
/// through the byte table (the standard slicing-by-N recurrence). Each stored
/// entry is byteswapped up front when the host byte order disagrees with the
/// `refin` orientation, so the fast loop's 64-bit loads need no per-iteration
/// swap.
pub(crate) fn wordwise_table(params: &CrcParams, bytes: &ByteTable) -> WordTable {
  let reorient = cfg!(target_endian = "little") != params.refin;
  let orient = |value: u64| if reorient { value.swap_bytes() } else { value };

  let mut table = [[0u64; 256]; 8];
  for byte in 0..256 {
    let mut accum = bytes[byte];
    table[0][byte] = orient(accum);
    for slice in 1..8 {
      accum = if params.refin {
        bytes[(accum & 0xFF) as usize] ^ (accum >> 8)
      } else {
        bytes[(accum >> 56) as usize] ^ (accum << 8)
      };
      table[slice][byte] = orient(accum);
    }
  }
  table
}
