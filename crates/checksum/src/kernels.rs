//! The three interchangeable update kernels.
//!
//! Every kernel transforms an *internalized* accumulator (see
//! [`CrcParams::internalize`](crate::params::CrcParams)): reflected
//! configurations keep the register LSb-aligned and shift right,
//! non-reflected ones keep it left-aligned in the 64-bit register and shift
//! left with the top-bit test against bit 63. This makes the loops
//! width-independent; only validation, externalization and the final
//! reflection in the digest ever look at `width` again.
//!
//! The kernels are observationally equivalent: for the same input they leave
//! the accumulator in the same state, so an engine may switch between them
//! mid-stream.

// Table indices are always produced by `& 0xFF` or `>> 56` on a u64, which
// cannot exceed 255; clippy cannot see that through the casts.
#![allow(clippy::indexing_slicing)]

use crate::{
  bits::bitmask,
  tables::{ByteTable, WordTable},
};

/// Bit-by-bit update for a whole byte slice. Works for every width; no
/// tables required.
#[inline]
pub(crate) fn bitwise(mut accum: u64, poly: u64, refin: bool, data: &[u8]) -> u64 {
  if refin {
    for &byte in data {
      accum ^= u64::from(byte);
      for _ in 0..8 {
        let mask = 0u64.wrapping_sub(accum & 1);
        accum = (accum >> 1) ^ (poly & mask);
      }
    }
  } else {
    for &byte in data {
      accum ^= u64::from(byte) << 56;
      for _ in 0..8 {
        let mask = 0u64.wrapping_sub(accum >> 63);
        accum = (accum << 1) ^ (poly & mask);
      }
    }
  }
  accum
}

/// Bit-by-bit update for a partial word of `bits` bits, 1..=64.
///
/// Bits of `word` above `bits` are ignored. Also the primitive behind byte
/// table construction (a byte is a word of 8 bits).
#[inline]
pub(crate) fn word(mut accum: u64, poly: u64, refin: bool, word: u64, bits: u8) -> u64 {
  debug_assert!((1..=64).contains(&bits));
  if refin {
    accum ^= word & bitmask(bits);
    for _ in 0..bits {
      let mask = 0u64.wrapping_sub(accum & 1);
      accum = (accum >> 1) ^ (poly & mask);
    }
  } else {
    accum ^= (word & bitmask(bits)) << (64 - bits as u32);
    for _ in 0..bits {
      let mask = 0u64.wrapping_sub(accum >> 63);
      accum = (accum << 1) ^ (poly & mask);
    }
  }
  accum
}

/// Slice-by-1 update: one table lookup per input byte.
#[inline]
pub(crate) fn bytewise(mut accum: u64, refin: bool, table: &ByteTable, data: &[u8]) -> u64 {
  if refin {
    for &byte in data {
      let index = ((accum ^ u64::from(byte)) & 0xFF) as usize;
      accum = table[index] ^ (accum >> 8);
    }
  } else {
    for &byte in data {
      let index = (((accum >> 56) ^ u64::from(byte)) & 0xFF) as usize;
      accum = table[index] ^ (accum << 8);
    }
  }
  accum
}

/// Slice-by-8 update: eight bytes per iteration through eight tables.
///
/// The word table stores entries pre-byteswapped whenever the host byte order
/// disagrees with the `refin` orientation, so the body XORs naked 64-bit
/// loads into the accumulator. Unaligned leading bytes and the sub-word tail
/// drain through the bytewise kernel; the accumulator is oriented once before
/// the body and once after, never per iteration.
#[inline]
pub(crate) fn wordwise(
  mut accum: u64,
  refin: bool,
  byte_table: &ByteTable,
  word_table: &WordTable,
  data: &[u8],
) -> u64 {
  // SAFETY: u64 has no invalid bit patterns and no alignment-dependent
  // semantics; align_to only repartitions the byte slice.
  let (head, body, tail) = unsafe { data.align_to::<u64>() };

  accum = bytewise(accum, refin, byte_table, head);

  if !body.is_empty() {
    let reorient = cfg!(target_endian = "little") != refin;
    if reorient {
      accum = accum.swap_bytes();
    }
    if cfg!(target_endian = "little") {
      for &chunk in body {
        accum = fold_le(word_table, accum ^ chunk);
      }
    } else {
      for &chunk in body {
        accum = fold_be(word_table, accum ^ chunk);
      }
    }
    if reorient {
      accum = accum.swap_bytes();
    }
  }

  bytewise(accum, refin, byte_table, tail)
}

/// Combine stage for little-endian loads: the lowest byte of `value` is the
/// earliest input byte and meets the highest-numbered slice table.
#[inline]
fn fold_le(t: &WordTable, value: u64) -> u64 {
  t[7][(value & 0xFF) as usize]
    ^ t[6][((value >> 8) & 0xFF) as usize]
    ^ t[5][((value >> 16) & 0xFF) as usize]
    ^ t[4][((value >> 24) & 0xFF) as usize]
    ^ t[3][((value >> 32) & 0xFF) as usize]
    ^ t[2][((value >> 40) & 0xFF) as usize]
    ^ t[1][((value >> 48) & 0xFF) as usize]
    ^ t[0][(value >> 56) as usize]
}

/// Combine stage for big-endian loads.
#[inline]
fn fold_be(t: &WordTable, value: u64) -> u64 {
  t[0][(value & 0xFF) as usize]
    ^ t[1][((value >> 8) & 0xFF) as usize]
    ^ t[2][((value >> 16) & 0xFF) as usize]
    ^ t[3][((value >> 24) & 0xFF) as usize]
    ^ t[4][((value >> 32) & 0xFF) as usize]
    ^ t[5][((value >> 40) & 0xFF) as usize]
    ^ t[6][((value >> 48) & 0xFF) as usize]
    ^ t[7][(value >> 56) as usize]
}
