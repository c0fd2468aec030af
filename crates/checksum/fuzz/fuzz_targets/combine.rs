//! Combine correctness fuzzing.
//!
//! For an arbitrary parameter set and arbitrary data with an arbitrary split,
//! combining the two part-digests must reproduce the digest of the whole.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Checksum as _, Crc, CrcParams, Method};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
  width: u8,
  poly: u64,
  init: u64,
  refin: bool,
  refout: bool,
  xorout: u64,
  split: usize,
  data: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
  let width = input.width % 64 + 1;
  let mask = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };
  let params = CrcParams {
    width,
    poly: (input.poly & mask) | 1,
    init: input.init & mask,
    refin: input.refin,
    refout: input.refout,
    xorout: input.xorout & mask,
  };

  let engine = Crc::new(params, Method::Bytewise).expect("params are in range");
  let split = if input.data.is_empty() { 0 } else { input.split % (input.data.len() + 1) };
  let (a, b) = input.data.split_at(split);

  let combined = engine
    .combine(engine.checksum(a), engine.checksum(b), b.len())
    .expect("operands are masked digests");
  assert_eq!(combined, engine.checksum(input.data), "combine mismatch for {params:?} split {split}");
});
