//! Cross-kernel and algebraic invariants over a diverse template selection.

use checksum::{Checksum as _, Crc, CrcError, CrcParams, Method};

/// Templates chosen to cover every interesting corner: narrow and full
/// widths, both reflection orientations, the lone mixed-reflection entry,
/// zero and all-ones presets.
const TEMPLATES: &[&str] = &[
  "crc-3-rohc",
  "crc-5-usb",
  "crc-8-smbus",
  "crc-12-umts",
  "crc-16-xmodem",
  "crc-16-modbus",
  "crc-24-openpgp",
  "crc-31-philips",
  "crc-32-iso-hdlc",
  "crc-40-gsm",
  "crc-64-ecma-182",
  "crc-64-xz",
];

const LENGTHS: &[usize] = &[0, 1, 2, 3, 4, 7, 8, 9, 15, 16, 17, 31, 32, 63, 64, 255, 256, 1024, 2048];

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed | 1;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

fn engines(name: &str) -> [Crc; 3] {
  let params = CrcParams::named(name).unwrap();
  [
    Crc::new(params, Method::Bitwise).unwrap(),
    Crc::new(params, Method::Bytewise).unwrap(),
    Crc::new(params, Method::Wordwise).unwrap(),
  ]
}

#[test]
fn kernels_agree_on_every_length() {
  for name in TEMPLATES {
    for &len in LENGTHS {
      let data = gen_bytes(len, 0x0123_4567_89AB_CDEF ^ len as u64);
      let digests: Vec<u64> = engines(name)
        .iter_mut()
        .map(|crc| {
          crc.update(&data);
          crc.finalize()
        })
        .collect();
      assert_eq!(digests[0], digests[1], "{name} bitwise/bytewise at len={len}");
      assert_eq!(digests[0], digests[2], "{name} bitwise/wordwise at len={len}");
    }
  }
}

#[test]
fn kernels_agree_at_every_alignment() {
  // The wordwise prelude consumes 0..7 leading bytes depending on where the
  // buffer happens to sit; slide a window to hit every offset.
  for name in TEMPLATES {
    let data = gen_bytes(129, 0xD1B5_4A32_D192_ED03);
    let [mut bitwise, _, mut wordwise] = engines(name);
    for offset in 0..16 {
      let slice = &data[offset..];
      bitwise.clear();
      bitwise.update(slice);
      wordwise.clear();
      wordwise.update(slice);
      assert_eq!(bitwise.finalize(), wordwise.finalize(), "{name} offset {offset}");
    }
  }
}

#[test]
fn incremental_updates_match_oneshot() {
  for name in TEMPLATES {
    let data = gen_bytes(515, 0x5D58_39A7_3D87_1CEB);
    let [_, _, mut oneshot] = engines(name);
    oneshot.update(&data);
    let expected = oneshot.finalize();

    for &split in &[0usize, 1, 7, 8, 64, 256, 514, 515] {
      let (a, b) = data.split_at(split);
      let [_, mut bytewise, mut wordwise] = engines(name);
      bytewise.update(a);
      bytewise.update(b);
      assert_eq!(bytewise.finalize(), expected, "{name} split {split}");

      // Mixed kernels across the split still converge.
      wordwise.update(a);
      wordwise.set_method(Method::Bitwise);
      wordwise.update(b);
      assert_eq!(wordwise.finalize(), expected, "{name} mixed split {split}");
    }
  }
}

#[test]
fn combine_matches_concatenation() {
  for name in TEMPLATES {
    let data = gen_bytes(384, 0x9E37_79B9_7F4A_7C15);
    let [engine, _, _] = engines(name);
    let expected = engine.checksum(&data);

    for &split in &[0usize, 1, 8, 99, 256, 383, 384] {
      let (a, b) = data.split_at(split);
      let combined = engine.combine(engine.checksum(a), engine.checksum(b), b.len()).unwrap();
      assert_eq!(combined, expected, "{name} split {split}");
    }
  }
}

#[test]
fn combine_agrees_with_zero_feeding() {
  // The matrix shortcut must be indistinguishable from literally streaming
  // zero bytes after the first part.
  for name in TEMPLATES {
    let [engine, _, _] = engines(name);
    let a = gen_bytes(37, 1);
    let crc_a = engine.checksum(&a);
    let crc_empty = engine.checksum(b"");

    for &len in &[1usize, 2, 8, 100, 1000] {
      let mut padded = a.clone();
      padded.extend(std::iter::repeat_n(0u8, len));
      let expected = engine.checksum(&padded);

      // crc(A || 0^len) == combine(crc(A), crc(0^len), len)
      let zeros = vec![0u8; len];
      let combined = engine.combine(crc_a, engine.checksum(&zeros), len).unwrap();
      assert_eq!(combined, expected, "{name} len {len}");

      // ... and appending an empty second part through combine is exact too.
      assert_eq!(engine.combine(crc_a, crc_empty, 0).unwrap(), crc_a, "{name}");
    }
  }
}

#[test]
fn zero_feeds_are_equivalent() {
  for name in TEMPLATES {
    let [_, _, mut via_bits] = engines(name);
    let [_, _, mut via_bytes] = engines(name);
    via_bits.update(b"seed");
    via_bytes.update(b"seed");

    via_bits.zero_bits(8 * 21 + 5);
    via_bytes.zero_bytes(21);
    via_bytes.update_word(0, 5).unwrap();
    assert_eq!(via_bits.finalize(), via_bytes.finalize(), "{name}");
  }
}

#[test]
fn digest_is_stable_across_reads() {
  for name in TEMPLATES {
    let [_, mut crc, _] = engines(name);
    crc.update(b"123456789");
    let first = crc.finalize();
    for _ in 0..3 {
      assert_eq!(crc.finalize(), first, "{name}");
      assert_eq!(crc.digest().as_bytes().len(), crc.digest_size(), "{name}");
      assert_eq!(crc.hexdigest(), crc.hexdigest(), "{name}");
    }
    crc.update(b"x");
    assert_ne!(crc.finalize(), first, "{name} must change after more data");
  }
}

#[test]
fn clones_do_not_interfere() {
  for name in TEMPLATES {
    let [_, _, mut original] = engines(name);
    original.update(b"12345");
    let mut copy = original.clone();
    assert_eq!(original.finalize(), copy.finalize(), "{name}");

    copy.update(b"6789");
    original.update(b"ABCD");
    let [_, _, mut reference] = engines(name);
    reference.update(b"123456789");
    assert_eq!(copy.finalize(), reference.finalize(), "{name}");
    assert_ne!(copy.finalize(), original.finalize(), "{name}");
  }
}

#[test]
fn resume_via_clear_with() {
  for name in TEMPLATES {
    let params = CrcParams::named(name).unwrap();
    // clear_with takes a nominal initial value, so feeding a digest back in
    // only resumes the stream when finalization is the identity on the
    // register: no xorout, no reflection anywhere (xmodem, openpgp, ...).
    if params.xorout != 0 || params.refin || params.refout {
      continue;
    }
    let [_, _, mut split_run] = engines(name);
    split_run.update(b"12345");
    let midpoint = split_run.finalize();

    let [_, _, mut resumed] = engines(name);
    resumed.clear_with(midpoint).unwrap();
    resumed.update(b"6789");

    let [_, _, mut whole] = engines(name);
    whole.update(b"123456789");
    assert_eq!(resumed.finalize(), whole.finalize(), "{name}");
  }
}

#[test]
fn boundary_widths_work_end_to_end() {
  for refin in [false, true] {
    for width in [1u8, 2, 63, 64] {
      let params = CrcParams {
        width,
        poly: 1,
        init: 0,
        refin,
        refout: refin,
        xorout: 0,
      };
      let data = gen_bytes(100, u64::from(width));

      let mut bitwise = Crc::new(params, Method::Bitwise).unwrap();
      bitwise.update(&data);
      let mut wordwise = Crc::new(params, Method::Wordwise).unwrap();
      wordwise.update(&data);
      assert_eq!(bitwise.finalize(), wordwise.finalize(), "width {width} refin {refin}");

      let engine = Crc::new(params, Method::Bytewise).unwrap();
      let (a, b) = data.split_at(41);
      let combined = engine.combine(engine.checksum(a), engine.checksum(b), b.len()).unwrap();
      assert_eq!(combined, bitwise.finalize(), "width {width} refin {refin} combine");
    }
  }
}

#[test]
fn invalid_configurations_are_rejected() {
  let valid = CrcParams { width: 8, poly: 0x07, init: 0, refin: false, refout: false, xorout: 0 };
  assert!(Crc::new(valid, Method::Wordwise).is_ok());

  let width_zero = CrcParams { width: 0, ..valid };
  assert_eq!(Crc::new(width_zero, Method::Wordwise).unwrap_err(), CrcError::WidthOutOfRange);

  let width_wide = CrcParams { width: 65, ..valid };
  assert_eq!(Crc::new(width_wide, Method::Wordwise).unwrap_err(), CrcError::WidthOutOfRange);

  let poly_zero = CrcParams { poly: 0, ..valid };
  assert_eq!(Crc::new(poly_zero, Method::Wordwise).unwrap_err(), CrcError::PolyOutOfRange);

  let poly_wide = CrcParams { poly: 0x100, ..valid };
  assert_eq!(Crc::new(poly_wide, Method::Wordwise).unwrap_err(), CrcError::PolyOutOfRange);

  let init_wide = CrcParams { init: 0x100, ..valid };
  assert_eq!(Crc::new(init_wide, Method::Wordwise).unwrap_err(), CrcError::InitOutOfRange);

  let xorout_wide = CrcParams { xorout: 0x100, ..valid };
  assert_eq!(Crc::new(xorout_wide, Method::Wordwise).unwrap_err(), CrcError::XoroutOutOfRange);

  assert_eq!(Crc::from_name("crc-99").unwrap_err(), CrcError::UnknownTemplate);
  assert_eq!("simd".parse::<Method>().unwrap_err(), CrcError::UnknownMethod);
}

#[test]
fn combine_operand_ranges() {
  let engine = Crc::from_name("crc-8-smbus").unwrap();
  assert_eq!(engine.combine(0x100, 0, 1).unwrap_err(), CrcError::Crc1OutOfRange);
  assert_eq!(engine.combine(0, 0x100, 1).unwrap_err(), CrcError::Crc2OutOfRange);
  assert!(engine.combine(0xFF, 0xFF, 1).is_ok());
}
