//! The configurable CRC engine.
//!
//! A [`Crc`] is built from a [`CrcParams`] (by value, by catalogue name, or
//! through the builder) plus an update [`Method`]. At configure time every
//! nominal integer is internalized into one canonical orientation decided by
//! `refin`, after which all three kernels share a single width-independent
//! code path; `width` resurfaces only in validation and finalization.
//!
//! Digests are lazy: updates set a dirty flag, and finalization (undo the
//! left-alignment, reflect if `refin != refout`, XOR `xorout`) runs at most
//! once per dirty state, caching the externalized result. A fresh or cleared
//! engine therefore reports its initial value until data arrives.

use alloc::{string::String, sync::Arc};
use core::{fmt, str::FromStr};

use crate::{
  bits::{bitmask, bitswap},
  cache, catalog, combine,
  error::CrcError,
  kernels,
  params::CrcParams,
  tables::{ByteTable, WordTable},
};

/// Update kernel selector.
///
/// The kernels trade table memory for speed and are observationally
/// equivalent; an engine can switch between them mid-stream without
/// disturbing the digest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Method {
  /// Bit-by-bit, no tables. Smallest footprint, slowest.
  Bitwise,
  /// Slice-by-1 through a 256-entry table (2 KiB).
  Bytewise,
  /// Slice-by-8 through eight 256-entry tables (16 KiB). Fastest.
  #[default]
  Wordwise,
}

impl Method {
  /// Canonical lowercase name.
  #[must_use]
  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::Bitwise => "bitwise",
      Self::Bytewise => "bytewise",
      Self::Wordwise => "wordwise",
    }
  }
}

impl fmt::Display for Method {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Method {
  type Err = CrcError;

  fn from_str(name: &str) -> Result<Self, CrcError> {
    match name {
      "bitwise" => Ok(Self::Bitwise),
      "bytewise" => Ok(Self::Bytewise),
      "wordwise" => Ok(Self::Wordwise),
      _ => Err(CrcError::UnknownMethod),
    }
  }
}

/// Kernel state: the selector together with the tables it needs.
///
/// Holding the tables inside the variant makes the structural invariants
/// unrepresentable to violate: the bytewise kernel always has its byte table,
/// and the wordwise kernel additionally keeps the byte table for its
/// alignment prelude and tail.
#[derive(Clone)]
enum Kernel {
  Bitwise,
  Bytewise(Arc<ByteTable>),
  Wordwise(Arc<ByteTable>, Arc<WordTable>),
}

impl Kernel {
  fn attach(params: &CrcParams, method: Method) -> Self {
    match method {
      Method::Bitwise => Self::Bitwise,
      Method::Bytewise => Self::Bytewise(cache::bytewise(params)),
      Method::Wordwise => {
        let bytes = cache::bytewise(params);
        let words = cache::wordwise(params, &bytes);
        Self::Wordwise(bytes, words)
      }
    }
  }

  const fn method(&self) -> Method {
    match self {
      Self::Bitwise => Method::Bitwise,
      Self::Bytewise(_) => Method::Bytewise,
      Self::Wordwise(_, _) => Method::Wordwise,
    }
  }
}

/// Digest bytes: big-endian, `ceil(width / 8)` long.
///
/// A small inline buffer so `no_std` callers get digest bytes without
/// allocating.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
  bytes: [u8; Crc::MAX_DIGEST_SIZE],
  len: u8,
}

impl Digest {
  /// The digest bytes.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    self.bytes.get(..self.len as usize).unwrap_or(&self.bytes)
  }
}

impl core::ops::Deref for Digest {
  type Target = [u8];

  #[inline]
  fn deref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl AsRef<[u8]> for Digest {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl fmt::Debug for Digest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Digest(")?;
    for byte in self.as_bytes() {
      write!(f, "{byte:02x}")?;
    }
    write!(f, ")")
  }
}

impl PartialEq<[u8]> for Digest {
  fn eq(&self, other: &[u8]) -> bool {
    self.as_bytes() == other
  }
}

impl PartialEq<&[u8]> for Digest {
  fn eq(&self, other: &&[u8]) -> bool {
    self.as_bytes() == *other
  }
}

/// A configured CRC engine.
///
/// ```
/// use checksum::{Crc, Method};
///
/// let mut crc = Crc::from_name("crc-32")?;
/// crc.update(b"123456789");
/// assert_eq!(crc.finalize(), 0xCBF4_3926);
/// assert_eq!(crc.hexdigest(), "cbf43926");
///
/// // Any width, any reflection combination:
/// let mut crc = Crc::from_name("crc-5-usb")?;
/// crc.update(b"123456789");
/// assert_eq!(crc.finalize(), 0x19);
/// # Ok::<(), checksum::CrcError>(())
/// ```
///
/// `Clone` snapshots the accumulator and shares the lookup tables; the clone
/// and the original evolve independently afterwards.
#[derive(Clone)]
pub struct Crc {
  params: CrcParams,
  /// Internalized polynomial.
  poly: u64,
  /// Internalized configured initial value.
  init: u64,
  /// Internalized running register.
  accum: u64,
  /// Externalized digest, valid iff `!dirty`.
  result: u64,
  dirty: bool,
  kernel: Kernel,
}

impl Crc {
  /// Largest digest size in bytes (width 64).
  pub const MAX_DIGEST_SIZE: usize = 8;
  /// Input block size in bytes; CRCs consume single bytes.
  pub const BLOCK_SIZE: usize = 1;

  /// Build an engine from validated parameters.
  ///
  /// # Errors
  ///
  /// The per-field range errors of [`CrcParams::validate`].
  pub fn new(params: CrcParams, method: Method) -> Result<Self, CrcError> {
    params.validate()?;
    Ok(Self::build(params, method))
  }

  /// Build an engine from a catalogue name with the default (wordwise)
  /// method.
  ///
  /// # Errors
  ///
  /// [`CrcError::UnknownTemplate`] when the name is not in the catalogue.
  pub fn from_name(name: &str) -> Result<Self, CrcError> {
    Self::new(CrcParams::named(name)?, Method::default())
  }

  /// Construction backend for parameter sets already known to be valid.
  fn build(params: CrcParams, method: Method) -> Self {
    let init = params.internalize(params.init);
    Self {
      params,
      poly: params.internalize(params.poly),
      init,
      accum: init,
      result: params.init,
      dirty: false,
      kernel: Kernel::attach(&params, method),
    }
  }

  // ───────────────────────────────────────────────────────────────────────────
  // Accessors
  // ───────────────────────────────────────────────────────────────────────────

  /// The nominal configuration.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> CrcParams {
    self.params
  }

  /// CRC width in bits.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u8 {
    self.params.width
  }

  /// Generator polynomial, normal form.
  #[inline]
  #[must_use]
  pub const fn poly(&self) -> u64 {
    self.params.poly
  }

  /// Configured initial register value.
  #[inline]
  #[must_use]
  pub const fn init(&self) -> u64 {
    self.params.init
  }

  /// Whether input bytes are reflected.
  #[inline]
  #[must_use]
  pub const fn refin(&self) -> bool {
    self.params.refin
  }

  /// Whether the final register is reflected.
  #[inline]
  #[must_use]
  pub const fn refout(&self) -> bool {
    self.params.refout
  }

  /// Final XOR mask.
  #[inline]
  #[must_use]
  pub const fn xorout(&self) -> u64 {
    self.params.xorout
  }

  /// Digest length in bytes: `ceil(width / 8)`.
  #[inline]
  #[must_use]
  pub const fn digest_size(&self) -> usize {
    self.params.digest_size()
  }

  /// Currently selected update method.
  #[inline]
  #[must_use]
  pub const fn method(&self) -> Method {
    self.kernel.method()
  }

  /// Switch update kernels, keeping the running state.
  ///
  /// Kernels are observationally equivalent, so this never changes any
  /// future digest; it only trades table memory for speed.
  pub fn set_method(&mut self, method: Method) {
    if method != self.method() {
      self.kernel = Kernel::attach(&self.params, method);
    }
  }

  // ───────────────────────────────────────────────────────────────────────────
  // Updates
  // ───────────────────────────────────────────────────────────────────────────

  /// Feed a byte buffer through the selected kernel.
  ///
  /// Empty input is a no-op and leaves the dirty flag untouched.
  pub fn update(&mut self, data: &[u8]) {
    if data.is_empty() {
      return;
    }
    self.accum = match &self.kernel {
      Kernel::Bitwise => kernels::bitwise(self.accum, self.poly, self.params.refin, data),
      Kernel::Bytewise(bytes) => kernels::bytewise(self.accum, self.params.refin, bytes, data),
      Kernel::Wordwise(bytes, words) => {
        kernels::wordwise(self.accum, self.params.refin, bytes, words, data)
      }
    };
    self.dirty = true;
  }

  /// Feed the low `bits` bits of `word`, MSb-first in the non-reflected
  /// orientation and LSb-first in the reflected one. Bits above `bits` are
  /// ignored. `bits == 0` is a no-op.
  ///
  /// # Errors
  ///
  /// [`CrcError::WidthOutOfRange`] when `bits > 64`.
  pub fn update_word(&mut self, word: u64, bits: u8) -> Result<(), CrcError> {
    if bits > crate::MAX_WIDTH {
      return Err(CrcError::WidthOutOfRange);
    }
    if bits == 0 {
      return Ok(());
    }
    self.accum = kernels::word(self.accum, self.poly, self.params.refin, word, bits);
    self.dirty = true;
    Ok(())
  }

  /// Feed `count` zero bytes through the selected kernel.
  pub fn zero_bytes(&mut self, count: usize) {
    if count == 0 {
      return;
    }
    static ZEROES: [u8; 256] = [0u8; 256];
    let mut remaining = count;
    while remaining > 0 {
      let chunk = remaining.min(ZEROES.len());
      self.update(&ZEROES[..chunk]);
      remaining -= chunk;
    }
  }

  /// Feed `count` zero bits: whole bytes first, then the sub-byte remainder
  /// as a partial word.
  pub fn zero_bits(&mut self, count: usize) {
    self.zero_bytes(count / 8);
    let rem = (count % 8) as u8;
    if rem != 0 {
      self.accum = kernels::word(self.accum, self.poly, self.params.refin, 0, rem);
      self.dirty = true;
    }
  }

  // ───────────────────────────────────────────────────────────────────────────
  // Finalization
  // ───────────────────────────────────────────────────────────────────────────

  /// Finalize an internalized register into an externalized digest value.
  fn finalize_accum(&self, accum: u64) -> u64 {
    let width = self.params.width;
    let mut value = accum;
    if !self.params.refin {
      value >>= 64 - width as u32;
    }
    if self.params.refin == self.params.refout {
      value &= bitmask(width);
    } else {
      value = bitswap(value, width);
    }
    value ^ self.params.xorout
  }

  /// Digest of all bytes fed since the last clear, as an integer.
  ///
  /// Idempotent and non-mutating; an engine that was never updated reports
  /// its initial value.
  #[inline]
  #[must_use]
  pub fn finalize(&self) -> u64 {
    if self.dirty { self.finalize_accum(self.accum) } else { self.result }
  }

  /// Like [`finalize`](Self::finalize), but caches the externalized result so
  /// repeated digests of an unchanged state cost nothing.
  fn finalize_cached(&mut self) -> u64 {
    if self.dirty {
      self.result = self.finalize_accum(self.accum);
      self.dirty = false;
    }
    self.result
  }

  /// Digest as big-endian bytes, `ceil(width / 8)` long.
  pub fn digest(&mut self) -> Digest {
    let value = self.finalize_cached();
    let size = self.digest_size();
    let mut bytes = [0u8; Self::MAX_DIGEST_SIZE];
    let all = value.to_be_bytes();
    if let (Some(dst), Some(src)) = (bytes.get_mut(..size), all.get(Self::MAX_DIGEST_SIZE - size..)) {
      dst.copy_from_slice(src);
    }
    Digest { bytes, len: size as u8 }
  }

  /// Digest as lowercase hex, `ceil(width / 4)` nibbles rounded up to an even
  /// count.
  pub fn hexdigest(&mut self) -> String {
    let value = self.finalize_cached();
    let mut nibbles = (self.params.width as usize).div_ceil(4);
    nibbles += nibbles & 1;

    const HEXCHARS: [u8; 16] = *b"0123456789abcdef";
    let mut out = String::with_capacity(nibbles);
    for index in (0..nibbles).rev() {
      let nibble = ((value >> (index * 4)) & 0xF) as usize;
      out.push(char::from(HEXCHARS[nibble]));
    }
    out
  }

  // ───────────────────────────────────────────────────────────────────────────
  // Reset
  // ───────────────────────────────────────────────────────────────────────────

  /// Reset to the configured initial value.
  pub fn clear(&mut self) {
    self.accum = self.init;
    self.result = self.params.init;
    self.dirty = false;
  }

  /// Reset, resuming from the provided register value instead of the
  /// configured one.
  ///
  /// # Errors
  ///
  /// [`CrcError::InitOutOfRange`] when `init` exceeds the width mask.
  pub fn clear_with(&mut self, init: u64) -> Result<(), CrcError> {
    if init > self.params.mask() {
      return Err(CrcError::InitOutOfRange);
    }
    self.accum = self.params.internalize(init);
    self.result = init;
    self.dirty = false;
    Ok(())
  }

  // ───────────────────────────────────────────────────────────────────────────
  // Combine
  // ───────────────────────────────────────────────────────────────────────────

  /// Digest of `A || B` from `crc1 = crc(A)`, `crc2 = crc(B)` and
  /// `len2 = |B|`, without access to either byte stream.
  ///
  /// Both operands must have been produced under this engine's configuration.
  /// The engine's own state is not consulted or modified.
  ///
  /// # Errors
  ///
  /// [`CrcError::Crc1OutOfRange`] / [`CrcError::Crc2OutOfRange`] when an
  /// operand exceeds the width mask.
  pub fn combine(&self, crc1: u64, crc2: u64, len2: usize) -> Result<u64, CrcError> {
    let mask = self.params.mask();
    if crc1 > mask {
      return Err(CrcError::Crc1OutOfRange);
    }
    if crc2 > mask {
      return Err(CrcError::Crc2OutOfRange);
    }
    Ok(self.combine_masked(crc1, crc2, len2))
  }

  /// Combine backend for operands already reduced to the width mask.
  pub(crate) fn combine_masked(&self, crc1: u64, crc2: u64, len2: usize) -> u64 {
    if len2 == 0 {
      return crc1;
    }

    // Undo xorout and refout to recover the nominal-form registers.
    let reg1 = self.unapply_output(crc1);
    let reg2 = self.unapply_output(crc2);

    // Loading crc1 with init XOR-ed away makes the zero-byte shift advance
    // the register exactly as if B's bytes had followed A's, without
    // re-introducing the preset: crc(A||B) = shift(crc(A) ^ init) ^ crc(B)
    // over the internalized state.
    let loaded = self.params.internalize(reg1) ^ self.init;
    let shifted = combine::zero_shift(self.params.refin, self.poly, loaded, len2);
    self.finalize_accum(shifted ^ self.params.internalize(reg2))
  }

  /// Invert the digest-side transforms: XOR `xorout` away, then undo the
  /// output reflection.
  fn unapply_output(&self, crc: u64) -> u64 {
    let crc = crc ^ self.params.xorout;
    if self.params.refout { bitswap(crc, self.params.width) } else { crc }
  }
}

impl Default for Crc {
  /// The default template (`"crc-32"`, CRC-32/ISO-HDLC) with the default
  /// wordwise method.
  fn default() -> Self {
    Self::build(catalog::DEFAULT_TEMPLATE, Method::default())
  }
}

impl fmt::Debug for Crc {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc")
      .field("params", &self.params)
      .field("method", &self.method())
      .field("accum", &self.accum)
      .field("dirty", &self.dirty)
      .finish_non_exhaustive()
  }
}

impl traits::Checksum for Crc {
  type Output = u64;

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Crc::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> u64 {
    Crc::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    self.clear();
  }
}

impl traits::ChecksumCombine for Crc {
  /// Infallible combine: operands are reduced to the register width first.
  #[inline]
  fn combine(&self, crc_a: u64, crc_b: u64, len_b: usize) -> u64 {
    let mask = self.params.mask();
    self.combine_masked(crc_a & mask, crc_b & mask, len_b)
  }
}

#[cfg(feature = "std")]
impl std::io::Write for Crc {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.update(buf);
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const CHECK_INPUT: &[u8] = b"123456789";

  #[test]
  fn test_default_is_crc32() {
    let mut crc = Crc::default();
    assert_eq!(crc.width(), 32);
    assert_eq!(crc.method(), Method::Wordwise);
    assert_eq!(crc.finalize(), crc.init());
    crc.update(CHECK_INPUT);
    assert_eq!(crc.finalize(), 0xCBF4_3926);
  }

  #[test]
  fn test_fresh_engine_reports_init() {
    let crc = Crc::from_name("crc-16-ibm-3740").unwrap();
    // Lazy digest: nothing fed yet, so the nominal init comes back as-is,
    // not the CRC of the empty string.
    assert_eq!(crc.finalize(), 0xFFFF);
  }

  #[test]
  fn test_empty_update_keeps_state_clean() {
    let mut crc = Crc::from_name("crc-32").unwrap();
    crc.update(b"");
    assert!(!crc.dirty);
    crc.zero_bytes(0);
    crc.zero_bits(0);
    assert!(!crc.dirty);
    let _ = crc.update_word(1, 0);
    assert!(!crc.dirty);
    assert_eq!(crc.finalize(), crc.init());
  }

  #[test]
  fn test_digest_and_hexdigest_forms() {
    let mut crc = Crc::from_name("crc-16-ibm-3740").unwrap();
    crc.update(CHECK_INPUT);
    assert_eq!(crc.finalize(), 0x29B1);
    assert_eq!(crc.digest(), b")\xb1"[..]);
    assert_eq!(crc.hexdigest(), "29b1");
  }

  #[test]
  fn test_odd_width_digest_forms() {
    // 12-bit digest rounds up to 2 bytes and 4 nibbles.
    let mut crc = Crc::from_name("crc-12-umts").unwrap();
    crc.update(CHECK_INPUT);
    assert_eq!(crc.finalize(), 0xDAF);
    assert_eq!(crc.digest(), b"\x0d\xaf"[..]);
    assert_eq!(crc.hexdigest(), "0daf");

    // 10-bit digest rounds up to 4 nibbles too.
    let mut crc = Crc::from_name("crc-10-gsm").unwrap();
    crc.update(CHECK_INPUT);
    assert_eq!(crc.finalize(), 0x12A);
    assert_eq!(crc.hexdigest(), "012a");
  }

  #[test]
  fn test_digest_is_idempotent() {
    let mut crc = Crc::from_name("crc-64-xz").unwrap();
    crc.update(CHECK_INPUT);
    let first = crc.finalize();
    assert_eq!(crc.finalize(), first);
    assert_eq!(crc.digest().as_bytes(), &first.to_be_bytes()[..]);
    assert_eq!(crc.finalize(), first);
    crc.update(b"more");
    assert_ne!(crc.finalize(), first);
  }

  #[test]
  fn test_clear_variants() {
    let mut crc = Crc::from_name("crc-16-ibm-3740").unwrap();
    crc.update(CHECK_INPUT);
    assert_eq!(crc.finalize(), 0x29B1);

    crc.clear();
    assert_eq!(crc.finalize(), 0xFFFF);
    crc.update(CHECK_INPUT);
    assert_eq!(crc.finalize(), 0x29B1);

    // Resuming from a previous digest continues the stream.
    crc.clear_with(0x29B1).unwrap();
    assert_eq!(crc.finalize(), 0x29B1);
    crc.update(b"abcdef");
    let resumed = crc.finalize();

    let mut whole = Crc::from_name("crc-16-ibm-3740").unwrap();
    whole.update(b"123456789abcdef");
    assert_eq!(resumed, whole.finalize());

    assert_eq!(crc.clear_with(0x1_0000), Err(CrcError::InitOutOfRange));
  }

  #[test]
  fn test_update_word_bounds() {
    let mut crc = Crc::from_name("crc-64-xz").unwrap();
    assert_eq!(crc.update_word(0, 65), Err(CrcError::WidthOutOfRange));
    crc.update_word(0, 64).unwrap();
    assert!(crc.dirty);
  }

  #[test]
  fn test_update_word_bytes_match_update() {
    let mut by_words = Crc::from_name("crc-24-openpgp").unwrap();
    for &byte in CHECK_INPUT {
      by_words.update_word(u64::from(byte), 8).unwrap();
    }
    let mut by_bytes = Crc::from_name("crc-24-openpgp").unwrap();
    by_bytes.update(CHECK_INPUT);
    assert_eq!(by_words.finalize(), by_bytes.finalize());
  }

  #[test]
  fn test_zero_feeds_match_explicit_zeros() {
    let mut via_zero = Crc::from_name("crc-32").unwrap();
    via_zero.update(CHECK_INPUT);
    via_zero.zero_bytes(300);

    let mut via_update = Crc::from_name("crc-32").unwrap();
    via_update.update(CHECK_INPUT);
    via_update.update(&[0u8; 300]);
    assert_eq!(via_zero.finalize(), via_update.finalize());

    via_zero.zero_bits(11);
    via_update.zero_bytes(1);
    via_update.update_word(0, 3).unwrap();
    assert_eq!(via_zero.finalize(), via_update.finalize());
  }

  #[test]
  fn test_set_method_preserves_state() {
    let mut crc = Crc::new(CrcParams::named("crc-40-gsm").unwrap(), Method::Bitwise).unwrap();
    crc.update(b"1234");
    crc.set_method(Method::Wordwise);
    assert_eq!(crc.method(), Method::Wordwise);
    crc.update(b"56789");
    assert_eq!(crc.finalize(), 0xD4_164F_C646);
  }

  #[test]
  fn test_clone_is_independent() {
    let mut original = Crc::from_name("crc-32").unwrap();
    original.update(b"12345");
    let mut copy = original.clone();
    assert_eq!(original.finalize(), copy.finalize());

    copy.update(b"6789");
    assert_ne!(original.finalize(), copy.finalize());
    assert_eq!(copy.finalize(), 0xCBF4_3926);

    original.update(b"6789");
    assert_eq!(original.finalize(), 0xCBF4_3926);
  }

  #[test]
  fn test_combine_matches_concatenation() {
    let engine = Crc::from_name("crc-32").unwrap();
    let mut a = Crc::from_name("crc-32").unwrap();
    a.update(b"12345");
    let mut b = Crc::from_name("crc-32").unwrap();
    b.update(b"6789");
    let combined = engine.combine(a.finalize(), b.finalize(), 4).unwrap();
    assert_eq!(combined, 0xCBF4_3926);
  }

  #[test]
  fn test_combine_len_zero_and_ranges() {
    let engine = Crc::from_name("crc-16-modbus").unwrap();
    assert_eq!(engine.combine(0x1234, 0x4B37, 0).unwrap(), 0x1234);
    assert_eq!(engine.combine(0x1_0000, 0, 1), Err(CrcError::Crc1OutOfRange));
    assert_eq!(engine.combine(0, 0x1_0000, 1), Err(CrcError::Crc2OutOfRange));
  }

  #[test]
  fn test_combine_leaves_state_untouched() {
    let mut engine = Crc::from_name("crc-32").unwrap();
    engine.update(b"12345");
    let before = engine.finalize();
    let _ = engine.combine(0xDEAD_BEEF, 0x1234_5678, 1000).unwrap();
    assert_eq!(engine.finalize(), before);
    engine.update(b"6789");
    assert_eq!(engine.finalize(), 0xCBF4_3926);
  }

  #[test]
  fn test_method_parsing() {
    assert_eq!("bitwise".parse::<Method>().unwrap(), Method::Bitwise);
    assert_eq!("bytewise".parse::<Method>().unwrap(), Method::Bytewise);
    assert_eq!("wordwise".parse::<Method>().unwrap(), Method::Wordwise);
    assert_eq!("Bitwise".parse::<Method>(), Err(CrcError::UnknownMethod));
    assert_eq!("unknown".parse::<Method>(), Err(CrcError::UnknownMethod));
  }

  #[test]
  fn test_boundary_widths() {
    // width 1: parity-flavored CRC.
    let params = CrcParams { width: 1, poly: 1, init: 0, refin: false, refout: false, xorout: 0 };
    let mut narrow = Crc::new(params, Method::Wordwise).unwrap();
    narrow.update(CHECK_INPUT);
    let check = narrow.finalize();
    assert!(check <= 1);
    let mut bitwise = Crc::new(params, Method::Bitwise).unwrap();
    bitwise.update(CHECK_INPUT);
    assert_eq!(bitwise.finalize(), check);

    // width 64 with all-ones everything.
    let params = CrcParams {
      width: 64,
      poly: u64::MAX,
      init: u64::MAX,
      refin: true,
      refout: true,
      xorout: u64::MAX,
    };
    let mut wide = Crc::new(params, Method::Wordwise).unwrap();
    wide.update(CHECK_INPUT);
    let check = wide.finalize();
    let engine = Crc::new(params, Method::Bitwise).unwrap();
    let combined = engine.combine(
      engine.checksum_slice(b"12345"),
      engine.checksum_slice(b"6789"),
      4,
    );
    assert_eq!(combined.unwrap(), check);
  }

  impl Crc {
    /// Test helper: one-shot digest against this configuration.
    fn checksum_slice(&self, data: &[u8]) -> u64 {
      let mut fresh = self.clone();
      fresh.clear();
      fresh.update(data);
      fresh.finalize()
    }
  }

  #[cfg(feature = "std")]
  #[test]
  fn test_io_write() {
    use std::io::Write;

    let mut crc = Crc::from_name("crc-32").unwrap();
    write!(crc, "12345").unwrap();
    write!(crc, "6789").unwrap();
    assert_eq!(crc.finalize(), 0xCBF4_3926);
  }
}
