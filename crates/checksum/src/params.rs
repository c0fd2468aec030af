//! CRC algorithm parameters.
//!
//! This module defines the six-field parameter model used across the crate,
//! following the conventions from the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/):
//! `(width, poly, init, refin, refout, xorout)`.

use crate::{
  MAX_WIDTH,
  bits::{bitmask, bitswap},
  catalog,
  error::CrcError,
};

/// CRC algorithm parameters.
///
/// All integer fields are *nominal*: LSb-aligned in the low `width` bits,
/// with the polynomial in normal (non-reflected) form and the implicit
/// `x^width` term omitted.
///
/// The struct is a plain value: cheap to copy, comparable, hashable. Engines
/// sharing an identical parameter set also share their lookup tables, keyed
/// by this exact value.
///
/// # Reflection
///
/// "Reflected" means bit-reversed. Most common CRCs (CRC-32, CRC-32C) reflect
/// both input and output, which maps to LSB-first processing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams {
  /// Width in bits, 1..=64.
  pub width: u8,
  /// Generator polynomial (without implicit high bit), 1..=mask.
  pub poly: u64,
  /// Initial register value, 0..=mask.
  pub init: u64,
  /// Reflect input bytes (LSB-first feed).
  pub refin: bool,
  /// Reflect the final register across `width` bits before XOR-out.
  pub refout: bool,
  /// Final XOR mask, 0..=mask.
  pub xorout: u64,
}

impl CrcParams {
  /// Look up a catalogue template by name.
  ///
  /// # Errors
  ///
  /// [`CrcError::UnknownTemplate`] when the name is not in the catalogue.
  pub fn named(name: &str) -> Result<Self, CrcError> {
    catalog::find(name).ok_or(CrcError::UnknownTemplate)
  }

  /// Range-check every field, in the fixed order width, poly, init, xorout.
  ///
  /// # Errors
  ///
  /// One distinct [`CrcError`] variant per rejected field.
  pub const fn validate(&self) -> Result<(), CrcError> {
    if self.width == 0 || self.width > MAX_WIDTH {
      return Err(CrcError::WidthOutOfRange);
    }
    let mask = bitmask(self.width);
    if self.poly == 0 || self.poly > mask {
      return Err(CrcError::PolyOutOfRange);
    }
    if self.init > mask {
      return Err(CrcError::InitOutOfRange);
    }
    if self.xorout > mask {
      return Err(CrcError::XoroutOutOfRange);
    }
    Ok(())
  }

  /// Mask covering the low `width` bits.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u64 {
    bitmask(self.width)
  }

  /// Number of whole bytes needed to hold a digest.
  #[inline]
  #[must_use]
  pub const fn digest_size(&self) -> usize {
    self.width.div_ceil(8) as usize
  }

  /// Convert a nominal value into the engine's canonical orientation.
  ///
  /// Reflected configurations store every integer bit-reversed across
  /// `width`; non-reflected ones left-align it in the 64-bit register. Either
  /// way the three kernels then share one bit orientation and reflection
  /// costs a single branch at configure time.
  #[inline]
  #[must_use]
  pub(crate) const fn internalize(&self, value: u64) -> u64 {
    if self.refin {
      bitswap(value, self.width)
    } else {
      value << (64 - self.width as u32)
    }
  }

  /// Inverse of [`internalize`](Self::internalize).
  #[inline]
  #[must_use]
  pub(crate) const fn externalize(&self, value: u64) -> u64 {
    if self.refin {
      bitswap(value, self.width)
    } else {
      value >> (64 - self.width as u32)
    }
  }
}

/// Assembles a [`CrcParams`] the way the original constructor did: an
/// optional template name provides the base and explicit fields override it.
///
/// With no fields at all, the default template (`"crc-32"`) applies. Without
/// a name, `width` and `poly` are mandatory.
///
/// ```
/// use checksum::CrcParams;
///
/// let params = CrcParams::builder().name("xmodem").init(0xFFFF).build()?;
/// assert_eq!(params.poly, 0x1021);
/// assert_eq!(params.init, 0xFFFF);
/// # Ok::<(), checksum::CrcError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Builder<'a> {
  name: Option<&'a str>,
  width: Option<u8>,
  poly: Option<u64>,
  init: Option<u64>,
  refin: Option<bool>,
  refout: Option<bool>,
  xorout: Option<u64>,
}

impl<'a> Builder<'a> {
  /// Base the configuration on a catalogue template.
  #[must_use]
  pub fn name(mut self, name: &'a str) -> Self {
    self.name = Some(name);
    self
  }

  /// Override the width.
  #[must_use]
  pub fn width(mut self, width: u8) -> Self {
    self.width = Some(width);
    self
  }

  /// Override the polynomial (normal form).
  #[must_use]
  pub fn poly(mut self, poly: u64) -> Self {
    self.poly = Some(poly);
    self
  }

  /// Override the initial register value.
  #[must_use]
  pub fn init(mut self, init: u64) -> Self {
    self.init = Some(init);
    self
  }

  /// Override input reflection.
  #[must_use]
  pub fn refin(mut self, refin: bool) -> Self {
    self.refin = Some(refin);
    self
  }

  /// Override output reflection.
  #[must_use]
  pub fn refout(mut self, refout: bool) -> Self {
    self.refout = Some(refout);
    self
  }

  /// Override the final XOR mask.
  #[must_use]
  pub fn xorout(mut self, xorout: u64) -> Self {
    self.xorout = Some(xorout);
    self
  }

  /// Resolve template and overrides into a validated parameter set.
  ///
  /// # Errors
  ///
  /// - [`CrcError::UnknownTemplate`] for an unlisted name
  /// - [`CrcError::WidthRequired`] / [`CrcError::PolyRequired`] when neither a
  ///   template nor an explicit field supplies them
  /// - the per-field range errors from [`CrcParams::validate`]
  pub fn build(self) -> Result<CrcParams, CrcError> {
    let untouched = self.name.is_none()
      && self.width.is_none()
      && self.poly.is_none()
      && self.init.is_none()
      && self.refin.is_none()
      && self.refout.is_none()
      && self.xorout.is_none();

    let base = if untouched {
      Some(catalog::DEFAULT_TEMPLATE)
    } else if let Some(name) = self.name {
      Some(CrcParams::named(name)?)
    } else {
      None
    };

    if let Some(width) = self.width {
      if width == 0 || width > MAX_WIDTH {
        return Err(CrcError::WidthOutOfRange);
      }
    }
    let width = self.width.or(base.map(|b| b.width)).ok_or(CrcError::WidthRequired)?;

    let poly = self.poly.or(base.map(|b| b.poly)).unwrap_or(0);
    if poly == 0 {
      return Err(CrcError::PolyRequired);
    }

    let params = CrcParams {
      width,
      poly,
      init: self.init.or(base.map(|b| b.init)).unwrap_or(0),
      refin: self.refin.or(base.map(|b| b.refin)).unwrap_or(false),
      refout: self.refout.or(base.map(|b| b.refout)).unwrap_or(false),
      xorout: self.xorout.or(base.map(|b| b.xorout)).unwrap_or(0),
    };
    params.validate()?;
    Ok(params)
  }
}

impl CrcParams {
  /// Start a [`Builder`] with no fields set.
  #[must_use]
  pub fn builder<'a>() -> Builder<'a> {
    Builder::default()
  }
}
