//! Error type for engine configuration and combine operands.

use core::fmt;

/// Errors surfaced by configuration, construction and combine.
///
/// Every variant corresponds to exactly one rejected input; validation runs
/// before any engine state is touched, so a failed constructor leaves nothing
/// half-built behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CrcError {
  /// `width` outside 1..=64.
  WidthOutOfRange,
  /// `poly` is zero or exceeds the width mask.
  PolyOutOfRange,
  /// `init` exceeds the width mask.
  InitOutOfRange,
  /// `xorout` exceeds the width mask.
  XoroutOutOfRange,
  /// No `width` available from either a template or an explicit field.
  WidthRequired,
  /// No non-zero `poly` available from either a template or an explicit field.
  PolyRequired,
  /// First combine operand exceeds the width mask.
  Crc1OutOfRange,
  /// Second combine operand exceeds the width mask.
  Crc2OutOfRange,
  /// Name not present in the catalogue.
  UnknownTemplate,
  /// Method name not one of `bitwise`, `bytewise`, `wordwise`.
  UnknownMethod,
}

impl fmt::Display for CrcError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let message = match self {
      Self::WidthOutOfRange => "width out of range",
      Self::PolyOutOfRange => "poly out of range",
      Self::InitOutOfRange => "init out of range",
      Self::XoroutOutOfRange => "xorout out of range",
      Self::WidthRequired => "width required",
      Self::PolyRequired => "poly required",
      Self::Crc1OutOfRange => "crc1 out of range",
      Self::Crc2OutOfRange => "crc2 out of range",
      Self::UnknownTemplate => "unknown template name",
      Self::UnknownMethod => "unknown method",
    };
    f.write_str(message)
  }
}

impl core::error::Error for CrcError {}
