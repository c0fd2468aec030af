//! I/O adapters for checksum computation.
//!
//! [`ChecksumReader`] and [`ChecksumWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] implementations to compute checksums transparently
//! during I/O. Only bytes actually transferred are hashed, so short reads and
//! writes are handled correctly.
//!
//! Because engines are configured at runtime, both adapters take an already
//! configured [`Checksum`] instance instead of conjuring one from the type.
//!
//! ```text
//! let mut reader = ChecksumReader::new(file, engine);
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! let crc = reader.finalize();
//! ```

use std::io::{IoSlice, Read, Write};

use crate::Checksum;

/// Wraps a [`Read`] and feeds every byte read through a checksum engine.
#[derive(Clone, Debug)]
pub struct ChecksumReader<R, C: Checksum> {
  inner: R,
  engine: C,
}

impl<R, C: Checksum> ChecksumReader<R, C> {
  /// Create a reader wrapper around `inner`, hashing with `engine`.
  #[inline]
  pub fn new(inner: R, engine: C) -> Self {
    Self { inner, engine }
  }

  /// Checksum of all bytes read so far.
  #[inline]
  pub fn finalize(&self) -> C::Output {
    self.engine.finalize()
  }

  /// Access the underlying engine.
  #[inline]
  pub fn engine(&self) -> &C {
    &self.engine
  }

  /// Unwrap, returning the inner reader and the engine.
  #[inline]
  pub fn into_parts(self) -> (R, C) {
    (self.inner, self.engine)
  }
}

impl<R: Read, C: Checksum> Read for ChecksumReader<R, C> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    let n = self.inner.read(buf)?;
    if let Some(filled) = buf.get(..n) {
      self.engine.update(filled);
    }
    Ok(n)
  }
}

/// Wraps a [`Write`] and feeds every byte written through a checksum engine.
#[derive(Clone, Debug)]
pub struct ChecksumWriter<W, C: Checksum> {
  inner: W,
  engine: C,
}

impl<W, C: Checksum> ChecksumWriter<W, C> {
  /// Create a writer wrapper around `inner`, hashing with `engine`.
  #[inline]
  pub fn new(inner: W, engine: C) -> Self {
    Self { inner, engine }
  }

  /// Checksum of all bytes written so far.
  #[inline]
  pub fn finalize(&self) -> C::Output {
    self.engine.finalize()
  }

  /// Access the underlying engine.
  #[inline]
  pub fn engine(&self) -> &C {
    &self.engine
  }

  /// Unwrap, returning the inner writer and the engine.
  #[inline]
  pub fn into_parts(self) -> (W, C) {
    (self.inner, self.engine)
  }
}

impl<W: Write, C: Checksum> Write for ChecksumWriter<W, C> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    let n = self.inner.write(buf)?;
    if let Some(sent) = buf.get(..n) {
      self.engine.update(sent);
    }
    Ok(n)
  }

  #[inline]
  fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> std::io::Result<usize> {
    let n = self.inner.write_vectored(bufs)?;
    let mut left = n;
    for buf in bufs {
      if left == 0 {
        break;
      }
      let take = left.min(buf.len());
      if let Some(sent) = buf.get(..take) {
        self.engine.update(sent);
      }
      left -= take;
    }
    debug_assert_eq!(left, 0);
    Ok(n)
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    self.inner.flush()
  }
}
