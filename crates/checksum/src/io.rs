//! I/O adapters for checksum computation.
//!
//! Re-exports the [`ChecksumReader`] and [`ChecksumWriter`] wrappers, which
//! compute a checksum transparently while bytes flow through a
//! [`std::io::Read`] / [`std::io::Write`]. Only bytes actually transferred
//! are hashed.
//!
//! [`Crc`](crate::Crc) also implements [`std::io::Write`] directly, so
//! [`std::io::copy`] can stream a file straight into an engine:
//!
//! ```no_run
//! use checksum::Crc;
//!
//! # fn main() -> std::io::Result<()> {
//! let mut file = std::fs::File::open("data.bin")?;
//! let mut engine = Crc::from_name("crc-64-xz").map_err(std::io::Error::other)?;
//! std::io::copy(&mut file, &mut engine)?;
//! let checksum = engine.finalize();
//! # let _ = checksum;
//! # Ok(())
//! # }
//! ```

pub use traits::io::{ChecksumReader, ChecksumWriter};
