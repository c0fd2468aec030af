//! Basic usage: catalogue lookups, custom parameters, digest forms.
//!
//! Run: `cargo run -p checksum --example basic`

use checksum::{Crc, CrcParams, Method};

fn main() -> Result<(), checksum::CrcError> {
  let data = b"123456789";

  // The default engine is CRC-32/ISO-HDLC with the wordwise kernel.
  let mut crc = Crc::default();
  crc.update(data);
  println!("crc-32        {:>18} = 0x{}", crc.finalize(), crc.hexdigest());

  // Any catalogue name works, including protocol aliases.
  for name in ["xmodem", "modbus", "crc-8-smbus", "crc-40-gsm", "crc-64-xz"] {
    let mut crc = Crc::from_name(name)?;
    crc.update(data);
    println!("{name:<13} digest = 0x{}", crc.hexdigest());
  }

  // Fully custom parameters through the builder.
  let params = CrcParams::builder().width(16).poly(0x1021).init(0xFFFF).build()?;
  let mut crc = Crc::new(params, Method::Bytewise)?;
  crc.update(data);
  println!("custom 16-bit digest = 0x{}", crc.hexdigest());

  // Streaming in pieces gives the same digest.
  let mut streamed = Crc::from_name("crc-64-xz")?;
  streamed.update(b"12345");
  streamed.update(b"6789");
  println!("streamed      digest = 0x{}", streamed.hexdigest());

  Ok(())
}
