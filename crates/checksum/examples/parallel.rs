//! Chunked computation with combine.
//!
//! Run: `cargo run -p checksum --example parallel`
//!
//! Chunks are hashed independently (here sequentially; swap in rayon or
//! threads at will) and merged with the O(log n) combine operation.

use checksum::{Checksum as _, Crc, parallel::combine_checksums};

fn main() -> Result<(), checksum::CrcError> {
  let engine = Crc::from_name("crc-64-xz")?;

  let data: Vec<u8> = (0u32..1_000_000).map(|i| (i % 251) as u8).collect();

  // Hash each chunk independently.
  let parts: Vec<(u64, usize)> = data
    .chunks(64 * 1024)
    .map(|chunk| (engine.checksum(chunk), chunk.len()))
    .collect();

  // Merge the per-chunk results.
  let merged = combine_checksums(&engine, &parts).unwrap_or_else(|| engine.checksum(b""));
  let oneshot = engine.checksum(&data);

  println!("chunks  : {}", parts.len());
  println!("merged  : {merged:#018x}");
  println!("oneshot : {oneshot:#018x}");
  assert_eq!(merged, oneshot);

  Ok(())
}
