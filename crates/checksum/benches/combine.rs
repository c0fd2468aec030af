//! CRC combine operation benchmarks.
//!
//! Run: `cargo bench -p checksum -- combine`
//!
//! Combine is O(log n) in the appended length; the interesting axes are the
//! length magnitude and the configuration width.

use checksum::Crc;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

fn bench_combine(c: &mut Criterion) {
  for name in ["crc-32", "crc-16-xmodem", "crc-64-xz"] {
    let engine = Crc::from_name(name).expect("catalogue name");
    let mut group = c.benchmark_group(format!("combine/{name}"));

    for len in [64usize, 1024, 65536, 1 << 24, 1 << 32] {
      // O(log n): throughput per element, not per byte.
      group.throughput(Throughput::Elements(1));

      group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
        let crc_a = 0x1234_5678u64 & engine.params().mask();
        let crc_b = 0x8765_4321u64 & engine.params().mask();
        b.iter(|| core::hint::black_box(engine.combine(crc_a, crc_b, len)));
      });
    }

    group.finish();
  }
}

criterion_group!(benches, bench_combine);
criterion_main!(benches);
