// In benches/roundtrip_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mempack::{compress, decompress};

/// Generates a vector of highly compressible data.
fn generate_low_entropy_bytes(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let pattern = b"abcdefgABCDEFG12345";
    while data.len() < size {
        data.extend_from_slice(pattern);
    }
    data.truncate(size);
    data
}

/// Generates a vector of less compressible, more random-looking data.
fn generate_high_entropy_bytes(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let pattern: Vec<u8> = (0..=255u8).collect();
    while data.len() < size {
        data.extend_from_slice(&pattern);
    }
    data.truncate(size);
    data
}

const BENCH_DATA_SIZE: usize = 65536; // 64 KB

fn bench_buffer_roundtrip(c: &mut Criterion) {
    // --- Setup Data ---
    let low_entropy_data = generate_low_entropy_bytes(BENCH_DATA_SIZE);
    let high_entropy_data = generate_high_entropy_bytes(BENCH_DATA_SIZE);

    // Prepare compressed data once to benchmark decompression accurately.
    let compressed_low = compress(&low_entropy_data).unwrap();
    let compressed_high = compress(&high_entropy_data).unwrap();

    // --- Create a Benchmark Group ---
    let mut group = c.benchmark_group("Buffer Roundtrip");
    group.throughput(criterion::Throughput::Bytes(BENCH_DATA_SIZE as u64));

    group.bench_function("Compress (Low Entropy)", |b| {
        b.iter(|| black_box(compress(black_box(&low_entropy_data))))
    });
    group.bench_function("Compress (High Entropy)", |b| {
        b.iter(|| black_box(compress(black_box(&high_entropy_data))))
    });

    group.bench_function("Decompress (Low Entropy)", |b| {
        b.iter(|| {
            black_box(decompress(
                black_box(compressed_low.as_bytes()),
                BENCH_DATA_SIZE,
            ))
        })
    });
    group.bench_function("Decompress (High Entropy)", |b| {
        b.iter(|| {
            black_box(decompress(
                black_box(compressed_high.as_bytes()),
                BENCH_DATA_SIZE,
            ))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_buffer_roundtrip);
criterion_main!(benches);
