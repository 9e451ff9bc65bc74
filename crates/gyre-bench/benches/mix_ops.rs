//! Criterion micro-benchmarks for mixing and anchor queries.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use gyre_bench::{reference_input, reference_mixer, REFERENCE_LEN};
use gyre_core::ElementId;
use gyre_mixer::{decrypt, MixConfig, GROVE_ANCHOR, GROVE_OFFSETS};
use gyre_ring::RingLinks;

/// Benchmark: one unscaled round over the 5000-element reference input.
fn bench_mix_single_round(c: &mut Criterion) {
    let config = MixConfig::default();
    c.bench_function("mix_single_round_5k", |b| {
        b.iter_batched(
            || reference_mixer(42, &config),
            |mut mixer| {
                mixer.mix(1);
                black_box(mixer)
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: full decryption (scaled, 10 rounds) end to end.
fn bench_decrypt_full(c: &mut Criterion) {
    let input = reference_input(42);
    let config = MixConfig::decryption();
    let mut group = c.benchmark_group("decrypt");
    group.sample_size(10);
    group.bench_function("full_5k", |b| {
        b.iter(|| black_box(decrypt(&input, &config)));
    });
    group.finish();
}

/// Benchmark: grove read-out on an already-mixed ring.
fn bench_grove_query(c: &mut Criterion) {
    let mut mixer = reference_mixer(42, &MixConfig::default());
    mixer.mix(1);
    c.bench_function("grove_sum_5k", |b| {
        b.iter(|| black_box(mixer.grove_sum(GROVE_ANCHOR, &GROVE_OFFSETS)));
    });
}

/// Benchmark: 1000 half-ring relocations on a bare link arena.
fn bench_relocate_half_ring(c: &mut Criterion) {
    let hops = (REFERENCE_LEN / 2) as i64;
    c.bench_function("relocate_half_ring_x1000", |b| {
        b.iter_batched(
            || RingLinks::new(REFERENCE_LEN).unwrap(),
            |mut ring| {
                for i in 0..1000u32 {
                    ring.relocate(ElementId(i), hops);
                }
                black_box(ring)
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_mix_single_round,
    bench_decrypt_full,
    bench_grove_query,
    bench_relocate_half_ring
);
criterion_main!(benches);
