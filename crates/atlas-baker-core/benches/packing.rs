use atlas_baker_core::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn generate_sizes(count: usize, min_size: u32, max_size: u32) -> Vec<(u32, u32)> {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x9e3779b9);
    (0..count)
        .map(|_| {
            (
                rng.gen_range(min_size..=max_size),
                rng.gen_range(min_size..=max_size),
            )
        })
        .collect()
}

fn bench_skyline_place(c: &mut Criterion) {
    let mut group = c.benchmark_group("skyline_place");

    for count in [50, 200, 800] {
        let sizes = generate_sizes(count, 8, 64);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &sizes, |b, sizes| {
            b.iter(|| {
                let mut packer = SkylinePacker::new(2048, 2048);
                let mut placed = 0usize;
                for &(w, h) in sizes {
                    if packer.try_place(w, h).is_some() {
                        placed += 1;
                    }
                }
                black_box(placed)
            });
        });
    }

    group.finish();
}

fn bench_grow_and_retry(c: &mut Criterion) {
    let mut group = c.benchmark_group("grow_and_retry");

    // Small seed forces several doubling passes, each replaying all
    // prior placements.
    let sizes = generate_sizes(300, 16, 96);
    group.throughput(Throughput::Elements(sizes.len() as u64));

    for seed_size in [64u32, 256, 1024] {
        group.bench_with_input(
            BenchmarkId::from_parameter(seed_size),
            &sizes,
            |b, sizes| {
                b.iter(|| {
                    let mut builder = AtlasBuilder::new(seed_size);
                    for &(w, h) in sizes {
                        builder.place(w, h).unwrap();
                    }
                    black_box(builder.canvas_size())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_skyline_place, bench_grow_and_retry);
criterion_main!(benches);
