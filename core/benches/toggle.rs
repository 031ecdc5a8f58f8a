use criterion::{Criterion, criterion_group, criterion_main};
use lightsout_core::*;
use std::hint::black_box;

fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("toggle");

    for size in [5u8, 32, 255] {
        let config = GameConfig::new(size, size, 0.5).unwrap();
        let grid = RandomGridGenerator::new(u64::from(size)).generate(config).unwrap();
        let center = (size / 2, size / 2);

        group.bench_function(format!("toggled_around/{size}x{size}"), |b| {
            b.iter(|| black_box(&grid).toggled_around(black_box(center)).unwrap())
        });

        let mut in_place = grid.clone();
        group.bench_function(format!("toggle_around/{size}x{size}"), |b| {
            b.iter(|| in_place.toggle_around(black_box(center)).unwrap())
        });
    }

    group.finish();
}

fn bench_has_won(c: &mut Criterion) {
    let mut group = c.benchmark_group("has_won");

    for size in [5u8, 32, 255] {
        let dark = Grid::filled((size, size), false).unwrap();
        group.bench_function(format!("dark/{size}x{size}"), |b| {
            b.iter(|| black_box(&dark).has_won())
        });
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let config = GameConfig::new(255, 255, 0.5).unwrap();
    c.bench_function("generate/255x255", |b| {
        b.iter(|| RandomGridGenerator::new(black_box(17)).generate(config).unwrap())
    });
}

criterion_group!(benches, bench_toggle, bench_has_won, bench_generate);
criterion_main!(benches);
