use criterion::{Criterion, criterion_group, criterion_main};
use simplex_core::{Grid2D, PermutationTable, Simplex2D, fill2, generate2d, par_fill2};
use std::hint::black_box;

const SIZE: usize = 257;
const SEED: u32 = 2025;
const SCALE: f64 = 0.05;

fn bench_setup_permutation(c: &mut Criterion) {
    c.bench_function("PermutationTable::new", |b| {
        b.iter(|| PermutationTable::new(black_box(SEED)))
    });
}

fn bench_noise2_point(c: &mut Criterion) {
    let noise = Simplex2D::new(SEED);
    c.bench_function("Simplex2D::noise2 single sample", |b| {
        b.iter(|| noise.noise2(black_box(12.34), black_box(-56.78)))
    });
}

fn bench_fill_sequential(c: &mut Criterion) {
    let noise = Simplex2D::new(SEED);
    let mut buf = vec![0.0f32; SIZE * SIZE];
    c.bench_function("fill2 257x257 sequential", |b| {
        b.iter(|| {
            let mut grid = Grid2D::new(&mut buf, SIZE, SIZE);
            fill2(&noise, SCALE, &mut grid);
        })
    });
}

fn bench_fill_parallel(c: &mut Criterion) {
    let noise = Simplex2D::new(SEED);
    let mut buf = vec![0.0f32; SIZE * SIZE];
    c.bench_function("par_fill2 257x257 row-parallel", |b| {
        b.iter(|| {
            let mut grid = Grid2D::new(&mut buf, SIZE, SIZE);
            par_fill2(&noise, SCALE, &mut grid);
        })
    });
}

fn bench_generate2d(c: &mut Criterion) {
    // Table construction + parallel fill, the full entry-point cost
    let mut buf = vec![0.0f32; SIZE * SIZE];
    c.bench_function("generate2d 257x257", |b| {
        b.iter(|| {
            let mut grid = Grid2D::new(&mut buf, SIZE, SIZE);
            generate2d(black_box(SEED), SCALE, &mut grid);
        })
    });
}

criterion_group!(
    simplex_benchmarks,
    bench_setup_permutation,
    bench_noise2_point,
    bench_fill_sequential,
    bench_fill_parallel,
    bench_generate2d
);
criterion_main!(simplex_benchmarks);
