//! Benchmarks for zero-crossing search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use isoline::contour::{find_crossings, DEFAULT_SIGN_EPSILON};
use isoline::distance::Circle;
use isoline::field::FieldSampler;
use isoline::grid::{Grid, GridConfig};
use isoline::primitives::Point2;

fn bench_find_crossings(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_crossings");

    for cells in [8, 32, 128, 256] {
        let size = cells as f64;
        let grid: Grid<f64> = Grid::new(GridConfig::default().with_size(cells, cells));
        let mut sampler = FieldSampler::with_shape(Circle::new(
            Point2::new(size * 0.5, size * 0.5),
            size * 0.3,
        ));
        sampler.recompute(&grid);

        group.bench_with_input(BenchmarkId::new("grid_cells", cells), &grid, |b, grid| {
            b.iter(|| find_crossings(black_box(grid), black_box(&sampler), DEFAULT_SIGN_EPSILON))
        });
    }

    group.finish();
}

fn bench_epsilon_band(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_crossings_epsilon");

    let grid: Grid<f64> = Grid::new(GridConfig::default().with_size(128, 128).with_cell_size(0.1));
    let mut sampler = FieldSampler::with_shape(Circle::new(Point2::new(6.4, 6.4), 4.0));
    sampler.recompute(&grid);

    for eps in [0.0, 1e-4, 1e-2, 1e-1] {
        group.bench_with_input(
            BenchmarkId::new("eps", format!("{:.0e}", eps)),
            &eps,
            |b, &eps| b.iter(|| find_crossings(&grid, &sampler, black_box(eps))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_find_crossings, bench_epsilon_band);
criterion_main!(benches);
