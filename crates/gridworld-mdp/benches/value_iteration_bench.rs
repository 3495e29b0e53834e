//! Value iteration benchmarks.
//!
//! Run with: cargo bench -p gridworld-mdp --bench value_iteration_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gridworld_core::types::{Coord, Grid, GridLayout};
use gridworld_mdp::{PolicyIteration, TransitionModel, ValueIteration};

/// Square open grid with a +1 terminal in the top-right corner and a −1
/// terminal just below it.
fn square_grid(size: usize) -> Grid {
    let layout = GridLayout::open(size, size)
        .with_terminal(Coord::new(0, size - 1), 1.0)
        .with_terminal(Coord::new(1, size - 1), -1.0);
    Grid::from_layout(&layout, -0.04).unwrap()
}

fn value_iteration_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_iteration");
    group.sample_size(10);

    let solver = ValueIteration::default();
    for size in [5, 20, 50] {
        let grid = square_grid(size);
        group.bench_with_input(BenchmarkId::new("solve", size), &grid, |b, grid| {
            b.iter(|| solver.solve(grid).unwrap());
        });
    }
    group.finish();
}

fn classic_scenarios(c: &mut Criterion) {
    let vi = ValueIteration::default();
    let pi = PolicyIteration::new(0.9, 1e-4, TransitionModel::default()).unwrap();
    let grid = Grid::classic(-2.0).unwrap();

    c.bench_function("classic_value_iteration", |b| {
        b.iter(|| vi.solve(&grid).unwrap());
    });
    c.bench_function("classic_policy_iteration", |b| {
        b.iter(|| pi.run(&grid).unwrap());
    });
}

criterion_group!(benches, value_iteration_scaling, classic_scenarios);
criterion_main!(benches);
