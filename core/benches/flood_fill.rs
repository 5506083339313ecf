use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use gridsweep_core::*;

/// Board whose only mine sits in the last cell, so revealing the first cell
/// floods everything else.
fn open_board(rows: Coord, columns: Coord) -> Board {
    let size = BoardSize::new(rows, columns);
    let layout = MineLayout::from_indices(size, &[size.total_cells() - 1])
        .expect("valid single-mine layout");
    Board::from_layout(layout)
}

fn flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");
    for (rows, columns) in [(16, 30), (100, 100), (500, 500)] {
        let board = open_board(rows, columns);
        group.bench_function(format!("{}x{}", rows, columns), |b| {
            b.iter_batched(
                || board.clone(),
                |mut board| black_box(board.apply(Action::Reveal(0))),
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (rows, columns, mines) in [(9, 9, 10), (16, 30, 99), (100, 100, 50), (100, 100, 2000)] {
        let config = GameConfig::new(rows, columns, mines).with_seed(1);
        group.bench_function(format!("{}x{}/{}", rows, columns, mines), |b| {
            b.iter(|| Board::new(black_box(config)))
        });
    }
    group.finish();
}

criterion_group!(benches, flood_fill, generate);
criterion_main!(benches);
