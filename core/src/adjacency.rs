use ndarray::Array2;
use std::collections::BTreeSet;

use crate::*;

/// Adjacent-mine count of every cell, indexed by `(row, column)`.
///
/// Each mine increments its in-bounds, non-mine neighbors once. Mine cells
/// hold [`MINE_SENTINEL`] and are never incremented.
pub fn compute(size: BoardSize, mines: &BTreeSet<CellIndex>) -> Array2<u8> {
    let mut counts: Array2<u8> = Array2::zeros(size.to_nd_index());

    for &index in mines {
        counts[size.coords_of(index).to_nd_index()] = MINE_SENTINEL;
    }

    for &index in mines {
        for neighbor in size.iter_neighbors(size.coords_of(index)) {
            let count = &mut counts[neighbor.to_nd_index()];
            if *count != MINE_SENTINEL {
                *count += 1;
            }
        }
    }

    counts
}

/// Counts mines around a single cell by looking at its neighbors.
pub fn count_at(size: BoardSize, mines: &BTreeSet<CellIndex>, coords: Coord2) -> u8 {
    size.iter_neighbors(coords)
        .filter(|&pos| mines.contains(&size.index_of(pos)))
        .count()
        .try_into()
        .unwrap_or(u8::MAX)
}
