use ndarray::Array2;
use std::collections::BTreeSet;

use crate::*;

/// Reveals the zero region around `origin` and its numbered border.
///
/// Iterative, with an explicit stack and one visited marker per cell, so each
/// cell is processed at most once. Neighbors are pushed unchecked and
/// bounds-checked when popped. Mines and flagged cells are never revealed.
/// Returns the indices that were newly revealed, including the origin.
pub(crate) fn flood(
    cells: &mut Array2<Cell>,
    size: BoardSize,
    origin: Coord2,
) -> BTreeSet<CellIndex> {
    debug_assert!(matches!(
        cells[origin.to_nd_index()],
        cell if !cell.is_mine() && cell.adjacent_mine_count() == 0 && !cell.is_revealed()
    ));

    let mut revealed = BTreeSet::new();
    let mut visited: Array2<bool> = Array2::default(size.to_nd_index());
    let mut to_visit = vec![(origin.0 as isize, origin.1 as isize)];
    log::trace!("Starting flood fill from {:?}", origin);

    while let Some((row, column)) = to_visit.pop() {
        let Some(coords) = size.checked_coords(row, column) else {
            continue;
        };
        let nd_index = coords.to_nd_index();
        if visited[nd_index] || cells[nd_index].is_revealed() {
            continue;
        }
        visited[nd_index] = true;

        let cell = &mut cells[nd_index];
        if cell.is_mine() || !cell.reveal() {
            log::trace!("Skipping cell at {:?}", coords);
            continue;
        }
        revealed.insert(cell.index());
        log::trace!(
            "Flood revealed cell at {:?}, mine count: {}",
            coords,
            cell.adjacent_mine_count()
        );

        if cell.adjacent_mine_count() == 0 {
            to_visit.extend(
                DISPLACEMENTS
                    .iter()
                    .map(|&(d_row, d_column)| (row + d_row, column + d_column)),
            );
        }
    }

    revealed
}
