use serde::{Deserialize, Serialize};

use crate::coords;

/// Single grid axis, used for board dimensions and row/column positions.
pub type Coord = u16;

/// Linear cell id, `row * columns + column`.
pub type CellIndex = usize;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = usize;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Board dimensions in cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSize {
    pub rows: Coord,
    pub columns: Coord,
}

impl BoardSize {
    pub const fn new(rows: Coord, columns: Coord) -> Self {
        Self { rows, columns }
    }

    pub const fn total_cells(self) -> CellCount {
        self.rows as CellCount * self.columns as CellCount
    }

    pub const fn contains(self, (row, column): Coord2) -> bool {
        row < self.rows && column < self.columns
    }

    pub const fn contains_index(self, index: CellIndex) -> bool {
        index < self.total_cells()
    }

    /// Converts signed coordinates into board coordinates, `None` when they fall outside.
    pub fn checked_coords(self, row: isize, column: isize) -> Option<Coord2> {
        let row = Coord::try_from(row).ok()?;
        let column = Coord::try_from(column).ok()?;
        self.contains((row, column)).then_some((row, column))
    }

    pub const fn index_of(self, (row, column): Coord2) -> CellIndex {
        coords::index_of(row, column, self.columns)
    }

    pub const fn coords_of(self, index: CellIndex) -> Coord2 {
        coords::coords_of(index, self.columns)
    }

    pub fn iter_neighbors(self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self)
    }

    pub fn to_nd_index(self) -> [usize; 2] {
        (self.rows, self.columns).to_nd_index()
    }
}

/// Neighbor offsets as `(row, column)` deltas.
pub const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: BoardSize) -> Option<Coord2> {
    let (row, column) = coords;
    let (d_row, d_column) = delta;
    bounds.checked_coords(row as isize + d_row, column as isize + d_column)
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: BoardSize,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: BoardSize) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        let size = BoardSize::new(3, 3);

        let neighbors: Vec<_> = size.iter_neighbors((0, 0)).collect();

        assert_eq!(neighbors, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn center_has_all_neighbors_in_offset_order() {
        let size = BoardSize::new(3, 3);

        let neighbors: Vec<_> = size.iter_neighbors((1, 1)).collect();

        assert_eq!(
            neighbors,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn single_row_board_skips_vertical_neighbors() {
        let size = BoardSize::new(1, 4);

        assert_eq!(size.iter_neighbors((0, 2)).count(), 2);
        assert_eq!(size.iter_neighbors((0, 3)).count(), 1);
    }

    #[test]
    fn checked_coords_rejects_negative_and_overflowing_values() {
        let size = BoardSize::new(2, 3);

        assert_eq!(size.checked_coords(-1, 0), None);
        assert_eq!(size.checked_coords(0, -1), None);
        assert_eq!(size.checked_coords(2, 0), None);
        assert_eq!(size.checked_coords(0, 3), None);
        assert_eq!(size.checked_coords(1, 2), Some((1, 2)));
    }
}
