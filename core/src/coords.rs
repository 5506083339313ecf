//! Conversions between linear cell indices, grid coordinates and pixel points.
//!
//! The free functions do no range validation; callers check the result against
//! the board size before using it. [`CellGeometry::cell_at`] is the validated
//! entry point for input handling.

use serde::{Deserialize, Serialize};

use crate::*;

/// Pixel unit on the rendering surface.
pub type Pixel = u32;

/// Pixel point `(x, y)`, `x` growing right and `y` growing down.
pub type Point = (Pixel, Pixel);

pub const fn index_of(row: Coord, column: Coord, num_columns: Coord) -> CellIndex {
    row as CellIndex * num_columns as CellIndex + column as CellIndex
}

/// Inverse of [`index_of`]. `num_columns` must be non-zero.
pub const fn coords_of(index: CellIndex, num_columns: Coord) -> Coord2 {
    let num_columns = num_columns as CellIndex;
    ((index / num_columns) as Coord, (index % num_columns) as Coord)
}

/// Floor division on both axes, so a point on a cell's right or lower edge
/// belongs to the next cell.
pub const fn index_at_point(
    x: Pixel,
    y: Pixel,
    cell_width: Pixel,
    cell_height: Pixel,
    num_columns: Coord,
) -> CellIndex {
    let row = (y / cell_height) as CellIndex;
    let column = (x / cell_width) as CellIndex;
    row * num_columns as CellIndex + column
}

/// Size of one cell on the rendering surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellGeometry {
    pub cell_width: Pixel,
    pub cell_height: Pixel,
}

impl CellGeometry {
    pub fn new(cell_width: Pixel, cell_height: Pixel) -> Result<Self> {
        if cell_width == 0 || cell_height == 0 {
            return Err(GameError::InvalidConfiguration("cell size must be non-zero"));
        }
        Ok(Self {
            cell_width,
            cell_height,
        })
    }

    /// Splits a `width`×`height` surface evenly between the board's columns and rows.
    pub fn fit(size: BoardSize, width: Pixel, height: Pixel) -> Result<Self> {
        if size.rows == 0 || size.columns == 0 {
            return Err(GameError::InvalidConfiguration("board must have rows and columns"));
        }
        Self::new(width / Pixel::from(size.columns), height / Pixel::from(size.rows))
    }

    /// Grid coordinates under `point`, unbounded on the far side.
    pub const fn grid_position(self, (x, y): Point) -> (Pixel, Pixel) {
        (y / self.cell_height, x / self.cell_width)
    }

    pub const fn index_at(self, (x, y): Point, num_columns: Coord) -> CellIndex {
        index_at_point(x, y, self.cell_width, self.cell_height, num_columns)
    }

    /// Cell index under `point`, or `None` if the point lies past the last row or column.
    pub fn cell_at(self, point: Point, size: BoardSize) -> Option<CellIndex> {
        let (row, column) = self.grid_position(point);
        let row = Coord::try_from(row).ok()?;
        let column = Coord::try_from(column).ok()?;
        size.contains((row, column)).then(|| self.index_at(point, size.columns))
    }

    /// Top-left pixel of the cell at `(row, column)`.
    pub const fn origin_of(self, (row, column): Coord2) -> Point {
        (
            column as Pixel * self.cell_width,
            row as Pixel * self.cell_height,
        )
    }
}
