use std::collections::BTreeSet;

use crate::*;
pub use random::*;

mod random;

/// Chooses which cells hold mines.
pub trait MinePlacer {
    /// Returns `num_mines` distinct indices in `[0, num_cells)`.
    fn place(self, num_cells: CellCount, num_mines: CellCount) -> Result<BTreeSet<CellIndex>>;
}

/// Replays a known set of mine indices, for reproducing a specific board.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMinePlacer {
    mines: Vec<CellIndex>,
}

impl FixedMinePlacer {
    pub fn new(mines: impl Into<Vec<CellIndex>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MinePlacer for FixedMinePlacer {
    fn place(self, num_cells: CellCount, num_mines: CellCount) -> Result<BTreeSet<CellIndex>> {
        crate::layout::check_mine_count(num_cells, num_mines)?;
        if self.mines.len() != num_mines {
            return Err(GameError::InvalidConfiguration(
                "fixed layout does not match the requested mine count",
            ));
        }

        let mut mines = BTreeSet::new();
        for index in self.mines {
            if index >= num_cells {
                return Err(GameError::OutOfRange {
                    index,
                    cells: num_cells,
                });
            }
            if !mines.insert(index) {
                return Err(GameError::InvalidConfiguration("duplicate mine index"));
            }
        }
        Ok(mines)
    }
}
