use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Immutable copy of a board's cells, for readers running beside the owner
/// of the [`Board`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: BoardSize,
    pub mine_count: CellCount,
    pub state: GameState,
    pub cells: Array2<Cell>,
}

impl Snapshot {
    pub fn from_board(board: &Board) -> Self {
        Self {
            size: board.size(),
            mine_count: board.total_mines(),
            state: board.state(),
            cells: board.cell_grid().clone(),
        }
    }

    pub fn cell(&self, index: CellIndex) -> Option<&Cell> {
        if !self.size.contains_index(index) {
            return None;
        }
        self.cells.get(self.size.coords_of(index).to_nd_index())
    }

    /// What the player sees, cell by cell.
    pub fn view(&self) -> Array2<CellView> {
        self.cells.map(Cell::view)
    }

    pub fn flagged_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_flagged()).count()
    }

    /// Checks the copied cells against the recorded size and state.
    pub fn validate(&self) -> Result<()> {
        if self.cells.dim() != (usize::from(self.size.rows), usize::from(self.size.columns)) {
            return Err(GameError::InvalidConfiguration(
                "snapshot cells do not match the board size",
            ));
        }
        if GameState::from_cells(&self.cells) != self.state {
            return Err(GameError::InvalidConfiguration(
                "snapshot state does not match its cells",
            ));
        }
        Ok(())
    }
}
