use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
/// - Won | Lost -> InProgress, only through a restart
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// Lost as soon as a mine is revealed, won once every safe cell is revealed.
    pub const fn derive(
        mine_revealed: bool,
        revealed_safe: CellCount,
        safe_cells: CellCount,
    ) -> Self {
        if mine_revealed {
            Self::Lost
        } else if revealed_safe >= safe_cells {
            Self::Won
        } else {
            Self::InProgress
        }
    }

    /// Derives the state by scanning every cell.
    pub fn from_cells<'a>(cells: impl IntoIterator<Item = &'a Cell>) -> Self {
        let mut mine_revealed = false;
        let mut revealed_safe = 0;
        let mut safe_cells = 0;
        for cell in cells {
            match (cell.kind(), cell.is_revealed()) {
                (CellKind::Mine, revealed) => mine_revealed |= revealed,
                (CellKind::Empty, revealed) => {
                    safe_cells += 1;
                    revealed_safe += usize::from(revealed);
                }
            }
        }
        Self::derive(mine_revealed, revealed_safe, safe_cells)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress
    }
}
