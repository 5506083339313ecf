//! Board logic for a minesweeper-style grid-reveal puzzle.
//!
//! A [`Board`] is built from a [`GameConfig`], then advanced with
//! [`Board::apply`]. Every call returns an [`ActionOutcome`] holding the game
//! state and the indices of the cells a renderer has to redraw.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use coords::{CellGeometry, Pixel, Point};
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use input::*;
pub use layout::*;
pub use snapshot::*;
pub use state::*;
pub use types::*;

pub mod adjacency;
mod cell;
pub mod coords;
mod engine;
mod error;
mod generator;
mod input;
mod layout;
mod reveal;
mod snapshot;
mod state;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: BoardSize,
    pub mines: CellCount,
    /// Fixed seed for reproducible matches, `None` draws one per generation.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub const fn new(rows: Coord, columns: Coord, mines: CellCount) -> Self {
        Self {
            size: BoardSize::new(rows, columns),
            mines,
            seed: None,
        }
    }

    pub const fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        self.size.total_cells()
    }

    /// Requires `0 < mines < rows * columns`.
    pub fn validate(&self) -> Result<()> {
        layout::check_mine_count(self.total_cells(), self.mines)
    }
}

/// Abstract player action, already resolved to a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Reveal(CellIndex),
    Flag(CellIndex),
    /// Start a new match, with a new configuration or the current one.
    Restart(Option<GameConfig>),
}

/// Result of one [`Board::apply`] call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub state: GameState,
    /// Cells whose `revealed` or `flagged` attribute changed.
    pub dirty: BTreeSet<CellIndex>,
    /// Set when the action was refused; the board is then untouched.
    #[serde(skip)]
    pub rejected: Option<GameError>,
}

impl ActionOutcome {
    pub fn changed(state: GameState, dirty: BTreeSet<CellIndex>) -> Self {
        Self {
            state,
            dirty,
            rejected: None,
        }
    }

    pub fn unchanged(state: GameState) -> Self {
        Self::changed(state, BTreeSet::new())
    }

    pub fn rejected(state: GameState, error: GameError) -> Self {
        Self {
            rejected: Some(error),
            ..Self::unchanged(state)
        }
    }

    /// Whether the renderer has anything to redraw.
    pub fn has_update(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn is_rejected(&self) -> bool {
        self.rejected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_requires_mines_below_cell_count() {
        assert!(GameConfig::new(3, 3, 1).validate().is_ok());
        assert!(GameConfig::new(3, 3, 8).validate().is_ok());
        assert!(GameConfig::new(3, 3, 9).validate().is_err());
        assert!(GameConfig::new(3, 3, 0).validate().is_err());
        assert!(GameConfig::new(0, 3, 1).validate().is_err());
        assert!(GameConfig::new(1, 1, 0).validate().is_err());
    }

    #[test]
    fn rejected_outcome_has_nothing_to_redraw() {
        let outcome = ActionOutcome::rejected(
            GameState::Lost,
            GameError::IllegalAction(Rejection::MatchFinished),
        );

        assert!(!outcome.has_update());
        assert!(outcome.is_rejected());
        assert_eq!(outcome.state, GameState::Lost);
    }
}
