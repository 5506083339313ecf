use thiserror::Error;

use crate::{CellCount, CellIndex, Pixel};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("Cell {index} is out of range, board has {cells} cells")]
    OutOfRange { index: CellIndex, cells: CellCount },
    #[error("Point ({x}, {y}) is outside the grid")]
    OutsideGrid { x: Pixel, y: Pixel },
    #[error("Illegal action: {0}")]
    IllegalAction(Rejection),
}

/// Why a well-formed action was refused.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("cell is already revealed")]
    AlreadyRevealed,
    #[error("cell is flagged")]
    Flagged,
    #[error("match already ended, only restart is accepted")]
    MatchFinished,
}

impl From<Rejection> for GameError {
    fn from(rejection: Rejection) -> Self {
        Self::IllegalAction(rejection)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
