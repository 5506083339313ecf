use serde::{Deserialize, Serialize};

use crate::CellIndex;

/// Adjacency value stored on mine cells; never shown to the player.
pub const MINE_SENTINEL: u8 = 9;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Mine,
    Empty,
}

/// One grid position.
///
/// Identity (`index`, `kind`, adjacency) is fixed at generation. Only the
/// board mutates `revealed` and `flagged`, and never sets both.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    index: CellIndex,
    kind: CellKind,
    adjacent_mines: u8,
    revealed: bool,
    flagged: bool,
}

impl Cell {
    pub(crate) const fn mine(index: CellIndex) -> Self {
        Self {
            index,
            kind: CellKind::Mine,
            adjacent_mines: MINE_SENTINEL,
            revealed: false,
            flagged: false,
        }
    }

    pub(crate) const fn empty(index: CellIndex, adjacent_mines: u8) -> Self {
        Self {
            index,
            kind: CellKind::Empty,
            adjacent_mines,
            revealed: false,
            flagged: false,
        }
    }

    pub const fn index(&self) -> CellIndex {
        self.index
    }

    pub const fn kind(&self) -> CellKind {
        self.kind
    }

    pub const fn is_mine(&self) -> bool {
        matches!(self.kind, CellKind::Mine)
    }

    /// Number of mines around this cell, [`MINE_SENTINEL`] for mines.
    pub const fn adjacent_mine_count(&self) -> u8 {
        self.adjacent_mines
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    /// Player-visible projection of the cell.
    pub const fn view(&self) -> CellView {
        match (self.revealed, self.flagged, self.kind) {
            (true, _, CellKind::Mine) => CellView::Mine,
            (true, _, CellKind::Empty) => CellView::Revealed(self.adjacent_mines),
            (false, true, _) => CellView::Flagged,
            (false, false, _) => CellView::Hidden,
        }
    }

    /// Marks the cell revealed. Returns `false` when it was already revealed or is flagged.
    pub(crate) fn reveal(&mut self) -> bool {
        if self.revealed || self.flagged {
            return false;
        }
        self.revealed = true;
        true
    }

    /// Flips the flag on a hidden cell. Returns `false` for revealed cells.
    pub(crate) fn toggle_flag(&mut self) -> bool {
        if self.revealed {
            return false;
        }
        self.flagged = !self.flagged;
        true
    }
}

/// What a renderer may show for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    Mine,
}

impl CellView {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flagged_cell_cannot_be_revealed() {
        let mut cell = Cell::empty(3, 1);

        assert!(cell.toggle_flag());
        assert!(!cell.reveal());
        assert_eq!(cell.view(), CellView::Flagged);

        assert!(cell.toggle_flag());
        assert!(cell.reveal());
        assert_eq!(cell.view(), CellView::Revealed(1));
    }

    #[test]
    fn revealed_cell_keeps_its_flag_state() {
        let mut cell = Cell::empty(0, 0);

        assert!(cell.reveal());
        assert!(!cell.toggle_flag());
        assert!(!cell.is_flagged());
        assert!(!cell.reveal());
    }

    #[test]
    fn mine_carries_sentinel_count() {
        let mut cell = Cell::mine(8);

        assert_eq!(cell.adjacent_mine_count(), MINE_SENTINEL);
        assert_eq!(cell.view(), CellView::Hidden);
        assert!(cell.reveal());
        assert_eq!(cell.view(), CellView::Mine);
    }
}
