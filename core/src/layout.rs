use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::*;

/// Checks `0 < num_mines < num_cells`.
pub(crate) fn check_mine_count(num_cells: CellCount, num_mines: CellCount) -> Result<()> {
    if num_cells == 0 {
        Err(GameError::InvalidConfiguration("board has no cells"))
    } else if num_mines == 0 {
        Err(GameError::InvalidConfiguration("at least one mine is required"))
    } else if num_mines >= num_cells {
        Err(GameError::InvalidConfiguration(
            "mine count must be lower than the number of cells",
        ))
    } else {
        Ok(())
    }
}

/// Where the mines are on a board of a given size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineLayout {
    size: BoardSize,
    mines: BTreeSet<CellIndex>,
}

impl MineLayout {
    pub fn new(size: BoardSize, mines: BTreeSet<CellIndex>) -> Result<Self> {
        let cells = size.total_cells();
        check_mine_count(cells, mines.len())?;
        if let Some(&index) = mines.last() {
            if index >= cells {
                return Err(GameError::OutOfRange { index, cells });
            }
        }
        Ok(Self { size, mines })
    }

    pub fn from_indices(size: BoardSize, indices: &[CellIndex]) -> Result<Self> {
        let mines: BTreeSet<_> = indices.iter().copied().collect();
        if mines.len() != indices.len() {
            return Err(GameError::InvalidConfiguration("duplicate mine index"));
        }
        Self::new(size, mines)
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn total_cells(&self) -> CellCount {
        self.size.total_cells()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines.len()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count()
    }

    pub fn contains_mine(&self, index: CellIndex) -> bool {
        self.mines.contains(&index)
    }

    pub fn mine_indices(&self) -> &BTreeSet<CellIndex> {
        &self.mines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicates_and_out_of_range_indices() {
        let size = BoardSize::new(3, 3);

        assert_eq!(
            MineLayout::from_indices(size, &[1, 1]),
            Err(GameError::InvalidConfiguration("duplicate mine index"))
        );
        assert_eq!(
            MineLayout::from_indices(size, &[2, 9]),
            Err(GameError::OutOfRange { index: 9, cells: 9 })
        );
    }

    #[test]
    fn rejects_empty_and_full_boards() {
        let size = BoardSize::new(2, 2);

        assert!(matches!(
            MineLayout::from_indices(size, &[]),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            MineLayout::from_indices(size, &[0, 1, 2, 3]),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn counts_safe_cells() {
        let layout = MineLayout::from_indices(BoardSize::new(3, 4), &[0, 5, 11]).unwrap();

        assert_eq!(layout.mine_count(), 3);
        assert_eq!(layout.safe_cell_count(), 9);
        assert!(layout.contains_mine(5));
        assert!(!layout.contains_mine(4));
    }
}
