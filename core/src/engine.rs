use ndarray::Array2;
use std::collections::BTreeSet;

use crate::*;

/// Authoritative state of one match.
///
/// The board is mutated only through [`Board::apply`]. Rejected actions leave
/// it untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    config: GameConfig,
    layout: MineLayout,
    cells: Array2<Cell>,
    revealed_safe: CellCount,
    flagged: CellCount,
    triggered_mine: Option<CellIndex>,
}

impl Board {
    /// Generates a board, drawing a seed when the configuration has none.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let placer = match config.seed {
            Some(seed) => RandomMinePlacer::new(seed),
            None => RandomMinePlacer::from_entropy(),
        };
        Self::generate(config, placer)
    }

    pub fn generate(config: GameConfig, placer: impl MinePlacer) -> Result<Self> {
        config.validate()?;
        let mines = placer.place(config.total_cells(), config.mines)?;
        let layout = MineLayout::new(config.size, mines)?;
        Ok(Self::build(config, layout))
    }

    /// Board over a known layout. A restart without a new configuration
    /// generates a random layout of the same size and mine count.
    pub fn from_layout(layout: MineLayout) -> Self {
        let config = GameConfig {
            size: layout.size(),
            mines: layout.mine_count(),
            seed: None,
        };
        Self::build(config, layout)
    }

    fn build(config: GameConfig, layout: MineLayout) -> Self {
        let size = layout.size();
        let counts = adjacency::compute(size, layout.mine_indices());
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(row, column)| {
            let index = size.index_of((row as Coord, column as Coord));
            if layout.contains_mine(index) {
                Cell::mine(index)
            } else {
                Cell::empty(index, counts[[row, column]])
            }
        });
        log::debug!(
            "New board {}x{} with {} mines",
            size.rows,
            size.columns,
            layout.mine_count()
        );

        Self {
            config,
            layout,
            cells,
            revealed_safe: 0,
            flagged: 0,
            triggered_mine: None,
        }
    }

    /// Applies one action. Errors are reported on the outcome and leave the
    /// board unchanged.
    pub fn apply(&mut self, action: Action) -> ActionOutcome {
        let result = match action {
            Action::Reveal(index) => self.reveal(index),
            Action::Flag(index) => self.toggle_flag(index),
            Action::Restart(config) => self.restart(config),
        };

        match result {
            Ok(dirty) => {
                let state = self.state();
                log::debug!("{:?} changed {} cells, state {:?}", action, dirty.len(), state);
                ActionOutcome::changed(state, dirty)
            }
            Err(error) => {
                log::debug!("{:?} rejected: {}", action, error);
                ActionOutcome::rejected(self.state(), error)
            }
        }
    }

    /// Resolves a pointer action against `geometry`, then applies it.
    pub fn apply_pointer(&mut self, input: PointerAction, geometry: CellGeometry) -> ActionOutcome {
        match input.resolve(self.size(), geometry) {
            Ok(Some(action)) => self.apply(action),
            Ok(None) => ActionOutcome::unchanged(self.state()),
            Err(error) => {
                log::debug!("{:?} rejected: {}", input, error);
                ActionOutcome::rejected(self.state(), error)
            }
        }
    }

    pub fn state(&self) -> GameState {
        GameState::derive(
            self.triggered_mine.is_some(),
            self.revealed_safe,
            self.layout.safe_cell_count(),
        )
    }

    pub fn is_finished(&self) -> bool {
        self.state().is_finished()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> BoardSize {
        self.layout.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.layout.mine_count()
    }

    pub fn mine_indices(&self) -> &BTreeSet<CellIndex> {
        self.layout.mine_indices()
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.revealed_safe
    }

    /// Mines minus flags; negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        self.layout.mine_count() as isize - self.flagged as isize
    }

    /// The mine whose reveal lost the match.
    pub fn triggered_mine(&self) -> Option<CellIndex> {
        self.triggered_mine
    }

    pub fn cell(&self, index: CellIndex) -> Result<&Cell> {
        let coords = self.validate_index(index)?;
        Ok(&self.cells[coords.to_nd_index()])
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    /// Cells in index order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn index_at_point(&self, point: Point, geometry: CellGeometry) -> Result<CellIndex> {
        geometry
            .cell_at(point, self.size())
            .ok_or(GameError::OutsideGrid {
                x: point.0,
                y: point.1,
            })
    }

    /// Copy of the cell array for readers that must not hold the board.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_board(self)
    }

    pub(crate) fn cell_grid(&self) -> &Array2<Cell> {
        &self.cells
    }

    fn reveal(&mut self, index: CellIndex) -> Result<BTreeSet<CellIndex>> {
        let coords = self.validate_index(index)?;
        self.check_in_progress()?;

        let cell = self.cells[coords.to_nd_index()];
        if cell.is_revealed() {
            return Err(Rejection::AlreadyRevealed.into());
        }
        if cell.is_flagged() {
            return Err(Rejection::Flagged.into());
        }

        Ok(match cell.kind() {
            CellKind::Mine => {
                self.triggered_mine = Some(index);
                log::debug!("Mine hit at {:?}", coords);
                self.reveal_mines()
            }
            CellKind::Empty if cell.adjacent_mine_count() > 0 => {
                self.cells[coords.to_nd_index()].reveal();
                self.revealed_safe += 1;
                BTreeSet::from([index])
            }
            CellKind::Empty => {
                let size = self.size();
                let revealed = reveal::flood(&mut self.cells, size, coords);
                self.revealed_safe += revealed.len();
                revealed
            }
        })
    }

    /// Shows every mine. Flags on mines are cleared first so no cell ends up
    /// both flagged and revealed.
    fn reveal_mines(&mut self) -> BTreeSet<CellIndex> {
        let size = self.size();
        for &index in self.layout.mine_indices() {
            let cell = &mut self.cells[size.coords_of(index).to_nd_index()];
            if cell.is_flagged() {
                cell.toggle_flag();
                self.flagged -= 1;
            }
            cell.reveal();
        }
        self.layout.mine_indices().clone()
    }

    fn toggle_flag(&mut self, index: CellIndex) -> Result<BTreeSet<CellIndex>> {
        let coords = self.validate_index(index)?;
        self.check_in_progress()?;

        let cell = &mut self.cells[coords.to_nd_index()];
        if !cell.toggle_flag() {
            return Err(Rejection::AlreadyRevealed.into());
        }
        if cell.is_flagged() {
            self.flagged += 1;
        } else {
            self.flagged -= 1;
        }
        Ok(BTreeSet::from([index]))
    }

    fn restart(&mut self, config: Option<GameConfig>) -> Result<BTreeSet<CellIndex>> {
        let config = config.unwrap_or(self.config);
        *self = Self::new(config)?;
        Ok((0..self.size().total_cells()).collect())
    }

    fn validate_index(&self, index: CellIndex) -> Result<Coord2> {
        let size = self.size();
        if size.contains_index(index) {
            Ok(size.coords_of(index))
        } else {
            Err(GameError::OutOfRange {
                index,
                cells: size.total_cells(),
            })
        }
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.is_finished() {
            Err(Rejection::MatchFinished.into())
        } else {
            Ok(())
        }
    }
}
