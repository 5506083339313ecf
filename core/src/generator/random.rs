use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Uniform placement without replacement, fully determined by the seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinePlacer {
    seed: u64,
}

impl RandomMinePlacer {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Draws a fresh seed; it is logged so the match can be replayed.
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        log::debug!("No seed configured, using {}", seed);
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MinePlacer for RandomMinePlacer {
    fn place(self, num_cells: CellCount, num_mines: CellCount) -> Result<BTreeSet<CellIndex>> {
        crate::layout::check_mine_count(num_cells, num_mines)?;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mines: BTreeSet<_> = rand::seq::index::sample(&mut rng, num_cells, num_mines)
            .into_iter()
            .collect();

        log::debug!(
            "Placed {} mines over {} cells with seed {}",
            mines.len(),
            num_cells,
            self.seed
        );
        Ok(mines)
    }
}

/// Seeded placement of `num_mines` distinct mines over `num_cells` cells.
pub fn place(num_cells: CellCount, num_mines: CellCount, seed: u64) -> Result<BTreeSet<CellIndex>> {
    RandomMinePlacer::new(seed).place(num_cells, num_mines)
}
