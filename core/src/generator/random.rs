use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Generation strategy that lights every cell independently with the configured chance.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomGridGenerator {
    seed: u64,
}

impl RandomGridGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl GridGenerator for RandomGridGenerator {
    fn generate(self, config: GameConfig) -> Result<Grid> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let grid = Grid::random(&config, &mut rng)?;

        if grid.has_won() {
            log::debug!(
                "Generated {}x{} grid with no lights on, seed: {}",
                config.nrows,
                config.ncols,
                self.seed
            );
        }
        Ok(grid)
    }
}
