use crate::*;
pub use pattern::*;
pub use random::*;

mod pattern;
mod random;

/// Produces the starting grid of a game. Invalid configs are rejected, never generated.
pub trait GridGenerator {
    fn generate(self, config: GameConfig) -> Result<Grid>;
}

/// Any random number generator can be used directly, which keeps grid creation reproducible
/// with a seeded one.
impl<R: Rng> GridGenerator for &mut R {
    fn generate(self, config: GameConfig) -> Result<Grid> {
        Grid::random(&config, self)
    }
}
