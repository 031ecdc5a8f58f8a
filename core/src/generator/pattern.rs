use super::*;

/// Always hands out the same grid, for scripted games and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternGridGenerator {
    grid: Grid,
}

impl PatternGridGenerator {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }
}

impl GridGenerator for PatternGridGenerator {
    fn generate(self, config: GameConfig) -> Result<Grid> {
        config.validate()?;
        if self.grid.size() != config.size() {
            log::warn!(
                "Pattern is {:?} but config asks for {:?}",
                self.grid.size(),
                config.size()
            );
            return Err(GameError::InvalidBoardShape);
        }
        Ok(self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_must_match_config() {
        let grid: Grid = "O.\n.O".parse().unwrap();
        let config = GameConfig::new(2, 2, 0.5).unwrap();
        assert_eq!(PatternGridGenerator::new(grid.clone()).generate(config), Ok(grid.clone()));

        let config = GameConfig::new(2, 3, 0.5).unwrap();
        assert_eq!(
            PatternGridGenerator::new(grid.clone()).generate(config),
            Err(GameError::InvalidBoardShape)
        );

        let config = GameConfig::new_unchecked(2, 2, -1.0);
        assert_eq!(
            PatternGridGenerator::new(grid).generate(config),
            Err(GameError::InvalidChance)
        );
    }
}
