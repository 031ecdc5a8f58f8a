use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Won,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }

    fn of(grid: &Grid) -> Self {
        if grid.has_won() {
            Self::Won
        } else {
            Self::Playing
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

/// A single game session: the current grid plus whether it has been won.
///
/// Valid transitions:
/// - Playing -> Playing, when a toggle leaves some light on
/// - Playing -> Won, when a toggle turns the last light off
///
/// Deserializing checks the config against the grid and derives the state from the grid, the
/// stored state is ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredGame")]
pub struct Game {
    config: GameConfig,
    grid: Grid,
    state: GameState,
    move_count: u32,
}

#[derive(Deserialize)]
struct StoredGame {
    config: GameConfig,
    grid: Grid,
    #[serde(default)]
    move_count: u32,
}

impl TryFrom<StoredGame> for Game {
    type Error = GameError;

    fn try_from(stored: StoredGame) -> Result<Self> {
        Self::from_parts(stored.config, stored.grid, stored.move_count)
    }
}

impl Game {
    /// Starts a game. A generated grid that is already dark starts out [`GameState::Won`].
    pub fn new(config: GameConfig, generator: impl GridGenerator) -> Result<Self> {
        config.validate()?;
        let grid = generator.generate(config)?;
        let game = Self::from_parts(config, grid, 0)?;
        log::debug!(
            "New {}x{} game, {} lights on, state: {:?}",
            config.nrows,
            config.ncols,
            game.grid.lit_count(),
            game.state
        );
        Ok(game)
    }

    fn from_parts(config: GameConfig, grid: Grid, move_count: u32) -> Result<Self> {
        config.validate()?;
        if grid.size() != config.size() {
            return Err(GameError::InvalidBoardShape);
        }

        let state = GameState::of(&grid);
        Ok(Self {
            config,
            grid,
            state,
            move_count,
        })
    }

    /// Throws the current grid away and starts over with the same config.
    pub fn restart(&mut self, generator: impl GridGenerator) -> Result<()> {
        *self = Self::new(self.config, generator)?;
        Ok(())
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn toggle(&mut self, coords: impl Into<Coord2>) -> Result<ToggleOutcome> {
        let coords = self.grid.validate_coords(coords.into())?;
        self.check_playing()?;

        self.grid.toggle_around(coords)?;
        self.move_count = self.move_count.saturating_add(1);
        log::trace!("Toggled around {:?}, move {}", coords, self.move_count);

        if self.grid.has_won() {
            self.state = GameState::Won;
            log::debug!("Game won after {} moves", self.move_count);
            Ok(ToggleOutcome::Won)
        } else {
            Ok(ToggleOutcome::Toggled)
        }
    }

    fn check_playing(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
