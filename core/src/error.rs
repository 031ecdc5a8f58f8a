use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid must have at least one row and one column")]
    InvalidDimensions,
    #[error("Chance of a light starting on must be within 0 and 1")]
    InvalidChance,
    #[error("Grid rows are empty, ragged or contain an unknown cell")]
    InvalidBoardShape,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Game already won, no new moves are accepted")]
    AlreadyEnded,
}

impl GameError {
    /// Whether the error comes from rejecting a [`crate::GameConfig`].
    pub const fn is_config_error(self) -> bool {
        matches!(self, Self::InvalidDimensions | Self::InvalidChance)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
