use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board size must be greater than 2, got {size}")]
    InvalidConfiguration { size: u32 },
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Cell is already occupied")]
    CellOccupied,
    #[error("Invalid letter {0:?}, expected S or O")]
    InvalidLetter(char),
}

impl GameError {
    pub(crate) fn invalid_size(size: Coord) -> Self {
        Self::InvalidConfiguration { size: size.into() }
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
