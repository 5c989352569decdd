use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid cell index")]
    InvalidCell,
    #[error("Cell is already occupied")]
    CellOccupied,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("History index out of range")]
    InvalidHistoryIndex,
    #[error("Board must have exactly 9 cells")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
