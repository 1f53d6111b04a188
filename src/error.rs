use crate::board::CELL_COUNT;
use thiserror::Error;

/// Errors reported by board parsing and by `GameSession`.
///
/// The search itself never fails; these cover malformed input coming from a
/// front end and moves requested out of turn.
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("position {position} is out of bounds (must be 0-{max})", max = CELL_COUNT - 1)]
    PositionOutOfRange { position: usize },

    #[error("position {position} is already occupied")]
    PositionOccupied { position: usize },

    #[error("game already over")]
    GameOver,

    #[error("it is not the human player's turn")]
    NotHumanTurn,

    #[error("it is not the engine's turn")]
    NotEngineTurn,

    #[error("no move available on a full board")]
    NoMoveAvailable,

    #[error("engine chose illegal position {position}")]
    IllegalEngineMove { position: u8 },

    #[error("board string has {got} cells, expected {expected}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at position {position}")]
    InvalidCellCharacter { character: char, position: usize },
}

/// Convenience type alias for results using the crate's `Error` type.
pub type Result<T> = std::result::Result<T, Error>;
