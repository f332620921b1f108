//! Error types for the minimax-ttt crate

use thiserror::Error;

use crate::tictactoe::Mark;

/// Main error type for the minimax-ttt crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid board size {size}: must be greater than zero")]
    InvalidBoardSize { size: usize },

    #[error("player {player} attempted to play at index {index}, outside the {cells}-cell board\n{board}")]
    MoveOutOfBounds {
        player: Mark,
        index: usize,
        cells: usize,
        board: String,
    },

    #[error("player {player} attempted to overwrite {occupant} at index {index}\n{board}")]
    CellOccupied {
        player: Mark,
        occupant: Mark,
        index: usize,
        board: String,
    },

    #[error("invalid side '{side}': expected '{}' or '{}'", .marks[0], .marks[1])]
    InvalidSide { side: Mark, marks: [Mark; 2] },

    #[error("scoring matrix not defined for board size {size}")]
    UnsupportedBoardSize { size: usize },

    #[error("no valid moves found")]
    NoValidMoves,

    #[error("game already over")]
    GameOver,

    #[error("board text has {got} cells, which is not a square number: '{context}'")]
    InvalidBoardLength { got: usize, context: String },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: {first}={first_count}, {second}={second_count} (first mark must be equal or one ahead)")]
    InvalidPieceCounts {
        first: Mark,
        first_count: usize,
        second: Mark,
        second_count: usize,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error rejects an illegal move (out of range or occupied cell).
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            Error::MoveOutOfBounds { .. } | Error::CellOccupied { .. }
        )
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
