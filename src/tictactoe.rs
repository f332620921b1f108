//! Generalized N x N tic-tac-toe

pub mod board;
pub mod game;
pub mod lines;

pub use board::{Board, Cell, EMPTY_GLYPH, Mark};
pub use game::{Game, GameOutcome, Move};
pub use lines::{Line, winning_lines};
