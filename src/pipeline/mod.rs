//! Game-playing pipeline
//!
//! - [`players`]: adapters implementing the [`Player`] port
//! - [`arena`]: the game loop and series tally

pub mod arena;
pub mod players;

pub use arena::{Arena, SeriesResult, Turn};
pub use players::{MinimaxPlayer, RandomPlayer};

pub use crate::ports::Player;
