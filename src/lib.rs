//! Alpha-beta minimax agent for n×n tic-tac-toe
//!
//! This crate provides:
//! - Board representation with win, draw and move-legality rules for 3×3 to 5×5
//! - Positional scoring matrices and a static evaluation function
//! - A depth-limited minimax agent with alpha-beta pruning, move ordering
//!   and configurable tie-breaking
//! - Player adapters and an arena for playing games and series
//! - The `ttt` command-line interface

pub mod app;
pub mod cli;
pub mod error;
pub mod minimax;
pub mod pipeline;
pub mod ports;
pub mod tictactoe;

pub use error::{Error, Result};
