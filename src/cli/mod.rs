//! CLI infrastructure for the minimax tic-tac-toe toolkit
//!
//! This module provides the command-line interface for playing games,
//! analyzing single positions, and comparing players over a series.

pub mod commands;
pub mod config;
pub mod output;
