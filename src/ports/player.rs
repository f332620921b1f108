//! Player port - abstraction over anything that can pick a move
//!
//! The arena drives games through this trait so it can pit the minimax
//! agent against baselines or against itself without knowing how moves
//! are chosen.

use crate::{
    Result,
    minimax::Decision,
    tictactoe::{Board, Mark},
};

/// Player trait - unified interface for move selection
///
/// # Examples
///
/// ```no_run
/// use minimax_ttt::{ports::Player, tictactoe::Board};
///
/// fn opening<P: Player>(player: &mut P) -> minimax_ttt::Result<usize> {
///     let board = Board::new(3)?;
///     player.select_move(&board, board.to_move())
/// }
/// ```
pub trait Player {
    /// Select a move for `side` on `board`.
    ///
    /// The returned index must be an empty cell of `board`.
    ///
    /// # Errors
    ///
    /// Returns an error if no move can be chosen (terminal board, invalid side).
    fn select_move(&mut self, board: &Board, side: Mark) -> Result<usize>;

    /// Get the player's name, used in results and logging.
    fn name(&self) -> &str;

    /// Tell the player which mark it plays in the coming game.
    ///
    /// # Default Implementation
    ///
    /// Does nothing, suitable for players that only look at `side`.
    fn assign_mark(&mut self, _mark: Mark) {}

    /// Search diagnostics behind the most recent move, if the player searches.
    ///
    /// # Default Implementation
    ///
    /// Returns `None`.
    fn last_decision(&self) -> Option<Decision> {
        None
    }

    /// Seed the player's internal random number generator.
    ///
    /// # Default Implementation
    ///
    /// Does nothing and returns `Ok(())`.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
