//! Common test utilities for the minimax test suite.
//!
//! Helpers for building positions move by move and for sampling random
//! reachable positions.

use minimax_ttt::{
    app::AgentConfig,
    minimax::{MinimaxAgent, TieBreak},
    tictactoe::{Board, Mark},
};
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

/// Play `moves` in order on an empty board of `size`, alternating sides.
pub fn board_from_moves(size: usize, moves: &[usize]) -> Board {
    let mut board = Board::new(size).unwrap();
    for &mv in moves {
        board.register_move(mv).unwrap();
    }
    board
}

/// Play up to `plies` random moves from an empty board, stopping early if
/// the game ends.
pub fn random_position(size: usize, plies: usize, seed: u64) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new(size).unwrap();
    for _ in 0..plies {
        if board.is_terminal() {
            break;
        }
        let moves = board.empty_indices();
        let mv = *moves.choose(&mut rng).unwrap();
        board.register_move(mv).unwrap();
    }
    board
}

/// Deterministic agent that returns the first optimal move it finds.
pub fn first_found_agent(mark: Mark, depth_limit: usize) -> MinimaxAgent {
    AgentConfig::new(mark)
        .with_depth_limit(depth_limit)
        .with_tie_break(TieBreak::FirstFound)
        .build()
        .unwrap()
}
