//! Player adapters: the minimax agent and a random baseline

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    minimax::{Decision, MinimaxAgent},
    ports::Player,
    tictactoe::{Board, Mark},
};

/// Minimax agent wrapper
pub struct MinimaxPlayer {
    agent: MinimaxAgent,
    name: String,
    last_decision: Option<Decision>,
}

impl MinimaxPlayer {
    /// Create from an existing agent
    pub fn new(agent: MinimaxAgent, name: String) -> Self {
        Self {
            agent,
            name,
            last_decision: None,
        }
    }

    /// Get reference to underlying agent
    pub fn agent(&self) -> &MinimaxAgent {
        &self.agent
    }
}

impl Player for MinimaxPlayer {
    fn select_move(&mut self, board: &Board, side: Mark) -> Result<usize> {
        let decision = self.agent.decide(board, side)?;
        self.last_decision = Some(decision);
        Ok(decision.best_move)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn assign_mark(&mut self, mark: Mark) {
        self.agent.set_mark(mark);
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.agent.reseed(seed);
        Ok(())
    }

    fn last_decision(&self) -> Option<Decision> {
        self.last_decision
    }
}

/// Random policy player (baseline)
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    /// Create a new random player
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random player with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn select_move(&mut self, board: &Board, _side: Mark) -> Result<usize> {
        let moves = board.empty_indices();
        if moves.is_empty() {
            return Err(Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}
