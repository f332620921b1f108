//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Board, Mark};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub index: usize,
    pub mark: Mark,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Mark),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal board, `None` while the game is still running
    pub fn of(board: &Board) -> Option<Self> {
        match board.winner() {
            Some(mark) => Some(GameOutcome::Win(mark)),
            None if board.is_full() => Some(GameOutcome::Draw),
            None => None,
        }
    }
}

/// A complete game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
    #[serde(skip)]
    current: Option<Board>,
}

impl Game {
    /// Start a game from the given position
    pub fn new(initial: Board) -> Self {
        let outcome = GameOutcome::of(&initial);
        Game {
            current: Some(initial.clone()),
            initial,
            moves: Vec::new(),
            outcome,
        }
    }

    /// Play a move for the side to move
    pub fn play(&mut self, index: usize) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let mut board = self.current_state()?;
        let mark = board.to_move();
        board.register_move(index)?;

        self.moves.push(Move { index, mark });
        self.outcome = GameOutcome::of(&board);
        self.current = Some(board);
        Ok(())
    }

    /// Replay moves up to a given index (exclusive)
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the replayed
    /// position, which indicates corrupted game data.
    fn replay_moves_until(&self, end_index: usize) -> Result<Board, crate::Error> {
        let mut board = self.initial.clone();
        for mv in self.moves.iter().take(end_index) {
            board.register_move(mv.index)?;
        }
        Ok(board)
    }

    /// Get current board state
    pub fn current_state(&self) -> Result<Board, crate::Error> {
        match &self.current {
            Some(board) => Ok(board.clone()),
            None => self.replay_moves_until(self.moves.len()),
        }
    }

    /// Get the sequence of board states, starting with the initial one
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        (0..=self.moves.len())
            .map(|i| self.replay_moves_until(i))
            .collect()
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Serialize the record as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, crate::Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a record written by [`Game::to_json`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] for malformed JSON, or a move
    /// error if the recorded moves do not replay from the initial board.
    pub fn from_json(json: &str) -> Result<Self, crate::Error> {
        let mut game: Game = serde_json::from_str(json)?;
        game.current = Some(game.replay_moves_until(game.moves.len())?);
        Ok(game)
    }
}
