//! Minimax search with alpha-beta pruning
//!
//! The agent explores the game tree depth-first. Every hypothetical move is
//! played on a clone of the current board, so backtracking is simply
//! dropping the clone. Leaves (depth limit, win, or full board) are scored
//! by [`evaluate`] from the agent's own point of view: the agent's mark
//! maximizes, the other mark minimizes.

use std::cmp::Reverse;

use rand::{SeedableRng, random, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::{evaluation::evaluate, scoring::ScoringMatrix, tie_break::TieBreak};
use crate::{
    Error, Result,
    tictactoe::{Board, Mark},
};

/// Outcome of one top-level decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub best_move: usize,
    pub score: i32,
    /// Alpha-beta cutoffs performed during this decision
    pub prunings: usize,
    /// Search nodes visited, leaves included
    pub nodes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Objective {
    Maximize,
    Minimize,
}

impl Objective {
    fn worst(self) -> i32 {
        match self {
            Objective::Maximize => i32::MIN,
            Objective::Minimize => i32::MAX,
        }
    }

    fn improves(self, score: i32, best: i32) -> bool {
        match self {
            Objective::Maximize => score > best,
            Objective::Minimize => score < best,
        }
    }
}

/// Adversarial search agent playing one mark
#[derive(Debug, Clone)]
pub struct MinimaxAgent {
    mark: Mark,
    depth_limit: usize,
    move_ordering: bool,
    pruning: bool,
    tie_break: TieBreak,
    rng: StdRng,
    prunings: usize,
    nodes: usize,
}

impl MinimaxAgent {
    /// Create an agent with move ordering, pruning and uniform tie-breaks enabled
    pub fn new(mark: Mark, depth_limit: usize) -> Self {
        Self {
            mark,
            depth_limit,
            move_ordering: true,
            pruning: true,
            tie_break: TieBreak::default(),
            rng: StdRng::seed_from_u64(random()),
            prunings: 0,
            nodes: 0,
        }
    }

    pub fn with_move_ordering(mut self, enabled: bool) -> Self {
        self.move_ordering = enabled;
        self
    }

    /// Toggle alpha-beta cutoffs. Without them the search is plain minimax.
    pub fn with_pruning(mut self, enabled: bool) -> Self {
        self.pruning = enabled;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.reseed(seed);
        self
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn set_mark(&mut self, mark: Mark) {
        self.mark = mark;
    }

    pub fn depth_limit(&self) -> usize {
        self.depth_limit
    }

    pub fn move_ordering(&self) -> bool {
        self.move_ordering
    }

    pub fn pruning(&self) -> bool {
        self.pruning
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Cutoffs performed during the most recent decision
    pub fn prunings(&self) -> usize {
        self.prunings
    }

    /// Nodes visited during the most recent decision
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Choose a move for `side` on `board`.
    ///
    /// # Errors
    ///
    /// See [`MinimaxAgent::decide`].
    pub fn select_move(&mut self, board: &Board, side: Mark) -> Result<usize> {
        self.decide(board, side).map(|decision| decision.best_move)
    }

    /// Run a full search for `side` and report the move, its score and the
    /// search diagnostics.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidSide`] if `side` or the agent's own mark is not one
    ///   of the board's marks
    /// - [`Error::GameOver`] if the board is already terminal
    /// - [`Error::InvalidConfiguration`] for a zero depth limit
    /// - [`Error::UnsupportedBoardSize`] if move ordering or a depth-limited
    ///   leaf needs a scoring matrix the board size does not have
    pub fn decide(&mut self, board: &Board, side: Mark) -> Result<Decision> {
        let marks = board.marks();
        for mark in [side, self.mark] {
            if !marks.contains(&mark) {
                return Err(Error::InvalidSide { side: mark, marks });
            }
        }
        if board.is_terminal() {
            return Err(Error::GameOver);
        }

        if self.depth_limit == 0 {
            return Err(Error::InvalidConfiguration {
                message: "depth limit must be at least 1".to_string(),
            });
        }

        self.prunings = 0;
        self.nodes = 0;

        let (score, best_move) = self.search_root(board, side)?;

        info!(prunings = self.prunings, "Number of prunings for this move");
        debug!(
            agent = %self.mark,
            side = %side,
            best_move,
            score,
            nodes = self.nodes,
            "move selected"
        );

        Ok(Decision {
            best_move,
            score,
            prunings: self.prunings,
            nodes: self.nodes,
        })
    }

    /// Score every root move and pick among the best.
    ///
    /// Each child is searched with the window widened by one point on the
    /// side that is being improved. A child scoring exactly the current best
    /// then lies strictly inside its window, so its score is exact and not a
    /// cutoff bound; a move only joins the tie set when it is truly as good
    /// as the best. The root window never closes, so nothing is pruned here.
    fn search_root(&mut self, board: &Board, side: Mark) -> Result<(i32, usize)> {
        self.nodes += 1;

        let objective = self.objective(board, side)?;
        let next_side = board.opponent_of(side).ok_or(Error::InvalidSide {
            side,
            marks: board.marks(),
        })?;

        let mut alpha = i32::MIN;
        let mut beta = i32::MAX;
        let mut best_score = objective.worst();
        let mut best_moves = Vec::new();

        for mv in self.ordered_moves(board)? {
            let mut child = board.clone();
            child.register_move(mv)?;

            let score = match objective {
                Objective::Maximize => {
                    self.search(&child, next_side, 1, alpha.saturating_sub(1), beta)?
                }
                Objective::Minimize => {
                    self.search(&child, next_side, 1, alpha, beta.saturating_add(1))?
                }
            };

            if objective.improves(score, best_score) {
                best_score = score;
                best_moves.clear();
                best_moves.push(mv);
            } else if score == best_score {
                best_moves.push(mv);
            }

            match objective {
                Objective::Maximize => alpha = alpha.max(score),
                Objective::Minimize => beta = beta.min(score),
            }
        }

        let chosen = self
            .tie_break
            .choose(&best_moves, &mut self.rng)
            .ok_or(Error::NoValidMoves)?;
        Ok((best_score, chosen))
    }

    /// Fail-soft alpha-beta below the root; returns the node's score only.
    fn search(
        &mut self,
        board: &Board,
        side: Mark,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
    ) -> Result<i32> {
        self.nodes += 1;

        if depth >= self.depth_limit || board.winner().is_some() || board.is_full() {
            return evaluate(board, self.mark);
        }

        let objective = self.objective(board, side)?;
        let next_side = board.opponent_of(side).ok_or(Error::InvalidSide {
            side,
            marks: board.marks(),
        })?;

        let mut best_score = objective.worst();
        for mv in self.ordered_moves(board)? {
            let mut child = board.clone();
            child.register_move(mv)?;

            let score = self.search(&child, next_side, depth + 1, alpha, beta)?;
            if objective.improves(score, best_score) {
                best_score = score;
            }

            match objective {
                Objective::Maximize => alpha = alpha.max(score),
                Objective::Minimize => beta = beta.min(score),
            }

            if self.pruning && beta <= alpha {
                self.prunings += 1;
                trace!(depth, mv, alpha, beta, "cutoff");
                break;
            }
        }

        Ok(best_score)
    }

    /// The agent's mark maximizes, the other board mark minimizes
    fn objective(&self, board: &Board, side: Mark) -> Result<Objective> {
        if side == self.mark {
            Ok(Objective::Maximize)
        } else if board.opponent_of(self.mark) == Some(side) {
            Ok(Objective::Minimize)
        } else {
            Err(Error::InvalidSide {
                side,
                marks: board.marks(),
            })
        }
    }

    /// Empty cells, highest positional weight first when ordering is on.
    /// The sort is stable so equal weights keep row-major order.
    fn ordered_moves(&self, board: &Board) -> Result<Vec<usize>> {
        let mut moves = board.empty_indices();
        if self.move_ordering {
            let matrix = ScoringMatrix::for_size(board.size())?;
            moves.sort_by_key(|&mv| Reverse(matrix.weight(mv)));
        }
        Ok(moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimax::evaluation::{LOSS_SCORE, WIN_SCORE};

    fn board(text: &str) -> Board {
        Board::from_string(text).unwrap()
    }

    #[test]
    fn test_ordered_moves_are_stable() {
        let agent = MinimaxAgent::new(Mark::CIRCLE, 9);
        let moves = agent.ordered_moves(&Board::new(3).unwrap()).unwrap();
        assert_eq!(moves, vec![4, 0, 2, 6, 8, 1, 3, 5, 7]);

        let unordered = agent.clone().with_move_ordering(false);
        let moves = unordered.ordered_moves(&Board::new(3).unwrap()).unwrap();
        assert_eq!(moves, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_takes_immediate_win() {
        // o to move, o o . on the top row
        let b = board("oo./xx./...");
        let mut agent = MinimaxAgent::new(Mark::CIRCLE, 9).with_tie_break(TieBreak::FirstFound);
        let decision = agent.decide(&b, Mark::CIRCLE).unwrap();
        assert_eq!(decision.best_move, 2);
        assert_eq!(decision.score, WIN_SCORE);
    }

    #[test]
    fn test_minimizing_root_reports_loss_for_agent() {
        // x to move can complete the middle row against an o agent
        let b = board("oo./xx./o..");
        let mut agent = MinimaxAgent::new(Mark::CIRCLE, 9).with_seed(1);
        let decision = agent.decide(&b, Mark::CROSS).unwrap();
        assert_eq!(decision.best_move, 5);
        assert_eq!(decision.score, LOSS_SCORE);
    }

    #[test]
    fn test_invalid_side() {
        let b = Board::new(3).unwrap();
        let mut agent = MinimaxAgent::new(Mark::CIRCLE, 3);
        let err = agent.decide(&b, Mark::new('z')).unwrap_err();
        assert!(matches!(err, Error::InvalidSide { side, .. } if side == Mark::new('z')));

        let mut stranger = MinimaxAgent::new(Mark::new('z'), 3);
        assert!(matches!(
            stranger.select_move(&b, Mark::CIRCLE),
            Err(Error::InvalidSide { .. })
        ));
    }

    #[test]
    fn test_terminal_root_is_game_over() {
        let b = board("ooo/xx./...");
        let mut agent = MinimaxAgent::new(Mark::CROSS, 9);
        assert!(matches!(agent.decide(&b, Mark::CROSS), Err(Error::GameOver)));
    }

    #[test]
    fn test_unsupported_size_with_ordering() {
        let b = Board::new(6).unwrap();
        let mut agent = MinimaxAgent::new(Mark::CIRCLE, 1);
        assert!(matches!(
            agent.decide(&b, Mark::CIRCLE),
            Err(Error::UnsupportedBoardSize { size: 6 })
        ));
    }

    #[test]
    fn test_depth_one_prefers_centre() {
        let b = Board::new(3).unwrap();
        let mut agent = MinimaxAgent::new(Mark::CIRCLE, 1).with_seed(3);
        let decision = agent.decide(&b, Mark::CIRCLE).unwrap();
        assert_eq!(decision.best_move, 4);
        assert_eq!(decision.score, 4);
        assert_eq!(decision.nodes, 10);
    }

    #[test]
    fn test_counters_reset_per_decision() {
        let b = Board::new(3).unwrap();
        let mut agent = MinimaxAgent::new(Mark::CIRCLE, 9).with_seed(5);
        let first = agent.decide(&b, Mark::CIRCLE).unwrap();
        let second = agent.decide(&b, Mark::CIRCLE).unwrap();
        assert!(first.prunings > 0);
        assert_eq!(first.prunings, second.prunings);
        assert_eq!(first.nodes, second.nodes);
        assert_eq!(agent.prunings(), second.prunings);
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        let b = Board::new(3).unwrap();
        let mut agent = MinimaxAgent::new(Mark::CIRCLE, 0);
        assert!(matches!(
            agent.decide(&b, Mark::CIRCLE),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_root_ties_are_exact() {
        // After a corner opening only the centre holds the draw for x; any
        // other reply must never slip into the tie set
        let cornered = board("o../.../...");
        let mut seen = std::collections::HashSet::new();
        for seed in 0..40 {
            let mut agent = MinimaxAgent::new(Mark::CROSS, 9).with_seed(seed);
            let decision = agent.decide(&cornered, Mark::CROSS).unwrap();
            assert_eq!(decision.score, 0);
            seen.insert(decision.best_move);
        }
        assert_eq!(seen, std::collections::HashSet::from([4]));
    }

    #[test]
    fn test_no_pruning_counts_nothing() {
        let b = board("ox./.../...");
        let mut agent = MinimaxAgent::new(Mark::CIRCLE, 9)
            .with_pruning(false)
            .with_seed(9);
        agent.decide(&b, Mark::CIRCLE).unwrap();
        assert_eq!(agent.prunings(), 0);
    }
}
