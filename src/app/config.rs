//! Configuration types for agent creation.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, minimax::MinimaxAgent, minimax::TieBreak, tictactoe::Mark};

/// Configuration for creating a minimax agent.
///
/// # Examples
///
/// ```
/// use minimax_ttt::app::AgentConfig;
/// use minimax_ttt::minimax::TieBreak;
/// use minimax_ttt::tictactoe::Mark;
///
/// let agent = AgentConfig::new(Mark::CROSS)
///     .with_depth_limit(4)
///     .with_tie_break(TieBreak::FirstFound)
///     .with_seed(42)
///     .build()?;
/// assert_eq!(agent.depth_limit(), 4);
/// # Ok::<(), minimax_ttt::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Mark the agent maximizes for
    pub mark: Mark,
    /// Plies searched before falling back to the positional evaluation
    pub depth_limit: usize,
    /// Try heavier cells first
    pub move_ordering: bool,
    /// Stop exploring a node once beta <= alpha
    pub pruning: bool,
    /// Resolution of equally scored moves
    pub tie_break: TieBreak,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl AgentConfig {
    /// Default search depth; covers every ply of a 3x3 game
    pub const DEFAULT_DEPTH_LIMIT: usize = 9;

    /// Create a configuration for `mark`.
    ///
    /// Uses default values for other parameters:
    /// - Depth limit: 9
    /// - Move ordering and pruning: enabled
    /// - Tie-break: `TieBreak::Uniform`
    /// - Seed: None (non-deterministic)
    pub fn new(mark: Mark) -> Self {
        Self {
            mark,
            depth_limit: Self::DEFAULT_DEPTH_LIMIT,
            move_ordering: true,
            pruning: true,
            tie_break: TieBreak::default(),
            seed: None,
        }
    }

    pub fn with_depth_limit(mut self, depth_limit: usize) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    pub fn with_move_ordering(mut self, enabled: bool) -> Self {
        self.move_ordering = enabled;
        self
    }

    pub fn with_pruning(mut self, enabled: bool) -> Self {
        self.pruning = enabled;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration can produce a working agent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for a zero depth limit, which
    /// would cut every search off at the root without a move.
    pub fn validate(&self) -> Result<()> {
        if self.depth_limit == 0 {
            return Err(Error::InvalidConfiguration {
                message: "depth limit must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Validate and create the agent
    pub fn build(&self) -> Result<MinimaxAgent> {
        self.validate()?;
        let agent = MinimaxAgent::new(self.mark, self.depth_limit)
            .with_move_ordering(self.move_ordering)
            .with_pruning(self.pruning)
            .with_tie_break(self.tie_break);
        Ok(match self.seed {
            Some(seed) => agent.with_seed(seed),
            None => agent,
        })
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new(Mark::CIRCLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AgentConfig::default();
        assert_eq!(config.mark, Mark::CIRCLE);
        assert_eq!(config.depth_limit, 9);
        assert!(config.move_ordering && config.pruning);
        assert_eq!(config.tie_break, TieBreak::Uniform);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_build_applies_settings() {
        let agent = AgentConfig::new(Mark::CROSS)
            .with_depth_limit(3)
            .with_move_ordering(false)
            .with_pruning(false)
            .with_tie_break(TieBreak::FirstFound)
            .build()
            .unwrap();
        assert_eq!(agent.mark(), Mark::CROSS);
        assert_eq!(agent.depth_limit(), 3);
        assert!(!agent.move_ordering());
        assert!(!agent.pruning());
        assert_eq!(agent.tie_break(), TieBreak::FirstFound);
    }

    #[test]
    fn test_zero_depth_rejected() {
        let result = AgentConfig::default().with_depth_limit(0).build();
        assert!(matches!(result, Err(Error::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_seeded_agents_agree() {
        let board = crate::tictactoe::Board::new(3).unwrap();
        let config = AgentConfig::default().with_seed(99);
        let mut first = config.build().unwrap();
        let mut second = config.build().unwrap();
        for _ in 0..3 {
            assert_eq!(
                first.select_move(&board, Mark::CIRCLE).unwrap(),
                second.select_move(&board, Mark::CIRCLE).unwrap()
            );
        }
    }
}
