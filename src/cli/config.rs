//! Shared configuration types for CLI commands

use anyhow::Result;
use clap::{Args, ValueEnum};

use crate::{
    app::AgentConfig,
    minimax::TieBreak,
    pipeline::{MinimaxPlayer, Player, RandomPlayer},
    tictactoe::Mark,
};

/// Search settings shared by every command that builds a minimax agent
#[derive(Args, Debug, Clone)]
pub struct AgentArgs {
    /// Search depth limit in plies
    #[arg(long, short = 'd', default_value_t = AgentConfig::DEFAULT_DEPTH_LIMIT)]
    pub depth: usize,

    /// Explore moves in row-major order instead of by positional weight
    #[arg(long)]
    pub no_ordering: bool,

    /// Disable alpha-beta cutoffs (plain minimax)
    #[arg(long)]
    pub no_pruning: bool,

    /// How equally scored moves are chosen (`uniform` or `first`)
    #[arg(long, default_value_t = TieBreak::Uniform)]
    pub tie_break: TieBreak,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl AgentArgs {
    /// Agent configuration for `mark`; `seed_offset` keeps two agents from
    /// sharing a random stream when a seed is given.
    pub fn to_config(&self, mark: Mark, seed_offset: u64) -> AgentConfig {
        let config = AgentConfig::new(mark)
            .with_depth_limit(self.depth)
            .with_move_ordering(!self.no_ordering)
            .with_pruning(!self.no_pruning)
            .with_tie_break(self.tie_break);
        match self.seed {
            Some(seed) => config.with_seed(seed.wrapping_add(seed_offset)),
            None => config,
        }
    }
}

/// Kinds of player the CLI can seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    /// Alpha-beta minimax agent
    Minimax,
    /// Uniformly random legal moves
    Random,
}

/// Build a player for the given seat (0 opens, 1 replies)
pub fn create_player(kind: PlayerKind, args: &AgentArgs, seat: usize) -> Result<Box<dyn Player>> {
    let marks = [Mark::CIRCLE, Mark::CROSS];
    let mark = marks[seat % 2];
    let seed_offset = seat as u64;

    Ok(match kind {
        PlayerKind::Minimax => {
            let agent = args.to_config(mark, seed_offset).build()?;
            let name = format!("Minimax({}, depth {})", mark, args.depth);
            Box::new(MinimaxPlayer::new(agent, name))
        }
        PlayerKind::Random => {
            let name = format!("Random({mark})");
            match args.seed {
                Some(seed) => Box::new(RandomPlayer::with_seed(
                    name,
                    seed.wrapping_add(seed_offset),
                )),
                None => Box::new(RandomPlayer::new(name)),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> AgentArgs {
        AgentArgs {
            depth: 4,
            no_ordering: true,
            no_pruning: false,
            tie_break: TieBreak::FirstFound,
            seed: Some(10),
        }
    }

    #[test]
    fn test_to_config() {
        let config = args().to_config(Mark::CROSS, 1);
        assert_eq!(config.mark, Mark::CROSS);
        assert_eq!(config.depth_limit, 4);
        assert!(!config.move_ordering);
        assert!(config.pruning);
        assert_eq!(config.tie_break, TieBreak::FirstFound);
        assert_eq!(config.seed, Some(11));
    }

    #[test]
    fn test_create_player_rejects_zero_depth() {
        let mut bad = args();
        bad.depth = 0;
        assert!(create_player(PlayerKind::Minimax, &bad, 0).is_err());
        assert!(create_player(PlayerKind::Random, &bad, 0).is_ok());
    }
}
