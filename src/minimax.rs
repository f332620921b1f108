//! Adversarial search agent
//!
//! - [`MinimaxAgent`]: minimax with alpha-beta pruning and move ordering
//! - [`evaluate`]: static scoring of cutoff positions
//! - [`ScoringMatrix`]: fixed positional weights for sizes 3 to 5
//! - [`TieBreak`]: how equally scored moves are resolved

pub mod agent;
pub mod evaluation;
pub mod scoring;
pub mod tie_break;

pub use agent::{Decision, MinimaxAgent};
pub use evaluation::{DRAW_SCORE, LOSS_SCORE, WIN_SCORE, evaluate};
pub use scoring::ScoringMatrix;
pub use tie_break::TieBreak;
