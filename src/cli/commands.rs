//! Subcommands of the `ttt` binary

pub mod analyze;
pub mod compare;
pub mod play;
