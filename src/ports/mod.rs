//! Ports (trait boundaries) between the game core and its drivers.

pub mod player;

pub use player::Player;
