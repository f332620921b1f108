//! Application layer: configuration turned into ready-to-play agents.

pub mod config;

pub use config::AgentConfig;
