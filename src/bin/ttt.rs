//! ttt - Alpha-beta minimax tic-tac-toe
//!
//! This CLI provides:
//! - Playing single games between minimax and random players
//! - Analyzing a position for its best move and search statistics
//! - Comparing two players over a series of games

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ttt")]
#[command(version, about = "Alpha-beta minimax tic-tac-toe", long_about = None)]
struct Cli {
    /// Log each decision at debug level (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game and print every move
    Play(minimax_ttt::cli::commands::play::PlayArgs),

    /// Find the best move in a position
    Analyze(minimax_ttt::cli::commands::analyze::AnalyzeArgs),

    /// Compare two players over a series of games
    Compare(minimax_ttt::cli::commands::compare::CompareArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => minimax_ttt::cli::commands::play::execute(args),
        Commands::Analyze(args) => minimax_ttt::cli::commands::analyze::execute(args),
        Commands::Compare(args) => minimax_ttt::cli::commands::compare::execute(args),
    }
}
