//! Analyze command - Search a single position and report the decision

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        config::AgentArgs,
        output::{print_decision, print_kv, print_section, print_subsection},
    },
    minimax::{Decision, ScoringMatrix, evaluate},
    tictactoe::{Board, Mark},
};

#[derive(Parser, Debug)]
#[command(about = "Find the best move in a position")]
pub struct AnalyzeArgs {
    /// Position as text, e.g. "oo./.x./..." ('.', '_' or '-' for empty cells)
    #[arg(long, short = 'b')]
    pub board: String,

    /// Side to search for (defaults to the side to move)
    #[arg(long, short = 's')]
    pub side: Option<char>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub agent: AgentArgs,
}

#[derive(Debug, Serialize)]
struct Analysis {
    board: Board,
    side: Mark,
    static_score: i32,
    row: usize,
    col: usize,
    #[serde(flatten)]
    decision: Decision,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.board).context("failed to parse --board")?;
    let side = args.side.map(Mark::new).unwrap_or_else(|| board.to_move());

    let mut agent = args.agent.to_config(side, 0).build()?;
    let decision = agent
        .decide(&board, side)
        .with_context(|| format!("no move to analyze for {side}"))?;
    let static_score = evaluate(&board, side)?;

    if args.json {
        let (row, col) = board.position(decision.best_move);
        let analysis = Analysis {
            board,
            side,
            static_score,
            row,
            col,
            decision,
        };
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    print_section(&format!("Analysis for {side}"));
    print!("{board}");
    println!();
    print_kv("Depth limit", &agent.depth_limit().to_string());
    print_kv("Static score", &static_score.to_string());
    print_decision(&board, &decision);

    if let Ok(matrix) = ScoringMatrix::for_size(board.size()) {
        let (row, col) = board.position(decision.best_move);
        print_kv("Cell weight", &matrix.weight_at(row, col).to_string());

        print_subsection("Scoring matrix");
        for weights in matrix.rows() {
            let row: Vec<String> = weights.iter().map(|w| w.to_string()).collect();
            println!("  {}", row.join(" "));
        }
    }

    Ok(())
}
