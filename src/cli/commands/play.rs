//! Play command - Play a single game and print every move

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::{AgentArgs, PlayerKind, create_player},
        output::{format_number, print_kv, print_section},
    },
    pipeline::Arena,
    tictactoe::GameOutcome,
};

#[derive(Parser, Debug)]
#[command(about = "Play one game between two players")]
pub struct PlayArgs {
    /// Board side length (3, 4 or 5)
    #[arg(long, short = 'n', default_value_t = 3)]
    pub size: usize,

    /// Player taking the first mark
    #[arg(long, value_enum, default_value_t = PlayerKind::Minimax)]
    pub first: PlayerKind,

    /// Player taking the second mark
    #[arg(long, value_enum, default_value_t = PlayerKind::Minimax)]
    pub second: PlayerKind,

    /// Print the finished game record as JSON instead of the move log
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub agent: AgentArgs,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let first = create_player(args.first, &args.agent, 0)?;
    let second = create_player(args.second, &args.agent, 1)?;
    let mut arena = Arena::new(first, second, args.size);

    if args.json {
        let game = arena.play_game(0, |_| {})?;
        println!("{}", game.to_json()?);
        return Ok(());
    }

    let [first_name, second_name] = arena.player_names();
    print_section(&format!("{first_name} vs {second_name}"));

    let game = arena.play_game(0, |turn| {
        let (row, col) = turn.board.position(turn.index);
        println!(
            "\n{} ({}) plays {} (row {row}, col {col})",
            turn.player, turn.side, turn.index
        );
        if let Some(decision) = turn.decision {
            println!(
                "  score {}, {} prunings, {} nodes",
                decision.score,
                format_number(decision.prunings),
                format_number(decision.nodes)
            );
        }
        print!("{}", turn.board);
    })?;

    println!();
    print_kv("Moves", &game.moves.len().to_string());
    match game.outcome {
        Some(GameOutcome::Win(mark)) => print_kv("Result", &format!("{mark} wins")),
        Some(GameOutcome::Draw) => print_kv("Result", "draw"),
        None => print_kv("Result", "unfinished"),
    }

    Ok(())
}
