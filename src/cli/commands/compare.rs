//! Compare command - Play a series between two players

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{
    cli::{
        config::{AgentArgs, PlayerKind, create_player},
        output::{format_number, print_kv, print_section, print_subsection},
    },
    pipeline::Arena,
};

#[derive(Parser, Debug)]
#[command(about = "Compare two players over a series of games")]
pub struct CompareArgs {
    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Board side length (3, 4 or 5)
    #[arg(long, short = 'n', default_value_t = 3)]
    pub size: usize,

    /// First player
    #[arg(long, value_enum, default_value_t = PlayerKind::Minimax)]
    pub first: PlayerKind,

    /// Second player
    #[arg(long, value_enum, default_value_t = PlayerKind::Random)]
    pub second: PlayerKind,

    /// Alternate which player opens each game
    #[arg(long)]
    pub alternate: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub agent: AgentArgs,
}

pub fn execute(args: CompareArgs) -> Result<()> {
    if args.games == 0 {
        return Err(anyhow!("--games must be at least 1"));
    }

    let first = create_player(args.first, &args.agent, 0)?;
    let second = create_player(args.second, &args.agent, 1)?;
    let mut arena =
        Arena::new(first, second, args.size).with_alternating_seats(args.alternate);

    if !args.json {
        let [first_name, second_name] = arena.player_names();
        print_section("Comparison");
        print_kv("First", &first_name);
        print_kv("Second", &second_name);
        print_kv("Games", &format_number(args.games));
        print_kv("Board size", &args.size.to_string());
    }

    let result = arena.play_series(args.games)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_subsection("Results");
    for (player, name) in result.players.iter().enumerate() {
        print_kv(
            name,
            &format!(
                "{} wins ({:.1}%)",
                result.wins[player],
                result.win_rate(player) * 100.0
            ),
        );
    }
    print_kv("Draws", &result.draws.to_string());

    Ok(())
}
