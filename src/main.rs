use std::io;

use clap::{Parser, Subcommand};
use log::info;
use seabattle::{init_logging, text, GameEngine, MatchConfig, PlayerCount};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal, against the AI or hot-seat with a friend.
    Play {
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
        players: u8,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { players, seed } => {
            let players = PlayerCount::from_count(players)
                .ok_or_else(|| anyhow::anyhow!("players must be 1 or 2"))?;
            if let Some(s) = seed {
                info!("using fixed seed {} (game will be reproducible)", s);
            }
            let mut engine = GameEngine::new(MatchConfig { players, seed });
            let stdin = io::stdin();
            text::run(&mut engine, stdin.lock(), io::stdout())?;
        }
    }
    Ok(())
}
