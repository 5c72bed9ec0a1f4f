//! oxo CLI - play tic-tac-toe against a perfect-play agent, or pit
//! computer players against each other

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Tic-tac-toe with an unbeatable minimax agent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against a computer player
    Play(oxo::cli::PlayArgs),

    /// Run a series of games between two computer players
    Duel(oxo::cli::DuelArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => oxo::cli::execute_play(args),
        Commands::Duel(args) => oxo::cli::execute_duel(args),
    }
}
