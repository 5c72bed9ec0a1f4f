//! Command-line interface for interactive games and duels
//!
//! The binary in `src/bin/oxo.rs` is a thin dispatcher; the argument
//! types and command bodies live here.

pub mod output;

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Result;
use clap::Args;

use crate::{
    arena::{self, DuelConfig, GameOutcome, TurnReport},
    board::{Board, Mark},
    minimax::MinimaxPlayer,
    player::{HumanPlayer, Player, RandomPlayer},
};

#[derive(Args, Debug)]
#[command(about = "Play an interactive game against a computer player")]
pub struct PlayArgs {
    /// Mark the human controls (`x` or `o`)
    #[arg(long, default_value = "o")]
    pub human_mark: String,

    /// Computer opponent kind (`minimax` or `random`)
    #[arg(long, short = 'c', default_value = "minimax")]
    pub opponent: String,

    /// Random seed for the computer player
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
#[command(about = "Run a series of games between two computer players")]
pub struct DuelArgs {
    /// Player kind for the X seat (`minimax` or `random`)
    #[arg(long, default_value = "minimax")]
    pub x: String,

    /// Player kind for the O seat (`minimax` or `random`)
    #[arg(long, default_value = "random")]
    pub o: String,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export the report to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Parse an `x`/`o` CLI token
fn parse_mark_token(value: &str, flag: &str) -> Result<Mark> {
    match value.to_lowercase().as_str() {
        "x" => Ok(Mark::X),
        "o" => Ok(Mark::O),
        other => Err(anyhow::anyhow!(
            "invalid value '{other}' for {flag}: expected 'x' or 'o'"
        )),
    }
}

/// Build a computer player from its CLI kind string
fn build_computer(kind: &str, mark: Mark, seed: Option<u64>) -> Result<Box<dyn Player>> {
    let player: Box<dyn Player> = match kind.to_lowercase().as_str() {
        "minimax" => match seed {
            Some(seed) => Box::new(MinimaxPlayer::with_seed(mark, seed)),
            None => Box::new(MinimaxPlayer::new(mark)),
        },
        "random" => match seed {
            Some(seed) => Box::new(RandomPlayer::with_seed(mark, seed)),
            None => Box::new(RandomPlayer::new(mark)),
        },
        other => {
            return Err(crate::Error::UnknownPlayerKind {
                input: other.to_string(),
                expected: "minimax, random".to_string(),
            }
            .into());
        }
    };
    Ok(player)
}

/// Narrates moves and the result to the console
struct Narrator;

impl TurnReport for Narrator {
    fn on_move(&mut self, mark: Mark, square: usize, board: &Board) {
        println!("{mark} makes a move to square {square}");
        println!("{board}");
        println!();
    }

    fn on_outcome(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(mark) => println!("{mark} wins!"),
            GameOutcome::Draw => println!("It's a tie!"),
        }
    }
}

fn ask_yes_no(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}

/// Interactive play against a computer player, with rematch control
pub fn execute_play(args: PlayArgs) -> Result<()> {
    let human_mark = parse_mark_token(&args.human_mark, "--human-mark")?;
    let computer_mark = human_mark.opponent();

    loop {
        // A rematch is a fresh board and fresh players, not a reset
        let mut human = HumanPlayer::new(human_mark);
        let mut computer = build_computer(&args.opponent, computer_mark, args.seed)?;

        println!("{}", Board::reference_grid());
        println!();

        let mut narrator = Narrator;
        let (x, o): (&mut dyn Player, &mut dyn Player) = if human_mark == Mark::X {
            (&mut human, computer.as_mut())
        } else {
            (computer.as_mut(), &mut human)
        };
        arena::play_game(x, o, &mut narrator)?;

        if !ask_yes_no("Play again? (y/n): ")? {
            break;
        }
    }

    Ok(())
}

/// Seat two computer players and run a series of games
pub fn execute_duel(args: DuelArgs) -> Result<()> {
    let mut x = build_computer(&args.x, Mark::X, None)?;
    let mut o = build_computer(&args.o, Mark::O, None)?;

    output::print_section("Duel");
    output::print_kv("X", x.name());
    output::print_kv("O", o.name());
    output::print_kv("Games", &args.games.to_string());
    if let Some(seed) = args.seed {
        output::print_kv("Seed", &seed.to_string());
    }

    let config = DuelConfig {
        games: args.games,
        seed: args.seed,
    };

    let pb = output::create_duel_progress(args.games as u64);
    let report = arena::run_duel(x.as_mut(), o.as_mut(), &config, |_| pb.inc(1))?;
    pb.finish_and_clear();

    output::print_section("Results");
    output::print_kv(
        "X wins",
        &format!("{} ({:.1}%)", report.x_wins, report.x_win_rate * 100.0),
    );
    output::print_kv(
        "O wins",
        &format!("{} ({:.1}%)", report.o_wins, report.o_win_rate * 100.0),
    );
    output::print_kv(
        "Draws",
        &format!("{} ({:.1}%)", report.draws, report.draw_rate * 100.0),
    );

    if let Some(path) = args.export {
        report.save(&path)?;
        println!("\nReport written to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mark_token_accepts_either_case() {
        assert_eq!(parse_mark_token("x", "--human-mark").unwrap(), Mark::X);
        assert_eq!(parse_mark_token("O", "--human-mark").unwrap(), Mark::O);
        assert!(parse_mark_token("z", "--human-mark").is_err());
    }

    #[test]
    fn build_computer_rejects_unknown_kind() {
        let err = build_computer("oracle", Mark::X, None).unwrap_err();
        assert!(err.to_string().contains("unknown player kind"));
    }

    #[test]
    fn build_computer_supports_both_kinds() {
        assert_eq!(build_computer("minimax", Mark::X, Some(1)).unwrap().name(), "Minimax");
        assert_eq!(build_computer("Random", Mark::O, None).unwrap().name(), "Random");
    }
}
