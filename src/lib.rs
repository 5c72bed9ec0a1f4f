//! Tic-tac-toe engine with perfect-play search
//!
//! This crate provides:
//! - A mutable 9-cell board with incremental win detection through the
//!   cell just played
//! - Exhaustive minimax search with depth-scaled scores, favoring
//!   faster wins and slower losses
//! - Interchangeable players behind one capability: perfect play,
//!   uniform random, and a console human adapter
//! - A turn loop and a multi-game duel harness with JSON reports

pub mod arena;
pub mod board;
pub mod cli;
pub mod error;
pub mod lines;
pub mod minimax;
pub mod player;

pub use arena::{DuelConfig, DuelReport, GameOutcome, play_game, run_duel};
pub use board::{Board, Cell, Mark};
pub use error::{Error, Result};
pub use minimax::{MinimaxPlayer, Outcome, minimax};
pub use player::{HumanPlayer, Player, RandomPlayer};
