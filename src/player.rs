//! Player abstraction and baseline players
//!
//! A player is a seat at the table with one capability: choose a legal
//! cell given the current board. The turn loop calls
//! [`Player::choose_move`] once per turn without knowing which variant
//! it holds — perfect-play search, uniform random, or a console human.

use std::io::{self, BufRead, Write};

use rand::{SeedableRng, prelude::IndexedRandom, random, rngs::StdRng};

use crate::{
    Result,
    board::{Board, Mark},
};

/// Single-capability contract consumed by the turn loop
pub trait Player: std::fmt::Debug {
    /// The mark this player places
    fn mark(&self) -> Mark;

    /// Choose a legal cell index in [0, 8].
    ///
    /// The board is mutable because the search agent explores it during
    /// lookahead; every implementation must return the board exactly as
    /// it found it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMovesAvailable`](crate::Error::NoMovesAvailable)
    /// when the board has no empty slot, and
    /// [`Error::Io`](crate::Error::Io) when an input adapter fails to read.
    fn choose_move(&mut self, board: &mut Board) -> Result<usize>;

    /// Name used in duel output and narration
    fn name(&self) -> &str;

    /// Seed the player's randomness source, when it has one.
    ///
    /// Duels call this for reproducible series; stateless adapters use
    /// the default no-op.
    fn reseed(&mut self, _seed: u64) {}
}

/// Uniform-random choice among the legal moves
#[derive(Debug)]
pub struct RandomPlayer {
    mark: Mark,
    rng: StdRng,
}

impl RandomPlayer {
    /// Create a new random player
    pub fn new(mark: Mark) -> Self {
        Self::with_seed(mark, random())
    }

    /// Create a new random player with a deterministic seed
    pub fn with_seed(mark: Mark, seed: u64) -> Self {
        Self {
            mark,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn choose_move(&mut self, board: &mut Board) -> Result<usize> {
        board
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(crate::Error::NoMovesAvailable)
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

/// Console adapter: prompts until the input parses to a legal cell.
///
/// Occupied and out-of-range squares never reach the board; both fall
/// out of the legality check here and re-prompt.
#[derive(Debug)]
pub struct HumanPlayer {
    mark: Mark,
}

impl HumanPlayer {
    pub fn new(mark: Mark) -> Self {
        Self { mark }
    }

    /// Read lines from `input` until one parses to a legal move
    fn read_move<R: BufRead>(&self, board: &Board, input: &mut R) -> Result<usize> {
        loop {
            print!("{}'s turn. Input move (0-8): ", self.mark);
            io::stdout().flush().map_err(|source| crate::Error::Io {
                operation: "flush move prompt".to_string(),
                source,
            })?;

            let mut line = String::new();
            let read = input
                .read_line(&mut line)
                .map_err(|source| crate::Error::Io {
                    operation: "read move input".to_string(),
                    source,
                })?;
            if read == 0 {
                return Err(crate::Error::Io {
                    operation: "read move input".to_string(),
                    source: io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"),
                });
            }

            match line.trim().parse::<usize>() {
                Ok(square) if board.legal_moves().contains(&square) => return Ok(square),
                _ => println!("Invalid square. Try again."),
            }
        }
    }
}

impl Player for HumanPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn choose_move(&mut self, board: &mut Board) -> Result<usize> {
        if !board.has_legal_moves() {
            return Err(crate::Error::NoMovesAvailable);
        }
        let mut stdin = io::stdin().lock();
        self.read_move(board, &mut stdin)
    }

    fn name(&self) -> &str {
        "Human"
    }
}
