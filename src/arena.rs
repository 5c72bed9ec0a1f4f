//! Turn loop and multi-game duels between players

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    board::{Board, Mark},
    player::Player,
};

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Mark),
    Draw,
}

/// Per-turn narration hook for interactive play
pub trait TurnReport {
    /// Called after each accepted move
    fn on_move(&mut self, mark: Mark, square: usize, board: &Board);

    /// Called once when the game ends
    fn on_outcome(&mut self, outcome: GameOutcome);
}

/// Silent report used by duels and tests
pub struct Silent;

impl TurnReport for Silent {
    fn on_move(&mut self, _mark: Mark, _square: usize, _board: &Board) {}

    fn on_outcome(&mut self, _outcome: GameOutcome) {}
}

/// Play one game to completion, X moving first.
///
/// Each turn asks the on-turn player for a square and applies it. A
/// rejected square (occupied slot) re-asks the same player without
/// advancing the turn; computer players only ever produce legal moves,
/// so that path exists for input adapters. The winner is declared the
/// moment the board reports one; a board with no empty slot left is a
/// draw.
pub fn play_game(
    x: &mut dyn Player,
    o: &mut dyn Player,
    report: &mut dyn TurnReport,
) -> Result<GameOutcome> {
    debug_assert_eq!(x.mark(), Mark::X, "first seat must play X");
    debug_assert_eq!(o.mark(), Mark::O, "second seat must play O");

    let mut board = Board::new();
    let mut turn = Mark::X;

    while board.has_legal_moves() {
        let player: &mut dyn Player = if turn == Mark::X { &mut *x } else { &mut *o };
        let square = player.choose_move(&mut board)?;

        if !board.apply_move(square, turn) {
            continue;
        }
        report.on_move(turn, square, &board);

        if let Some(winner) = board.current_winner() {
            let outcome = GameOutcome::Win(winner);
            report.on_outcome(outcome);
            return Ok(outcome);
        }

        turn = turn.opponent();
    }

    report.on_outcome(GameOutcome::Draw);
    Ok(GameOutcome::Draw)
}

/// Configuration for a series of games between two computer players
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuelConfig {
    /// Number of games to play
    pub games: usize,

    /// Base seed for reproducible series
    pub seed: Option<u64>,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: None,
        }
    }
}

/// Result of a duel, tallied from X's side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuelReport {
    /// Name of the player seated as X
    pub x_name: String,

    /// Name of the player seated as O
    pub o_name: String,

    /// Total games played
    pub total_games: usize,

    /// Games X won
    pub x_wins: usize,

    /// Games O won
    pub o_wins: usize,

    /// Drawn games
    pub draws: usize,

    /// X win rate
    pub x_win_rate: f64,

    /// O win rate
    pub o_win_rate: f64,

    /// Draw rate
    pub draw_rate: f64,
}

impl DuelReport {
    /// Create a new duel report
    pub fn new(
        x_name: &str,
        o_name: &str,
        total_games: usize,
        x_wins: usize,
        o_wins: usize,
        draws: usize,
    ) -> Self {
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            x_name: x_name.to_string(),
            o_name: o_name.to_string(),
            total_games,
            x_wins,
            o_wins,
            draws,
            x_win_rate: rate(x_wins),
            o_win_rate: rate(o_wins),
            draw_rate: rate(draws),
        }
    }

    /// Save report to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load report from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let report = serde_json::from_reader(file)?;
        Ok(report)
    }
}

/// Run a series of games between two players.
///
/// When the config carries a seed, both players are reseeded before the
/// first game (O offset by one so the seats never share a stream) and
/// the whole series is reproducible. `on_game` fires after every
/// finished game with its index; the CLI hangs a progress bar on it.
pub fn run_duel(
    x: &mut dyn Player,
    o: &mut dyn Player,
    config: &DuelConfig,
    mut on_game: impl FnMut(usize),
) -> Result<DuelReport> {
    if let Some(seed) = config.seed {
        x.reseed(seed);
        o.reseed(seed.wrapping_add(1));
    }

    let mut x_wins = 0;
    let mut o_wins = 0;
    let mut draws = 0;

    for game in 0..config.games {
        match play_game(x, o, &mut Silent)? {
            GameOutcome::Win(Mark::X) => x_wins += 1,
            GameOutcome::Win(Mark::O) => o_wins += 1,
            GameOutcome::Draw => draws += 1,
        }
        on_game(game);
    }

    Ok(DuelReport::new(
        x.name(),
        o.name(),
        config.games,
        x_wins,
        o_wins,
        draws,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{minimax::MinimaxPlayer, player::RandomPlayer};

    /// Scripted player that replays a fixed move sequence, legal or not
    #[derive(Debug)]
    struct Scripted {
        mark: Mark,
        moves: Vec<usize>,
        next: usize,
    }

    impl Scripted {
        fn new(mark: Mark, moves: Vec<usize>) -> Self {
            Self {
                mark,
                moves,
                next: 0,
            }
        }
    }

    impl Player for Scripted {
        fn mark(&self) -> Mark {
            self.mark
        }

        fn choose_move(&mut self, _board: &mut Board) -> Result<usize> {
            let square = self
                .moves
                .get(self.next)
                .copied()
                .ok_or(crate::Error::NoMovesAvailable)?;
            self.next += 1;
            Ok(square)
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    #[test]
    fn x_wins_a_scripted_game() {
        let mut x = Scripted::new(Mark::X, vec![0, 1, 2]);
        let mut o = Scripted::new(Mark::O, vec![3, 4]);

        let outcome = play_game(&mut x, &mut o, &mut Silent).unwrap();
        assert_eq!(outcome, GameOutcome::Win(Mark::X));
    }

    #[test]
    fn scripted_draw() {
        // X: 0 2 3 5 7, O: 1 4 6 8 - no line for either side
        let mut x = Scripted::new(Mark::X, vec![0, 2, 3, 5, 7]);
        let mut o = Scripted::new(Mark::O, vec![1, 4, 6, 8]);

        let outcome = play_game(&mut x, &mut o, &mut Silent).unwrap();
        assert_eq!(outcome, GameOutcome::Draw);
    }

    #[test]
    fn occupied_square_reasks_the_same_player() {
        // O tries X's square first; the retry keeps the turn order intact
        let mut x = Scripted::new(Mark::X, vec![0, 1, 2]);
        let mut o = Scripted::new(Mark::O, vec![0, 3, 4]);

        let outcome = play_game(&mut x, &mut o, &mut Silent).unwrap();
        assert_eq!(outcome, GameOutcome::Win(Mark::X));
    }

    #[test]
    fn duel_tallies_sum_to_total() {
        let mut x = MinimaxPlayer::with_seed(Mark::X, 3);
        let mut o = RandomPlayer::with_seed(Mark::O, 4);
        let config = DuelConfig {
            games: 20,
            seed: Some(11),
        };

        let report = run_duel(&mut x, &mut o, &config, |_| {}).unwrap();
        assert_eq!(report.total_games, 20);
        assert_eq!(report.x_wins + report.o_wins + report.draws, 20);
    }

    #[test]
    fn report_rates_are_fractions_of_total() {
        let report = DuelReport::new("Minimax", "Random", 10, 6, 1, 3);
        assert_eq!(report.x_win_rate, 0.6);
        assert_eq!(report.o_win_rate, 0.1);
        assert_eq!(report.draw_rate, 0.3);
    }

    #[test]
    fn empty_report_has_zero_rates() {
        let report = DuelReport::new("Minimax", "Random", 0, 0, 0, 0);
        assert_eq!(report.x_win_rate, 0.0);
        assert_eq!(report.draw_rate, 0.0);
    }
}
