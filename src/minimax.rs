//! Exhaustive minimax search with depth-scaled scoring

use rand::{SeedableRng, prelude::IndexedRandom, random, rngs::StdRng};

use crate::{
    Result,
    board::{Board, Mark},
    player::Player,
};

/// Result of one level of search: the move tried at this level and the
/// score it earns for the maximizing seat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub position: Option<usize>,
    pub score: i32,
}

/// Exhaustive game-tree search from `board` with `to_move` to play.
///
/// Scores are signed toward `max_mark` and scaled by `empty_count + 1`
/// at the terminal, so a quicker forced win strictly outranks a slower
/// one and a quicker loss is strictly worse than a deferred one. The
/// whole remaining tree is explored — no pruning, no transposition
/// cache; optimal play is the correctness baseline here, not a
/// performance target.
///
/// The board is explored by applying and undoing moves in place; on
/// return it is exactly as it was passed in.
pub fn minimax(board: &mut Board, to_move: Mark, max_mark: Mark) -> Outcome {
    let opponent = to_move.opponent();

    // The winning move was applied before recursing, so a terminal win
    // always belongs to the player who just moved.
    if board.current_winner() == Some(opponent) {
        let magnitude = board.empty_count() as i32 + 1;
        return Outcome {
            position: None,
            score: if opponent == max_mark {
                magnitude
            } else {
                -magnitude
            },
        };
    }
    if !board.has_legal_moves() {
        return Outcome {
            position: None,
            score: 0,
        };
    }

    let mut best = Outcome {
        position: None,
        score: if to_move == max_mark {
            i32::MIN
        } else {
            i32::MAX
        },
    };

    for candidate in board.legal_moves() {
        let applied = board.apply_move(candidate, to_move);
        debug_assert!(applied, "legal move {candidate} was rejected");

        let mut child = minimax(board, opponent, max_mark);
        board.undo_move(candidate);
        child.position = Some(candidate);

        // Strict comparison: the earliest move at the best score is kept
        if to_move == max_mark {
            if child.score > best.score {
                best = child;
            }
        } else if child.score < best.score {
            best = child;
        }
    }

    best
}

/// Perfect-play agent driven by [`minimax`].
///
/// The only randomness is the opening: on an empty board every first
/// move is equivalent under optimal play, so the agent picks one
/// uniformly instead of paying for the full nine-ply search. This is a
/// designed shortcut preserved from the engine's original behavior, not
/// an approximation of strength.
#[derive(Debug)]
pub struct MinimaxPlayer {
    mark: Mark,
    rng: StdRng,
}

impl MinimaxPlayer {
    /// Create a new perfect-play agent
    pub fn new(mark: Mark) -> Self {
        Self::with_seed(mark, random())
    }

    /// Create a new perfect-play agent with a deterministic opening seed
    pub fn with_seed(mark: Mark, seed: u64) -> Self {
        Self {
            mark,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for MinimaxPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn choose_move(&mut self, board: &mut Board) -> Result<usize> {
        let moves = board.legal_moves();
        if moves.len() == 9 {
            return moves
                .choose(&mut self.rng)
                .copied()
                .ok_or(crate::Error::NoMovesAvailable);
        }

        minimax(board, self.mark, self.mark)
            .position
            .ok_or(crate::Error::NoMovesAvailable)
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn won_position_scores_empty_count_plus_one() {
        // X just completed the top row with four slots still empty
        let mut board: Board = "XXXOO....".parse().unwrap();

        let for_winner = minimax(&mut board, Mark::O, Mark::X);
        assert_eq!(for_winner.score, 5);
        assert_eq!(for_winner.position, None);

        let for_loser = minimax(&mut board, Mark::O, Mark::O);
        assert_eq!(for_loser.score, -5);
    }

    #[test]
    fn exhausted_board_scores_zero() {
        let mut board: Board = "XOXXOOOXX".parse().unwrap();
        let outcome = minimax(&mut board, Mark::O, Mark::O);
        assert_eq!(outcome, Outcome { position: None, score: 0 });
    }

    #[test]
    fn takes_immediate_win_over_block() {
        // X wins at 5 right now; blocking O's threat at 2 (the earlier
        // index) only defers, and the depth-scaled score rules it out
        let mut board: Board = "OO.XX....".parse().unwrap();
        let outcome = minimax(&mut board, Mark::X, Mark::X);
        assert_eq!(outcome.position, Some(5));
        assert_eq!(outcome.score, 5);
    }

    #[test]
    fn search_leaves_board_untouched() {
        let mut board: Board = "X.XOO...X".parse().unwrap();
        let before = board.clone();

        minimax(&mut board, Mark::O, Mark::O);
        assert_eq!(board, before);
    }

    #[test]
    fn ties_keep_the_earliest_move() {
        // Center opening: every corner reply draws and every edge reply
        // loses. The equal draw scores tie-break to the lowest index
        // because only a strictly better score replaces the incumbent.
        let mut board: Board = "....X....".parse().unwrap();
        let outcome = minimax(&mut board, Mark::O, Mark::O);
        assert_eq!(outcome.position, Some(0));
        assert_eq!(outcome.score, 0);
    }
}
