//! Seeded random playouts.
//!
//! Drives a `ChessGame` with uniformly chosen legal moves until the game
//! ends or the ply budget runs out. Used to sweep the reachable state space
//! in tests and as a throughput benchmark.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::game::chess_game::{ChessGame, MoveOutcome, Rejection};
use crate::game::game_outcome::Outcome;
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, Copy)]
pub struct PlayoutConfig {
    pub max_plies: u16,
    pub seed: u64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutResult {
    pub plies: u16,
    pub outcome: Outcome,
}

/// Play random legal moves on `game`. Stops early on a finished game or a
/// full history.
pub fn play_random_game(
    game: &mut ChessGame,
    config: PlayoutConfig,
) -> Result<PlayoutResult, ChessErrors> {
    play_random_game_with(game, config, |_| Ok(()))
}

/// Like `play_random_game`, calling `after_move` once after every applied move.
pub fn play_random_game_with<F>(
    game: &mut ChessGame,
    config: PlayoutConfig,
    mut after_move: F,
) -> Result<PlayoutResult, ChessErrors>
where
    F: FnMut(&ChessGame) -> Result<(), ChessErrors>,
{
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut plies = 0u16;

    while plies < config.max_plies && !game.current_outcome().is_terminal() {
        let legal_moves = generate_legal_moves(game.state());
        let Some(picked) = legal_moves.as_slice().choose(&mut rng) else {
            break;
        };

        match game.submit_move(picked.from, picked.to)? {
            MoveOutcome::Applied(_) => {}
            MoveOutcome::Rejected(Rejection::HistoryFull) => break,
            MoveOutcome::Rejected(reason) => {
                let attempt = format!("{} -> {}: {reason:?}", picked.from, picked.to);
                return Err(ChessErrors::UnexpectedRejection(attempt));
            }
        }
        plies += 1;
        after_move(game)?;
    }

    Ok(PlayoutResult {
        plies,
        outcome: game.current_outcome(),
    })
}
