//! Game outcome and the post-move resolver.

use std::fmt;

use crate::game_state::chess_types::{Color, GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_legal_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    Playing,
    WhiteWon,
    BlackWon,
    Stalemate,
}

impl Outcome {
    #[inline]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => Outcome::WhiteWon,
            Color::Black => Outcome::BlackWon,
        }
    }

    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::WhiteWon => Some(Color::White),
            Outcome::BlackWon => Some(Color::Black),
            Outcome::Playing | Outcome::Stalemate => None,
        }
    }

    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Playing)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Playing => write!(f, "Playing"),
            Outcome::WhiteWon => write!(f, "White won"),
            Outcome::BlackWon => write!(f, "Black won"),
            Outcome::Stalemate => write!(f, "Stalemate"),
        }
    }
}

/// Evaluate the position after a completed move.
///
/// 1. A missing king loses (the validator should make this unreachable).
/// 2. No legal move for the side to move: checkmate if in check, otherwise
///    stalemate.
/// 3. Anything else keeps the game going.
pub fn resolve(game_state: &GameState) -> Outcome {
    let board = &game_state.board;
    for color in [Color::White, Color::Black] {
        if board.king(color).is_none() {
            return Outcome::win_for(color.opposite());
        }
    }

    let to_move = game_state.side_to_move;
    if has_legal_move(game_state, to_move) {
        return Outcome::Playing;
    }

    if is_king_in_check(board, to_move) {
        Outcome::win_for(to_move.opposite())
    } else {
        Outcome::Stalemate
    }
}
