//! Canonical chess-rule constants.
//!
//! Ranks and files here use engine coordinates (rank 0 is Black's back
//! rank). The starting layout doubles as the default setup diagram.

use std::time::Duration;

use crate::game_state::chess_types::Color;

/// Standard starting position, rank 0 first (upper case is White).
pub const STARTING_POSITION_DIAGRAM: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// File both kings start on.
pub const KING_HOME_FILE: i8 = 4;

/// Clock budget per side for a timed game.
pub const DEFAULT_TIME_CONTROL: Duration = Duration::from_secs(600);

/// File the result log is appended to when no other path is configured.
pub const DEFAULT_RESULT_LOG_PATH: &str = "game_records.txt";

#[inline]
pub const fn back_rank(color: Color) -> i8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

#[inline]
pub const fn pawn_start_rank(color: Color) -> i8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Rank on which a pawn of `color` is promoted.
#[inline]
pub const fn promotion_rank(color: Color) -> i8 {
    back_rank(color.opposite())
}
