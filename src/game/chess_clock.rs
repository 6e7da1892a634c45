//! Per-side countdown clock.
//!
//! The clock only tracks remaining time. Deciding what a flag fall means
//! for the game is left to `ChessGame`.

use std::time::Duration;

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessClock {
    remaining: [Duration; 2],
}

impl ChessClock {
    pub fn new(per_side: Duration) -> Self {
        Self {
            remaining: [per_side; 2],
        }
    }

    #[inline]
    pub fn remaining(&self, color: Color) -> Duration {
        self.remaining[color.index()]
    }

    /// Charge `elapsed` to `color`, stopping at zero.
    pub fn charge(&mut self, color: Color, elapsed: Duration) {
        let slot = &mut self.remaining[color.index()];
        *slot = slot.saturating_sub(elapsed);
    }

    /// Whether `color` has no time left.
    #[inline]
    pub fn is_flagged(&self, color: Color) -> bool {
        self.remaining(color).is_zero()
    }
}
