//! Per-game settings.

use std::time::Duration;

use crate::game_state::chess_rules::DEFAULT_TIME_CONTROL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub white_player: String,
    pub black_player: String,
    /// Per-side clock budget. `None` plays without a clock.
    pub time_control: Option<Duration>,
    /// Cap on stored move records. `None` keeps the history unbounded.
    pub max_history: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            white_player: "White".to_owned(),
            black_player: "Black".to_owned(),
            time_control: None,
            max_history: None,
        }
    }
}

impl GameConfig {
    pub fn with_players(mut self, white: impl Into<String>, black: impl Into<String>) -> Self {
        self.white_player = white.into();
        self.black_player = black.into();
        self
    }

    pub fn with_time_control(mut self, per_side: Duration) -> Self {
        self.time_control = Some(per_side);
        self
    }

    /// Timed game with the standard per-side budget.
    pub fn timed(self) -> Self {
        self.with_time_control(DEFAULT_TIME_CONTROL)
    }

    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = Some(max_history);
        self
    }
}
