//! Game facade consumed by a presentation layer.
//!
//! `ChessGame` owns the position, the current outcome, the optional clock
//! and the result recorder. Move attempts come in as square pairs and are
//! either rejected without touching anything or fully applied and resolved.
//! A finished game is written to the recorder once, at the moment the
//! outcome leaves `Playing`.

use std::time::Duration;

use tracing::{info, trace, warn};

use crate::chess_errors::ChessErrors;
use crate::game::chess_clock::ChessClock;
use crate::game::game_config::GameConfig;
use crate::game::game_outcome::{resolve, Outcome};
use crate::game::result_log::{FileResultLog, GameResult, ResultRecorder};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_destinations;
use crate::move_generation::legal_move_validator::{validate_move, MoveKind};

/// Why a move attempt was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    OffBoard,
    EmptySource,
    WrongTurn,
    GameOver,
    HistoryFull,
    IllegalMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Rejected(Rejection),
    /// The move was played; carries the outcome of the resulting position.
    Applied(Outcome),
}

pub struct ChessGame {
    state: GameState,
    outcome: Outcome,
    config: GameConfig,
    clock: Option<ChessClock>,
    recorder: Box<dyn ResultRecorder>,
    result_recorded: bool,
}

impl Default for ChessGame {
    /// Standard game, untimed, logging to the default result file.
    fn default() -> Self {
        Self::new(GameConfig::default(), FileResultLog::default())
    }
}

impl ChessGame {
    pub fn new(config: GameConfig, recorder: impl ResultRecorder + 'static) -> Self {
        Self::from_state(GameState::new_game(), config, recorder)
    }

    /// Start from an arbitrary position. The outcome is resolved immediately,
    /// but a position that is already finished is not written to the log.
    pub fn from_state(
        state: GameState,
        config: GameConfig,
        recorder: impl ResultRecorder + 'static,
    ) -> Self {
        let outcome = resolve(&state);
        let clock = config.time_control.map(ChessClock::new);
        Self {
            state,
            outcome,
            config,
            clock,
            recorder: Box::new(recorder),
            result_recorded: outcome.is_terminal(),
        }
    }

    /// Attempt to move the piece on `from` to `to`.
    ///
    /// Illegal attempts come back as `Ok(MoveOutcome::Rejected(..))` with the
    /// game untouched. `Err` is reserved for a corrupted board.
    pub fn submit_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, ChessErrors> {
        let (id, kind) = match self.check_attempt(from, to) {
            Ok(accepted) => accepted,
            Err(reason) => {
                trace!(%from, %to, ?reason, "move rejected");
                return Ok(MoveOutcome::Rejected(reason));
            }
        };

        apply_move(&mut self.state, id, from, to, kind)?;
        let outcome = resolve(&self.state);
        self.transition_to(outcome);
        Ok(MoveOutcome::Applied(outcome))
    }

    /// Raw `(file, rank)` entry point for collaborators that work in tile
    /// indices. Off-board pairs are rejected.
    pub fn submit_coordinates(
        &mut self,
        from: (i8, i8),
        to: (i8, i8),
    ) -> Result<MoveOutcome, ChessErrors> {
        match (Square::new(from.0, from.1), Square::new(to.0, to.1)) {
            (Ok(from), Ok(to)) => self.submit_move(from, to),
            _ => {
                trace!(?from, ?to, "move rejected: off board");
                Ok(MoveOutcome::Rejected(Rejection::OffBoard))
            }
        }
    }

    /// Take back the last move. Returns false when there is nothing to undo.
    /// A finished game goes back to `Playing`.
    pub fn undo_last_move(&mut self) -> Result<bool, ChessErrors> {
        if !undo_move(&mut self.state)? {
            return Ok(false);
        }
        if self.outcome.is_terminal() {
            info!(previous = %self.outcome, "game reopened by undo");
        }
        self.outcome = Outcome::Playing;
        self.result_recorded = false;
        Ok(true)
    }

    /// Charge `elapsed` to the side to move. Running out of time while the
    /// game is on loses it. Untimed or finished games ignore the call.
    pub fn advance_clock(&mut self, elapsed: Duration) -> Outcome {
        if self.outcome.is_terminal() {
            return self.outcome;
        }
        let side = self.state.side_to_move;
        let Some(clock) = self.clock.as_mut() else {
            return self.outcome;
        };
        clock.charge(side, elapsed);
        if clock.is_flagged(side) {
            info!(loser = %side, "time forfeit");
            self.transition_to(Outcome::win_for(side.opposite()));
        }
        self.outcome
    }

    #[inline]
    pub fn current_outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.state.side_to_move
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<PieceView> {
        self.state.board.piece_at(square).map(Piece::view)
    }

    pub fn is_in_check(&self) -> bool {
        is_king_in_check(&self.state.board, self.state.side_to_move)
    }

    /// Where the piece on `from` may go right now. Empty for an empty
    /// square, a piece of the side not to move, or a finished game.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        let turn = self.state.side_to_move;
        let movable = self.piece_at(from).is_some_and(|view| view.color == turn);
        if !movable || self.outcome.is_terminal() {
            return Vec::new();
        }
        legal_destinations(&self.state, from)
    }

    /// Remaining clock time, or `None` for an untimed game.
    pub fn remaining_time(&self, color: Color) -> Option<Duration> {
        self.clock.map(|clock| clock.remaining(color))
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.state.history
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn check_attempt(&self, from: Square, to: Square) -> Result<(PieceId, MoveKind), Rejection> {
        if self.outcome.is_terminal() {
            return Err(Rejection::GameOver);
        }
        let Some(id) = self.state.board.occupant(from) else {
            return Err(Rejection::EmptySource);
        };
        let piece = self.state.board.piece(id).ok_or(Rejection::EmptySource)?;
        if piece.color != self.state.side_to_move {
            return Err(Rejection::WrongTurn);
        }
        let history_full = match self.config.max_history {
            Some(cap) => self.state.history.len() >= cap,
            None => false,
        };
        if history_full {
            return Err(Rejection::HistoryFull);
        }
        validate_move(&self.state, id, from, to)
            .kind()
            .map(|kind| (id, kind))
            .ok_or(Rejection::IllegalMove)
    }

    fn transition_to(&mut self, outcome: Outcome) {
        let was_terminal = self.outcome.is_terminal();
        self.outcome = outcome;
        if !outcome.is_terminal() || was_terminal || self.result_recorded {
            return;
        }

        info!(%outcome, ply = self.state.ply, "game over");
        let config = &self.config;
        let entry = GameResult::now(&config.white_player, &config.black_player, outcome);
        if let Err(err) = self.recorder.record(&entry) {
            warn!(error = %err, "failed to record game result");
        }
        self.result_recorded = true;
    }
}
