//! Perft node counting.
//!
//! Walks the legal move tree with apply/undo on a single working state, so
//! a full run exercises the generator, the executor and the undo log
//! together. Leaf counts for positions without promotions match the
//! published perft tables.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::GameState;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{has_legal_move, MoveGenerator};
use crate::move_generation::legal_move_validator::MoveKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> Result<PerftCounts, ChessErrors> {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return Ok(counts);
    }

    let mut working = game_state.clone();
    perft_recurse(generator, &mut working, depth, &mut counts)?;
    Ok(counts)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
    counts: &mut PerftCounts,
) -> Result<(), ChessErrors> {
    for mv in generator.generate_legal_moves(game_state) {
        let record = apply_move(game_state, mv.piece, mv.from, mv.to, mv.kind)?;

        if depth == 1 {
            counts.nodes += 1;
            if record.is_capture() {
                counts.captures += 1;
            }
            match record.kind {
                MoveKind::EnPassant => counts.en_passant += 1,
                MoveKind::Castle(_) => counts.castles += 1,
                MoveKind::Ordinary => {}
            }
            if record.is_promotion() {
                counts.promotions += 1;
            }
            let defender = game_state.side_to_move;
            if is_king_in_check(&game_state.board, defender) {
                counts.checks += 1;
                if !has_legal_move(game_state, defender) {
                    counts.checkmates += 1;
                }
            }
        } else {
            perft_recurse(generator, game_state, depth - 1, counts)?;
        }

        if !undo_move(game_state)? {
            return Err(ChessErrors::CorruptMoveRecord("perft lost its move history".to_owned()));
        }
    }
    Ok(())
}
