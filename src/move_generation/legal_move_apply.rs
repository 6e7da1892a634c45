//! Move execution and undo.
//!
//! `apply_move` mutates the game state for a move that already passed
//! validation and pushes a `MoveRecord` holding everything needed to reverse
//! it. `undo_move` pops the newest record and replays it backwards. Captured
//! pieces and promoted pawns are owned by their record while off the board.

use tracing::debug;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::promotion_rank;
use crate::game_state::chess_types::*;
use crate::game_state::move_record::{CapturedPiece, RookRelocation};
use crate::move_generation::legal_move_validator::{
    capture_square, castling_rook_destination, MoveKind,
};
use crate::moves::king_moves::castling_rook_square;

/// Apply a validated move and return (a copy of) the record pushed to the history.
pub fn apply_move(
    game_state: &mut GameState,
    id: PieceId,
    from: Square,
    to: Square,
    kind: MoveKind,
) -> Result<MoveRecord, ChessErrors> {
    let mover = *game_state
        .board
        .piece(id)
        .ok_or(ChessErrors::PieceNotOnBoard(id))?;
    if mover.square != from {
        return Err(ChessErrors::CorruptMoveRecord(format!(
            "piece {id} stands on {}, not {from}",
            mover.square
        )));
    }

    let captured = match game_state.board.occupant(capture_square(from, to, kind)?) {
        Some(victim) => {
            let piece = game_state.board.remove_piece(victim)?;
            Some(CapturedPiece { id: victim, piece })
        }
        None => None,
    };

    // Castling rook move.
    let rook = match kind {
        MoveKind::Castle(side) => Some(relocate_castling_rook(game_state, from, to, side)?),
        _ => None,
    };

    game_state.board.move_piece_in_place(id, to)?;
    game_state.board.set_has_moved(id, true)?;

    // Promotion keeps the arena slot; the pawn itself goes into the record.
    let promotes = mover.kind == PieceKind::Pawn && to.rank() == promotion_rank(mover.color);
    let promoted_pawn = if promotes {
        let pawn = game_state.board.remove_piece(id)?;
        let mut queen = Piece::new(PieceKind::Queen, mover.color, to);
        queen.has_moved = true;
        game_state.board.place_piece(id, queen)?;
        Some(pawn)
    } else {
        None
    };

    let prev_double_step = game_state.last_double_step;
    let double_step = mover.kind == PieceKind::Pawn && (to.rank() - from.rank()).abs() == 2;
    game_state.last_double_step = if double_step {
        Some(DoubleStep {
            pawn: id,
            turn: mover.color,
        })
    } else {
        None
    };

    game_state.side_to_move = game_state.side_to_move.opposite();
    game_state.ply = game_state.ply.saturating_add(1);

    let record = MoveRecord {
        piece: id,
        from,
        to,
        kind,
        piece_had_moved: mover.has_moved,
        captured,
        rook,
        promoted_pawn,
        prev_double_step,
    };
    debug!(
        piece = %id,
        %from,
        %to,
        ?kind,
        capture = record.is_capture(),
        promotion = record.is_promotion(),
        "applied move"
    );
    game_state.history.push(record.clone());
    Ok(record)
}

/// Revert the newest move. Returns `Ok(false)` when there is nothing to undo.
pub fn undo_move(game_state: &mut GameState) -> Result<bool, ChessErrors> {
    let Some(record) = game_state.history.pop() else {
        return Ok(false);
    };

    match record.promoted_pawn {
        Some(mut pawn) => {
            game_state.board.remove_piece(record.piece)?;
            pawn.square = record.from;
            pawn.has_moved = record.piece_had_moved;
            game_state.board.place_piece(record.piece, pawn)?;
        }
        None => {
            game_state
                .board
                .move_piece_in_place(record.piece, record.from)?;
            game_state
                .board
                .set_has_moved(record.piece, record.piece_had_moved)?;
        }
    }

    // The captured value still carries the square it was taken on, which
    // covers the en-passant placement.
    if let Some(captured) = record.captured {
        game_state.board.place_piece(captured.id, captured.piece)?;
    }

    if let Some(rook) = record.rook {
        game_state.board.move_piece_in_place(rook.id, rook.from)?;
        game_state.board.set_has_moved(rook.id, rook.had_moved)?;
    }

    game_state.last_double_step = record.prev_double_step;
    game_state.side_to_move = game_state.side_to_move.opposite();
    game_state.ply = game_state.ply.saturating_sub(1);

    debug!(piece = %record.piece, from = %record.to, to = %record.from, "undid move");
    Ok(true)
}

fn relocate_castling_rook(
    game_state: &mut GameState,
    king_from: Square,
    king_to: Square,
    side: CastleSide,
) -> Result<RookRelocation, ChessErrors> {
    let corrupt = || ChessErrors::CorruptMoveRecord(format!("castling {king_from} -> {king_to}"));
    let rook_from = castling_rook_square(king_from, side).ok_or_else(corrupt)?;
    let Some(rook_to) = castling_rook_destination(king_to, side) else {
        return Err(corrupt());
    };
    let rook_id = game_state.board.occupant(rook_from).ok_or_else(corrupt)?;
    let had_moved = game_state
        .board
        .piece(rook_id)
        .map(|rook| rook.has_moved)
        .ok_or(ChessErrors::PieceNotOnBoard(rook_id))?;

    game_state.board.move_piece_in_place(rook_id, rook_to)?;
    game_state.board.set_has_moved(rook_id, true)?;

    Ok(RookRelocation {
        id: rook_id,
        from: rook_from,
        to: rook_to,
        had_moved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_validator::{validate_move, MoveValidation};

    fn sq(file: i8, rank: i8) -> Square {
        Square::new(file, rank).expect("test square should be on the board")
    }

    /// Validate then apply, the way the game facade does.
    fn play(game: &mut GameState, from: Square, to: Square) -> Result<MoveRecord, ChessErrors> {
        let id = game.board.occupant(from).ok_or(ChessErrors::FailedTest)?;
        let kind = validate_move(game, id, from, to)
            .kind()
            .ok_or(ChessErrors::FailedTest)?;
        apply_move(game, id, from, to, kind)
    }

    fn piece_on(game: &GameState, square: Square) -> Result<Piece, ChessErrors> {
        game.board
            .piece_at(square)
            .copied()
            .ok_or(ChessErrors::FailedTest)
    }

    fn assert_round_trip(
        game: &mut GameState,
        from: Square,
        to: Square,
    ) -> Result<(), ChessErrors> {
        let before = game.clone();
        play(game, from, to)?;
        assert!(game.board.is_consistent());
        assert!(undo_move(game)?);
        assert_eq!(*game, before);
        Ok(())
    }

    #[test]
    fn ordinary_capture_and_undo() -> Result<(), ChessErrors> {
        let mut game = GameState::from_diagram("4k3/8/8/3p4/4P3/8/8/4K3", Color::White)?;
        let before = game.clone();

        let record = play(&mut game, sq(4, 4), sq(3, 3))?;
        assert!(record.is_capture());
        assert_eq!(game.board.live_piece_count(), 3);
        assert_eq!(game.side_to_move, Color::Black);
        assert_eq!(game.history.len(), 1);

        assert!(undo_move(&mut game)?);
        assert_eq!(game, before);
        assert!(!undo_move(&mut game)?);
        Ok(())
    }

    #[test]
    fn double_step_opens_en_passant_for_one_ply() -> Result<(), ChessErrors> {
        let mut game = GameState::from_diagram("4k3/3p4/8/4P3/8/8/8/4K3", Color::Black)?;
        play(&mut game, sq(3, 1), sq(3, 3))?;
        let Some(pawn) = game.board.occupant(sq(3, 3)) else {
            return Err(ChessErrors::FailedTest);
        };
        assert_eq!(
            game.last_double_step,
            Some(DoubleStep {
                pawn,
                turn: Color::Black
            })
        );

        let record = play(&mut game, sq(4, 3), sq(3, 2))?;
        assert_eq!(record.kind, MoveKind::EnPassant);
        assert!(game.board.is_empty(sq(3, 3)));
        assert_eq!(game.last_double_step, None);

        assert!(undo_move(&mut game)?);
        assert_eq!(game.board.occupant(sq(3, 3)), Some(pawn));
        assert_eq!(game.board.occupant(sq(3, 2)), None);
        assert!(game.last_double_step.is_some());
        assert_round_trip(&mut game, sq(4, 3), sq(3, 2))
    }

    #[test]
    fn castling_moves_both_pieces() -> Result<(), ChessErrors> {
        let mut game = GameState::from_diagram("4k3/8/8/8/8/8/8/R3K2R", Color::White)?;
        let record = play(&mut game, sq(4, 7), sq(6, 7))?;

        assert_eq!(record.kind, MoveKind::Castle(CastleSide::Kingside));
        let king = piece_on(&game, sq(6, 7))?;
        let rook = piece_on(&game, sq(5, 7))?;
        assert_eq!(king.kind, PieceKind::King);
        assert_eq!(rook.kind, PieceKind::Rook);
        assert!(king.has_moved && rook.has_moved);
        assert!(game.board.is_empty(sq(7, 7)));

        assert!(undo_move(&mut game)?);
        let rook = piece_on(&game, sq(7, 7))?;
        assert!(!rook.has_moved);
        assert_round_trip(&mut game, sq(4, 7), sq(2, 7))
    }

    #[test]
    fn promotion_replaces_pawn_in_place_and_undo_restores_it() -> Result<(), ChessErrors> {
        let mut game = GameState::from_diagram("1r2k3/P7/8/8/8/8/8/4K3", Color::White)?;
        let Some(pawn_id) = game.board.occupant(sq(0, 1)) else {
            return Err(ChessErrors::FailedTest);
        };
        let live_before = game.board.live_piece_count();

        let record = play(&mut game, sq(0, 1), sq(1, 0))?;
        assert!(record.is_promotion() && record.is_capture());
        let queen = piece_on(&game, sq(1, 0))?;
        assert_eq!((queen.kind, queen.color), (PieceKind::Queen, Color::White));
        assert_eq!(game.board.occupant(sq(1, 0)), Some(pawn_id));
        assert_eq!(game.board.live_piece_count(), live_before - 1);

        undo_move(&mut game)?;
        let pawn = *game.board.piece(pawn_id).ok_or(ChessErrors::FailedTest)?;
        assert_eq!((pawn.kind, pawn.square), (PieceKind::Pawn, sq(0, 1)));
        assert_round_trip(&mut game, sq(0, 1), sq(0, 0))
    }

    #[test]
    fn every_opening_move_round_trips() -> Result<(), ChessErrors> {
        let mut game = GameState::new_game();
        let candidates: Vec<(PieceId, Square)> = game
            .board
            .live_pieces()
            .filter(|(_, p)| p.color == Color::White)
            .map(|(id, p)| (id, p.square))
            .collect();

        let mut tried = 0;
        for (id, from) in candidates {
            for to in Square::all() {
                if validate_move(&game, id, from, to) != MoveValidation::Illegal {
                    assert_round_trip(&mut game, from, to)?;
                    tried += 1;
                }
            }
        }
        assert_eq!(tried, 20);
        Ok(())
    }
}
