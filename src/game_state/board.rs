//! Occupancy grid plus piece arena.
//!
//! The grid stores `PieceId` handles only; the piece values (kind, color,
//! moved flag, square) live in the arena. A piece that leaves the board has
//! its arena slot emptied and its value handed to the caller, which keeps it
//! (inside a move record) until an undo puts it back into the same slot.
//!
//! Only the move executor mutates a live `Board`. The validator works on
//! clones.

use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Color, Piece, PieceId, PieceKind, Square};
use crate::utils::render_game_state::render_board;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [Option<PieceId>; 64],
    pieces: Vec<Option<Piece>>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            grid: [None; 64],
            pieces: Vec::with_capacity(32),
        }
    }
}

impl Board {
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Handle of the piece on `square`, if any.
    #[inline]
    pub fn occupant(&self, square: Square) -> Option<PieceId> {
        self.grid[square.index()]
    }

    /// Piece on `square`, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.occupant(square).and_then(|id| self.piece(id))
    }

    /// Live piece behind a handle. Off-board pieces yield `None`.
    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.grid[square.index()].is_none()
    }

    /// All pieces currently on the board, in arena order.
    pub fn live_pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|piece| (PieceId(i), piece)))
    }

    pub fn live_piece_count(&self) -> usize {
        self.pieces.iter().filter(|slot| slot.is_some()).count()
    }

    /// The king of `color`, if it is on the board.
    pub fn king(&self, color: Color) -> Option<(PieceId, &Piece)> {
        let wanted = (PieceKind::King, color);
        self.live_pieces()
            .find(|(_, piece)| (piece.kind, piece.color) == wanted)
    }

    /// Register a new piece during setup and put it on its square.
    pub fn add_piece(&mut self, piece: Piece) -> Result<PieceId, ChessErrors> {
        if !self.is_empty(piece.square) {
            return Err(ChessErrors::SquareOccupied(piece.square));
        }
        let id = PieceId(self.pieces.len());
        self.pieces.push(Some(piece));
        self.grid[piece.square.index()] = Some(id);
        Ok(id)
    }

    /// Put an off-board piece back into its (empty) arena slot, on `piece.square`.
    pub fn place_piece(&mut self, id: PieceId, piece: Piece) -> Result<(), ChessErrors> {
        let slot = self
            .pieces
            .get_mut(id.index())
            .ok_or(ChessErrors::PieceNotOnBoard(id))?;
        if slot.is_some() {
            return Err(ChessErrors::PieceSlotInUse(id));
        }
        if self.grid[piece.square.index()].is_some() {
            return Err(ChessErrors::SquareOccupied(piece.square));
        }
        *slot = Some(piece);
        self.grid[piece.square.index()] = Some(id);
        Ok(())
    }

    /// Take a piece off the board. The returned value still carries the
    /// square it was removed from.
    pub fn remove_piece(&mut self, id: PieceId) -> Result<Piece, ChessErrors> {
        let piece = self
            .pieces
            .get_mut(id.index())
            .and_then(Option::take)
            .ok_or(ChessErrors::PieceNotOnBoard(id))?;
        self.grid[piece.square.index()] = None;
        Ok(piece)
    }

    /// Relocate a live piece to an empty square.
    pub fn move_piece_in_place(&mut self, id: PieceId, to: Square) -> Result<(), ChessErrors> {
        if self.grid[to.index()].is_some() {
            return Err(ChessErrors::SquareOccupied(to));
        }
        let piece = self
            .pieces
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(ChessErrors::PieceNotOnBoard(id))?;
        self.grid[piece.square.index()] = None;
        piece.square = to;
        self.grid[to.index()] = Some(id);
        Ok(())
    }

    pub fn set_has_moved(&mut self, id: PieceId, has_moved: bool) -> Result<(), ChessErrors> {
        let piece = self
            .pieces
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(ChessErrors::PieceNotOnBoard(id))?;
        piece.has_moved = has_moved;
        Ok(())
    }

    /// Audit grid against arena: every live piece sits on the square that
    /// points back to it, and every occupied square points at a live piece.
    pub fn is_consistent(&self) -> bool {
        let pieces_agree = self
            .live_pieces()
            .all(|(id, piece)| self.occupant(piece.square) == Some(id));
        pieces_agree && Square::all().all(|square| self.square_agrees(square))
    }

    fn square_agrees(&self, square: Square) -> bool {
        match self.occupant(square) {
            Some(id) => self.piece(id).is_some_and(|piece| piece.square == square),
            None => true,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(file: i8, rank: i8) -> Square {
        Square::new(file, rank).expect("test square should be on the board")
    }

    #[test]
    fn add_remove_pieces() -> Result<(), ChessErrors> {
        let mut dut = Board::new_empty();
        let a = dut.add_piece(Piece::new(PieceKind::Pawn, Color::White, sq(0, 6)))?;
        let b = dut.add_piece(Piece::new(PieceKind::Pawn, Color::White, sq(1, 6)))?;
        assert_eq!(dut.live_piece_count(), 2);

        let removed = dut.remove_piece(a)?;
        assert_eq!(removed.square, sq(0, 6));
        assert!(dut.is_empty(sq(0, 6)));
        assert_eq!(dut.occupant(sq(1, 6)), Some(b));
        assert!(matches!(
            dut.remove_piece(a),
            Err(ChessErrors::PieceNotOnBoard(_))
        ));
        assert!(dut.is_consistent());
        Ok(())
    }

    #[test]
    fn place_piece_refuses_occupied_square_and_live_slot() -> Result<(), ChessErrors> {
        let mut dut = Board::new_empty();
        let rook = dut.add_piece(Piece::new(PieceKind::Rook, Color::Black, sq(0, 0)))?;
        let knight = dut.add_piece(Piece::new(PieceKind::Knight, Color::Black, sq(1, 0)))?;

        let mut taken = dut.remove_piece(rook)?;
        taken.square = sq(1, 0);
        assert!(matches!(
            dut.place_piece(rook, taken),
            Err(ChessErrors::SquareOccupied(_))
        ));

        let knight_value = *dut.piece(knight).expect("knight is live");
        assert!(matches!(
            dut.place_piece(knight, knight_value),
            Err(ChessErrors::PieceSlotInUse(_))
        ));

        taken.square = sq(0, 0);
        dut.place_piece(rook, taken)?;
        assert_eq!(dut.occupant(sq(0, 0)), Some(rook));
        assert!(dut.is_consistent());
        Ok(())
    }

    #[test]
    fn move_in_place_keeps_grid_and_arena_in_sync() -> Result<(), ChessErrors> {
        let mut dut = Board::new_empty();
        let king = dut.add_piece(Piece::new(PieceKind::King, Color::White, sq(4, 7)))?;
        dut.move_piece_in_place(king, sq(4, 6))?;

        assert!(dut.is_empty(sq(4, 7)));
        let e2 = dut.piece_at(sq(4, 6)).map(|p| p.kind);
        assert_eq!(e2, Some(PieceKind::King));
        assert_eq!(dut.king(Color::White).map(|(id, _)| id), Some(king));
        assert!(dut.king(Color::Black).is_none());
        assert!(dut.is_consistent());
        Ok(())
    }
}
