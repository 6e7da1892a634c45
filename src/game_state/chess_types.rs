//! Core value types shared by every part of the rules engine.
//!
//! Squares use engine coordinates: `file` runs left to right `0..8` and
//! `rank` runs top to bottom `0..8`, with rank 0 being Black's back rank and
//! rank 7 White's back rank.

use std::fmt;

use crate::chess_errors::ChessErrors;

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::{DoubleStep, GameState};
pub use crate::game_state::move_record::MoveRecord;

/// Side to move / owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a single pawn step for this color.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Piece kind (color is stored separately on the piece).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

/// A board square. Off-board squares cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Build a square, rejecting coordinates outside `0..8`.
    pub fn new(file: i8, rank: i8) -> Result<Self, ChessErrors> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Ok(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            Err(ChessErrors::InvalidFileOrRank(file, rank))
        }
    }

    /// Square at a grid index (`rank * 8 + file`). Indices past 63 yield `None`.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        if index < 64 {
            Some(Square {
                file: (index % 8) as u8,
                rank: (index / 8) as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn file(self) -> i8 {
        self.file as i8
    }

    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank as i8
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// Step by `(d_file, d_rank)`, returning `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        Square::new(self.file() + d_file, self.rank() + d_rank).ok()
    }

    /// All 64 squares in grid order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file, self.rank)
    }
}

/// Stable handle of a piece inside the board's piece arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) usize);

impl PieceId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece together with the square it stands on.
///
/// The square stored here and the board grid are kept in agreement by the
/// `Board` mutation primitives; nothing else writes either of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
    pub square: Square,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Piece {
            kind,
            color,
            has_moved: false,
            square,
        }
    }

    #[inline]
    pub fn view(&self) -> PieceView {
        PieceView {
            kind: self.kind,
            color: self.color,
        }
    }
}

/// What a presentation layer needs to draw a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceView {
    pub kind: PieceKind,
    pub color: Color,
}

/// Which rook a castling move uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    /// Toward file 7.
    Kingside,
    /// Toward file 0.
    Queenside,
}

impl CastleSide {
    /// File of the corner rook for this side.
    #[inline]
    pub const fn rook_file(self) -> i8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// File direction the king travels.
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            CastleSide::Kingside => 1,
            CastleSide::Queenside => -1,
        }
    }
}
