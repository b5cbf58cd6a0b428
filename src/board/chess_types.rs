//! Core piece and color types shared by the board, move generation and search.
//!
//! Color and kind are kept as separate enums; a [`Piece`] tags a tile as either
//! explicitly empty or holding one colored piece.

use std::fmt;

/// Side owning a piece.
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
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "WHITE"),
            Color::Black => write!(f, "BLACK"),
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::King => "KING",
            PieceKind::Queen => "QUEEN",
            PieceKind::Rook => "ROOK",
            PieceKind::Bishop => "BISHOP",
            PieceKind::Knight => "KNIGHT",
            PieceKind::Pawn => "PAWN",
        };
        f.write_str(name)
    }
}

/// Content of a single tile. `Empty` is an explicit value, never an absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    #[default]
    Empty,
    Placed(Color, PieceKind),
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece::Placed(color, kind)
    }

    /// Color classification: `None` stands for the NONE class of an empty tile.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Piece::Empty => None,
            Piece::Placed(color, _) => Some(color),
        }
    }

    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            Piece::Empty => None,
            Piece::Placed(_, kind) => Some(kind),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    #[inline]
    pub fn is_color(self, color: Color) -> bool {
        self.color() == Some(color)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::Empty => write!(f, "NONE"),
            Piece::Placed(color, kind) => write!(f, "{color}_{kind}"),
        }
    }
}
