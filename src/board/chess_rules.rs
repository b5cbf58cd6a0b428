//! Canonical chess-rule constants.

use crate::board::chess_types::{Color, PieceKind};
use crate::board::tile::Tile;

/// Standard starting placement in FEN piece-placement notation.
pub const STARTING_PLACEMENT_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Back-rank layout from column A to column H.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[inline]
pub const fn home_row(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

#[inline]
pub const fn pawn_forward(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

#[inline]
pub const fn king_home_tile(color: Color) -> Tile {
    Tile::from_indices(home_row(color), 4)
}

/// Corner tiles a rook must stand on to be considered for castling.
#[inline]
pub const fn rook_home_tiles(color: Color) -> [Tile; 2] {
    [
        Tile::from_indices(home_row(color), 0),
        Tile::from_indices(home_row(color), 7),
    ]
}
