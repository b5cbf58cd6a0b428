//! Material evaluation of leaf positions.
//!
//! Scores are always taken from the perspective of the color that started
//! the search, never the side to move at the leaf.

use crate::board::board::Board;
use crate::board::chess_types::{Color, PieceKind};

pub type Score = f32;

#[inline]
pub const fn piece_value(kind: PieceKind) -> u32 {
    match kind {
        PieceKind::Queen => 10,
        PieceKind::Rook => 5,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Pawn => 1,
        PieceKind::King => 0,
    }
}

/// Summed piece values of `color`.
pub fn material(board: &Board, color: Color) -> u32 {
    board
        .pieces(color)
        .iter()
        .filter_map(|tile| board.piece_at(tile).kind())
        .map(piece_value)
        .sum()
}

/// `(own - opponent) / (own + opponent)` in `[-1, 1]`; 0.0 when neither side
/// has material left (bare kings or an empty board).
pub fn static_value(board: &Board, fixed_color: Color) -> Score {
    let own = material(board, fixed_color);
    let opponent = material(board, fixed_color.opposite());
    let total = own + opponent;
    if total == 0 {
        return 0.0;
    }
    (own as Score - opponent as Score) / total as Score
}
