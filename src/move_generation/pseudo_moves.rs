//! Pseudo-legal destination generation.
//!
//! Destinations obey movement shape and blocking only; whether the mover's
//! own king is left in check is decided later by the legality filter in
//! `legal_move_generator`.

use crate::board::board::Board;
use crate::board::chess_types::{Piece, PieceKind};
use crate::board::tile::Tile;
use crate::board::tile_set::TileSet;
use crate::move_generation::pseudo_moves_king::king_moves;
use crate::move_generation::pseudo_moves_knight::knight_moves;
use crate::move_generation::pseudo_moves_pawn::pawn_moves;
use crate::move_generation::pseudo_moves_sliders::{bishop_moves, queen_moves, rook_moves};

/// Destinations for `piece` standing on `tile` of `board`. Empty for `Piece::Empty`.
pub fn pseudo_moves(board: &Board, piece: Piece, tile: Tile) -> TileSet {
    let Piece::Placed(color, kind) = piece else {
        return TileSet::EMPTY;
    };

    match kind {
        PieceKind::King => king_moves(board, color, tile),
        PieceKind::Queen => queen_moves(board, color, tile),
        PieceKind::Rook => rook_moves(board, color, tile),
        PieceKind::Bishop => bishop_moves(board, color, tile),
        PieceKind::Knight => knight_moves(board, color, tile),
        PieceKind::Pawn => pawn_moves(board, color, tile),
    }
}

/// Destinations for whatever stands on `tile`.
#[inline]
pub fn tile_moves(board: &Board, tile: Tile) -> TileSet {
    pseudo_moves(board, board.piece_at(tile), tile)
}

/// Builds a 64-entry step table from a fixed list of `(d_row, d_column)` offsets.
pub(crate) const fn step_table(offsets: &[(i32, i32); 8]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let column = (sq % 8) as i32;
        let mut targets = 0u64;

        let mut i = 0usize;
        while i < offsets.len() {
            targets |= bit_if_valid(row + offsets[i].0, column + offsets[i].1);
            i += 1;
        }

        table[sq] = targets;
        sq += 1;
    }

    table
}

const fn bit_if_valid(row: i32, column: i32) -> u64 {
    if row < 0 || row > 7 || column < 0 || column > 7 {
        return 0;
    }

    1u64 << ((row as usize) * 8 + (column as usize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::chess_types::Color;

    #[test]
    fn empty_piece_has_no_moves() {
        let board = Board::new_game();
        assert!(pseudo_moves(&board, Piece::Empty, Tile::from_code("E4")).is_empty());
        assert!(tile_moves(&board, Tile::from_code("E4")).is_empty());
    }

    #[test]
    fn starting_position_pseudo_move_counts() {
        let board = Board::new_game();
        let total: usize = board
            .pieces(Color::White)
            .iter()
            .map(|tile| tile_moves(&board, tile).len())
            .sum();
        assert_eq!(total, 20);
    }
}
