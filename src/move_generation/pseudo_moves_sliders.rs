//! Ray-cast movement for bishops, rooks and queens.
//!
//! Each ray advances one tile at a time. Empty tiles are always destinations;
//! the first occupied tile ends the ray and is a destination only when it
//! holds an opposing piece.

use crate::board::board::Board;
use crate::board::chess_types::Color;
use crate::board::tile::Tile;
use crate::board::tile_set::TileSet;

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub fn bishop_moves(board: &Board, color: Color, tile: Tile) -> TileSet {
    trace_rays(board, color, tile, &DIAGONAL_DIRECTIONS)
}

pub fn rook_moves(board: &Board, color: Color, tile: Tile) -> TileSet {
    trace_rays(board, color, tile, &ORTHOGONAL_DIRECTIONS)
}

pub fn queen_moves(board: &Board, color: Color, tile: Tile) -> TileSet {
    bishop_moves(board, color, tile).union(rook_moves(board, color, tile))
}

fn trace_rays(board: &Board, color: Color, tile: Tile, directions: &[(i8, i8)]) -> TileSet {
    let mut out = TileSet::EMPTY;
    for &(d_row, d_column) in directions {
        let mut cursor = tile.offset(d_row, d_column);
        while let Some(target) = cursor {
            match board.piece_at(target).color() {
                None => out.insert(target),
                Some(owner) => {
                    if owner != color {
                        out.insert(target);
                    }
                    break;
                }
            }
            cursor = target.offset(d_row, d_column);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::chess_types::{Piece, PieceKind};

    fn tile(code: &str) -> Tile {
        Tile::from_code(code)
    }

    #[test]
    fn rook_on_empty_board_sees_fourteen_tiles() {
        let mut board = Board::new_empty();
        board.place_piece(tile("D4"), Piece::new(Color::White, PieceKind::Rook));
        assert_eq!(rook_moves(&board, Color::White, tile("D4")).len(), 14);
        assert_eq!(bishop_moves(&board, Color::White, tile("D4")).len(), 13);
        assert_eq!(queen_moves(&board, Color::White, tile("D4")).len(), 27);
    }

    #[test]
    fn ray_stops_at_capture_and_before_own_piece() {
        let mut board = Board::new_empty();
        board.place_piece(tile("A1"), Piece::new(Color::White, PieceKind::Rook));
        board.place_piece(tile("A4"), Piece::new(Color::Black, PieceKind::Pawn));
        board.place_piece(tile("C1"), Piece::new(Color::White, PieceKind::Knight));

        let moves = rook_moves(&board, Color::White, tile("A1"));
        assert!(moves.contains(tile("A2")));
        assert!(moves.contains(tile("A4")));
        assert!(!moves.contains(tile("A5")));
        assert!(moves.contains(tile("B1")));
        assert!(!moves.contains(tile("C1")));
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn bishops_are_blocked_at_start() {
        let board = Board::new_game();
        assert!(bishop_moves(&board, Color::White, tile("C1")).is_empty());
        assert!(queen_moves(&board, Color::Black, tile("D8")).is_empty());
    }
}
