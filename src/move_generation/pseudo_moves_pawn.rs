use crate::board::board::Board;
use crate::board::chess_rules::{pawn_forward, pawn_start_row};
use crate::board::chess_types::Color;
use crate::board::tile::Tile;
use crate::board::tile_set::TileSet;

/// Forward pushes into empty tiles (double push from the start row when both
/// tiles are empty) and diagonal forward captures of opposing pieces.
/// No en-passant.
pub fn pawn_moves(board: &Board, color: Color, tile: Tile) -> TileSet {
    let forward = pawn_forward(color);
    let mut out = TileSet::EMPTY;

    if let Some(one_step) = tile.offset(forward, 0) {
        if board.piece_at(one_step).is_empty() {
            out.insert(one_step);

            if tile.row() == pawn_start_row(color) {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.piece_at(two_step).is_empty() {
                        out.insert(two_step);
                    }
                }
            }
        }
    }

    for d_column in [-1i8, 1i8] {
        let Some(target) = tile.offset(forward, d_column) else {
            continue;
        };
        if board.piece_at(target).is_color(color.opposite()) {
            out.insert(target);
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
    fn start_row_pawns_push_one_or_two() {
        let board = Board::new_game();
        let white = pawn_moves(&board, Color::White, tile("E2"));
        assert_eq!(white.len(), 2);
        assert!(white.contains(tile("E3")) && white.contains(tile("E4")));

        let black = pawn_moves(&board, Color::Black, tile("D7"));
        assert!(black.contains(tile("D6")) && black.contains(tile("D5")));
    }

    #[test]
    fn double_push_needs_clear_path() {
        let mut board = Board::new_game();
        board.place_piece(tile("E3"), Piece::new(Color::Black, PieceKind::Knight));
        let blocked = pawn_moves(&board, Color::White, tile("E2"));
        assert!(!blocked.contains(tile("E3")));
        assert!(!blocked.contains(tile("E4")));

        let mut board = Board::new_game();
        board.place_piece(tile("E4"), Piece::new(Color::Black, PieceKind::Knight));
        let half = pawn_moves(&board, Color::White, tile("E2"));
        assert!(half.contains(tile("E3")));
        assert!(!half.contains(tile("E4")));
    }

    #[test]
    fn pawn_captures_only_opponents_diagonally() {
        let mut board = Board::new_empty();
        board.place_piece(tile("D4"), Piece::new(Color::White, PieceKind::Pawn));
        board.place_piece(tile("C5"), Piece::new(Color::Black, PieceKind::Rook));
        board.place_piece(tile("E5"), Piece::new(Color::White, PieceKind::Rook));
        board.place_piece(tile("D5"), Piece::new(Color::Black, PieceKind::Pawn));

        let moves = pawn_moves(&board, Color::White, tile("D4"));
        assert_eq!(moves.len(), 1);
        assert!(moves.contains(tile("C5")));
    }

    #[test]
    fn pawn_on_last_row_is_stuck() {
        let mut board = Board::new_empty();
        board.place_piece(tile("A8"), Piece::new(Color::White, PieceKind::Pawn));
        assert!(pawn_moves(&board, Color::White, tile("A8")).is_empty());
    }
}
