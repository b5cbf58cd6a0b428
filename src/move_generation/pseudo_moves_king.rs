use crate::board::board::Board;
use crate::board::chess_types::Color;
use crate::board::tile::Tile;
use crate::board::tile_set::TileSet;
use crate::move_generation::pseudo_moves::step_table;

pub const KING_STEPS: [u64; 64] = step_table(&[
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
]);

/// Adjacent tiles not held by `color`.
pub fn king_moves(board: &Board, color: Color, tile: Tile) -> TileSet {
    TileSet::from_bits(KING_STEPS[tile.index()]).difference(board.pieces(color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn king_steps_from_corner_and_center() {
        assert_eq!(KING_STEPS[Tile::from_code("A1").index()].count_ones(), 3);
        assert_eq!(KING_STEPS[Tile::from_code("D4").index()].count_ones(), 8);
    }

    #[test]
    fn king_boxed_in_at_start() {
        let board = Board::new_game();
        assert!(king_moves(&board, Color::White, Tile::from_code("E1")).is_empty());
    }
}
