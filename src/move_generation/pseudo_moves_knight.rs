use crate::board::board::Board;
use crate::board::chess_types::Color;
use crate::board::tile::Tile;
use crate::board::tile_set::TileSet;
use crate::move_generation::pseudo_moves::step_table;

pub const KNIGHT_STEPS: [u64; 64] = step_table(&[
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
]);

/// L-shaped jumps onto tiles not held by `color`.
pub fn knight_moves(board: &Board, color: Color, tile: Tile) -> TileSet {
    TileSet::from_bits(KNIGHT_STEPS[tile.index()]).difference(board.pieces(color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_from_d4_has_eight_targets() {
        assert_eq!(KNIGHT_STEPS[Tile::from_code("D4").index()].count_ones(), 8);
    }

    #[test]
    fn knight_on_b1_at_start_reaches_a3_and_c3() {
        let board = Board::new_game();
        let moves = knight_moves(&board, Color::White, Tile::from_code("B1"));
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(Tile::from_code("A3")));
        assert!(moves.contains(Tile::from_code("C3")));
    }
}
