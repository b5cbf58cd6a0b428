use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::board::chess_types::Color;

/// A legal move together with the position it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMove {
    pub chess_move: Move,
    pub board_after_move: Board,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, color: Color, board: &Board) -> Vec<GeneratedMove>;

    /// Resulting positions only; search works on boards, not moves.
    fn legal_child_boards(&self, color: Color, board: &Board) -> Vec<Board> {
        self.generate_legal_moves(color, board)
            .into_iter()
            .map(|generated| generated.board_after_move)
            .collect()
    }
}
