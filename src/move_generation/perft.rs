use std::sync::Arc;
use std::thread;

use crate::board::board::Board;
use crate::board::chess_types::Color;
use crate::move_generation::legal_move_checks::{is_checkmate, is_in_check};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf statistics of the legal move tree `depth` plies below `board`, with
/// `color` moving first.
pub fn perft<G: MoveGenerator>(generator: &G, color: Color, board: &Board, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(color, board) {
        perft_recurse(generator, board, &mv, color, depth, 1, &mut total);
    }
    total
}

#[inline]
pub fn perft_legal(color: Color, board: &Board, depth: u8) -> PerftCounts {
    perft(&LegalMoveGenerator, color, board, depth)
}

/// One worker thread per root move.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    color: Color,
    board: &Board,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let root_moves = generator.generate_legal_moves(color, board);
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        let before = board.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            perft_recurse(generator_ref.as_ref(), &before, &mv, color, depth, 1, &mut local);
            local
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        match handle.join() {
            Ok(local) => total.merge(local),
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
    total
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    before: &Board,
    mv: &GeneratedMove,
    mover: Color,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    let after = &mv.board_after_move;

    if current_depth == search_depth {
        counts.nodes += 1;

        if !before.piece_at(mv.chess_move.destination).is_empty() {
            counts.captures += 1;
        }
        if is_in_check(mover.opposite(), after) {
            counts.checks += 1;
            if is_checkmate(mover.opposite(), after) {
                counts.checkmates += 1;
            }
        }
        return;
    }

    for child in generator.generate_legal_moves(mover.opposite(), after) {
        perft_recurse(
            generator,
            after,
            &child,
            mover.opposite(),
            search_depth,
            current_depth + 1,
            counts,
        );
    }
}
