//! Minimax node abstraction and its chess implementation.
//!
//! A node owns the subset of its children that reached its value (the
//! best-child set); every other child is dropped as soon as it has been
//! scored. Ties are kept, not resolved.

use std::sync::{Arc, Weak};

use crate::board::board::Board;
use crate::board::chess_move::{diff_boards, Move};
use crate::board::chess_types::Color;
use crate::move_generation::legal_move_generator::{has_legal_moves, legal_child_boards};
use crate::search::board_scoring::{static_value, Score};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Maximizing,
    Minimizing,
}

impl NodeType {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            NodeType::Maximizing => NodeType::Minimizing,
            NodeType::Minimizing => NodeType::Maximizing,
        }
    }
}

/// What the search procedures need from a tree node.
pub trait MinimaxNode: Sized {
    fn node_type(&self) -> NodeType;

    fn is_terminal(&self) -> bool;

    /// Fresh child nodes, one ply deeper, with the opposite node type.
    fn expand(&self) -> Vec<Self>;

    fn static_value(&self) -> Score;

    fn best_children(&self) -> &[Self];

    fn set_best_children(&mut self, children: Vec<Self>);
}

#[derive(Debug)]
pub struct ChessNode {
    board: Arc<Board>,
    depth: u32,
    parent: Option<Weak<Board>>,
    node_type: NodeType,
    fixed_color: Color,
    best_children: Vec<ChessNode>,
}

impl ChessNode {
    /// Maximizing root for `color`, searching `max_depth` plies.
    pub fn root(board: Board, max_depth: u32, color: Color) -> Self {
        Self {
            board: Arc::new(board),
            depth: max_depth,
            parent: None,
            node_type: NodeType::Maximizing,
            fixed_color: color,
            best_children: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Remaining plies below this node.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn fixed_color(&self) -> Color {
        self.fixed_color
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Maximizing nodes move the searching color, minimizing nodes its opponent.
    #[inline]
    pub fn color_to_move(&self) -> Color {
        match self.node_type {
            NodeType::Maximizing => self.fixed_color,
            NodeType::Minimizing => self.fixed_color.opposite(),
        }
    }

    /// The move that led from the parent position to this one, while the
    /// parent is still alive.
    pub fn last_move(&self) -> Option<Move> {
        let parent = self.parent.as_ref()?.upgrade()?;
        Some(diff_boards(&parent, &self.board, self.color_to_move().opposite()))
    }
}

impl MinimaxNode for ChessNode {
    #[inline]
    fn node_type(&self) -> NodeType {
        self.node_type
    }

    /// Out of depth, a bare-kings draw, or (below the root) a side with no
    /// legal reply. The root always expands, even when it is already mated.
    fn is_terminal(&self) -> bool {
        self.depth == 0
            || self.board.is_draw()
            || (!self.is_root() && !has_legal_moves(self.color_to_move(), &self.board))
    }

    fn expand(&self) -> Vec<Self> {
        let Some(child_depth) = self.depth.checked_sub(1) else {
            return Vec::new();
        };
        legal_child_boards(self.color_to_move(), &self.board)
            .into_iter()
            .map(|board| ChessNode {
                board: Arc::new(board),
                depth: child_depth,
                parent: Some(Arc::downgrade(&self.board)),
                node_type: self.node_type.opposite(),
                fixed_color: self.fixed_color,
                best_children: Vec::new(),
            })
            .collect()
    }

    #[inline]
    fn static_value(&self) -> Score {
        static_value(&self.board, self.fixed_color)
    }

    #[inline]
    fn best_children(&self) -> &[Self] {
        &self.best_children
    }

    #[inline]
    fn set_best_children(&mut self, children: Vec<Self>) {
        self.best_children = children;
    }
}
