//! Depth-bounded minimax, with and without alpha-beta pruning.
//!
//! Both procedures are fail-soft and keep every child that reaches a node's
//! value in that node's best-child set. Pruning only triggers when the window
//! is strictly inverted (`beta < alpha`), so a sibling whose value merely
//! equals the bound is still searched exactly and can tie at the root.
//!
//! Every visited node is counted and every call checks the shared stop flag
//! and deadline; an expired search unwinds with [`SearchInterrupted`].

use thiserror::Error;

use crate::search::board_scoring::Score;
use crate::search::search_tree::{MinimaxNode, NodeType};
use crate::search::threading::SharedSearchState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("search interrupted by stop request or deadline")]
pub struct SearchInterrupted;

pub fn alpha_beta<N: MinimaxNode>(
    node: &mut N,
    mut alpha: Score,
    mut beta: Score,
    state: &SharedSearchState,
) -> Result<Score, SearchInterrupted> {
    if state.should_abort() {
        return Err(SearchInterrupted);
    }
    state.bump_nodes(1);

    if node.is_terminal() {
        return Ok(node.static_value());
    }
    let children = node.expand();
    if children.is_empty() {
        return Ok(node.static_value());
    }

    let maximizing = node.node_type() == NodeType::Maximizing;
    let mut best = if maximizing {
        Score::NEG_INFINITY
    } else {
        Score::INFINITY
    };
    let mut best_children = Vec::new();

    for mut child in children {
        let value = alpha_beta(&mut child, alpha, beta, state)?;

        if improves(maximizing, value, best) {
            best = value;
            best_children.clear();
            best_children.push(child);
        } else if value == best {
            best_children.push(child);
        }

        if maximizing {
            alpha = alpha.max(value);
        } else {
            beta = beta.min(value);
        }
        if beta < alpha {
            break;
        }
    }

    node.set_best_children(best_children);
    Ok(best)
}

/// Plain minimax over the full tree. Same counting and cancellation as
/// [`alpha_beta`].
pub fn minimax<N: MinimaxNode>(node: &mut N, state: &SharedSearchState) -> Result<Score, SearchInterrupted> {
    if state.should_abort() {
        return Err(SearchInterrupted);
    }
    state.bump_nodes(1);

    if node.is_terminal() {
        return Ok(node.static_value());
    }
    let children = node.expand();
    if children.is_empty() {
        return Ok(node.static_value());
    }

    let maximizing = node.node_type() == NodeType::Maximizing;
    let mut best = if maximizing {
        Score::NEG_INFINITY
    } else {
        Score::INFINITY
    };
    let mut best_children = Vec::new();

    for mut child in children {
        let value = minimax(&mut child, state)?;
        if improves(maximizing, value, best) {
            best = value;
            best_children.clear();
            best_children.push(child);
        } else if value == best {
            best_children.push(child);
        }
    }

    node.set_best_children(best_children);
    Ok(best)
}

#[inline]
fn improves(maximizing: bool, value: Score, best: Score) -> bool {
    if maximizing {
        value > best
    } else {
        value < best
    }
}
