//! Background alpha-beta search under a wall-clock budget.
//!
//! A [`SearchJob`] owns its root node until [`SearchJob::start`] moves it onto
//! a worker thread; the node comes back when the worker is joined by
//! [`SearchJob::poll`], [`SearchJob::wait`] or [`SearchJob::abort`]. The
//! caller is expected to poll once per loop iteration and never block.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, trace, warn};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::board::board::Board;
use crate::board::chess_types::Color;
use crate::move_generation::legal_move_generator::has_legal_moves;
use crate::search::alpha_beta::{alpha_beta, SearchInterrupted};
use crate::search::board_scoring::Score;
use crate::search::search_tree::{ChessNode, MinimaxNode};
use crate::search::threading::{JobStatus, SharedSearchState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u32,
    pub time_budget: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            time_budget: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub processed_nodes: u64,
    pub elapsed: Duration,
    pub max_depth: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// One of the equally best positions reachable in one move.
    Finished(Board),
    /// The budget ran out before the search completed.
    Aborted(SearchStats),
    /// The side to move has no legal move, or the position is already over.
    NoLegalMoves,
}

type WorkerResult = (ChessNode, Result<Score, SearchInterrupted>);

pub struct SearchJob {
    color: Color,
    max_depth: u32,
    state: Arc<SharedSearchState>,
    root: Option<ChessNode>,
    root_value: Option<Score>,
    worker: Option<JoinHandle<WorkerResult>>,
}

impl SearchJob {
    /// Panics if `max_depth` is zero.
    pub fn new(board: Board, color: Color, max_depth: u32, time_budget: Duration) -> Self {
        assert!(max_depth > 0, "search depth must be at least one ply");
        let state = SharedSearchState::new();
        state.set_time_budget(Some(time_budget));
        Self {
            color,
            max_depth,
            state,
            root: Some(ChessNode::root(board, max_depth, color)),
            root_value: None,
            worker: None,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Spawns the worker and starts the clock. Does nothing unless the job is
    /// still `Created`.
    pub fn start(&mut self) {
        if self.state.status() != JobStatus::Created {
            return;
        }
        let Some(mut root) = self.root.take() else {
            return;
        };

        debug!(
            "search started for {} at depth {}",
            self.color, self.max_depth
        );
        self.state.begin();
        let state = Arc::clone(&self.state);
        self.worker = Some(thread::spawn(move || {
            let result = alpha_beta(&mut root, Score::NEG_INFINITY, Score::INFINITY, &state);
            state.finish(match result {
                Ok(_) => JobStatus::Done,
                Err(SearchInterrupted) => JobStatus::Aborted,
            });
            (root, result)
        }));
    }

    /// Non-blocking status check; collects the worker once it has finished.
    pub fn poll(&mut self) -> JobStatus {
        let status = self.state.status();
        if status.is_finished() && self.worker.is_some() {
            self.collect();
        }
        status
    }

    /// Blocks until the worker ends on its own (done or out of time).
    pub fn wait(&mut self) -> JobStatus {
        if self.worker.is_some() {
            self.collect();
        }
        self.state.status()
    }

    /// Asks the worker to stop and joins it. A job that was never started is
    /// marked aborted directly.
    pub fn abort(&mut self) -> JobStatus {
        self.state.request_stop();
        if self.state.status() == JobStatus::Created {
            self.state.finish(JobStatus::Aborted);
        }
        self.wait()
    }

    #[inline]
    pub fn status(&self) -> JobStatus {
        self.state.status()
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            processed_nodes: self.state.processed_nodes(),
            elapsed: self.state.elapsed(),
            max_depth: self.max_depth,
        }
    }

    /// Value of the root for a completed search.
    #[inline]
    pub fn root_value(&self) -> Option<Score> {
        self.root_value
    }

    /// Every equally best child position, in generation order. Empty unless
    /// the job is done.
    pub fn best_results(&self) -> Vec<&Board> {
        match self.finished_root() {
            Some(root) => root.best_children().iter().map(ChessNode::board).collect(),
            None => Vec::new(),
        }
    }

    /// First of the equally best child positions.
    pub fn finished_result(&self) -> Option<&Board> {
        self.finished_root()?.best_children().first().map(ChessNode::board)
    }

    /// Uniformly chosen among the equally best child positions.
    pub fn random_finished_result(&self) -> Option<&Board> {
        self.random_finished_result_with(&mut rand::rng())
    }

    pub fn random_finished_result_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Board> {
        self.finished_root()?.best_children().choose(rng).map(ChessNode::board)
    }

    fn finished_root(&self) -> Option<&ChessNode> {
        if self.state.status() != JobStatus::Done {
            return None;
        }
        self.root.as_ref()
    }

    fn collect(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        let (root, result) = match worker.join() {
            Ok(joined) => joined,
            Err(panic) => std::panic::resume_unwind(panic),
        };

        let stats = self.stats();
        match result {
            Ok(value) => {
                debug!(
                    "search for {} finished: value {value:.3}, {} tied best, {} nodes in {:?}",
                    self.color,
                    root.best_children().len(),
                    stats.processed_nodes,
                    stats.elapsed
                );
                for child in root.best_children() {
                    if let Some(mv) = child.last_move() {
                        trace!("best candidate {mv}");
                    }
                }
                self.root_value = Some(value);
            }
            Err(SearchInterrupted) => {
                warn!(
                    "search for {} aborted at depth {} after {} nodes in {:?}",
                    self.color, self.max_depth, stats.processed_nodes, stats.elapsed
                );
            }
        }
        self.root = Some(root);
    }
}

impl Drop for SearchJob {
    fn drop(&mut self) {
        if let Some(worker) = self.worker.take() {
            self.state.request_stop();
            let _ = worker.join();
        }
    }
}

/// Runs a full search on the calling thread's behalf and waits for it.
pub fn find_best_move(board: Board, color: Color, max_depth: u32, time_budget: Duration) -> SearchOutcome {
    if max_depth == 0 || board.is_draw() || !has_legal_moves(color, &board) {
        return SearchOutcome::NoLegalMoves;
    }

    let mut job = SearchJob::new(board, color, max_depth, time_budget);
    job.start();
    match job.wait() {
        JobStatus::Done => match job.random_finished_result() {
            Some(best) => SearchOutcome::Finished(best.clone()),
            None => SearchOutcome::NoLegalMoves,
        },
        _ => SearchOutcome::Aborted(job.stats()),
    }
}
