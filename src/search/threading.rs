//! State shared between a search worker thread and its owner.
//!
//! The worker reads the stop flag and the deadline on every recursive call;
//! the owner polls status and node count under a single lock.

use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Mutex,
};
use std::time::{Duration, Instant};

/// Life cycle of a search job: `Created -> Running -> (Done | Aborted)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobStatus {
    Created,
    Running,
    Done,
    Aborted,
}

impl JobStatus {
    #[inline]
    pub fn is_finished(self) -> bool {
        matches!(self, JobStatus::Done | JobStatus::Aborted)
    }
}

#[derive(Debug, Clone, Copy)]
struct SearchProgress {
    processed_nodes: u64,
    status: JobStatus,
    elapsed_at_finish: Option<Duration>,
}

/// Cancellation, deadline and accounting state for one search.
#[derive(Debug)]
pub struct SharedSearchState {
    stop: AtomicBool,
    time_budget_ms: AtomicU64, // 0 means unlimited
    progress: Mutex<SearchProgress>,
    started_at: Mutex<Option<Instant>>,
}

impl SharedSearchState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            stop: AtomicBool::new(false),
            time_budget_ms: AtomicU64::new(0),
            progress: Mutex::new(SearchProgress {
                processed_nodes: 0,
                status: JobStatus::Created,
                elapsed_at_finish: None,
            }),
            started_at: Mutex::new(None),
        })
    }

    #[inline]
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn set_time_budget(&self, budget: Option<Duration>) {
        // Saturate: budgets past u64::MAX ms behave as the longest finite budget.
        let budget_ms = budget.map_or(0, |b| {
            u64::try_from(b.as_millis()).unwrap_or(u64::MAX).max(1)
        });
        self.time_budget_ms.store(budget_ms, Ordering::Relaxed);
    }

    #[inline]
    pub fn reset_started_at(&self) {
        if let Ok(mut guard) = self.started_at.lock() {
            *guard = Some(Instant::now());
        }
    }

    /// Clears counters and the stop flag, marks the search running and
    /// starts the clock.
    pub fn begin(&self) {
        self.stop.store(false, Ordering::Relaxed);
        if let Ok(mut guard) = self.progress.lock() {
            guard.processed_nodes = 0;
            guard.status = JobStatus::Running;
            guard.elapsed_at_finish = None;
        }
        self.reset_started_at();
    }

    /// Records the final status and freezes the elapsed time.
    pub fn finish(&self, status: JobStatus) {
        let elapsed = self.elapsed();
        if let Ok(mut guard) = self.progress.lock() {
            guard.status = status;
            guard.elapsed_at_finish = Some(elapsed);
        }
    }

    #[inline]
    pub fn bump_nodes(&self, n: u64) {
        if let Ok(mut guard) = self.progress.lock() {
            guard.processed_nodes += n;
        }
    }

    pub fn processed_nodes(&self) -> u64 {
        let Ok(guard) = self.progress.lock() else {
            return 0;
        };
        guard.processed_nodes
    }

    pub fn status(&self) -> JobStatus {
        let Ok(guard) = self.progress.lock() else {
            return JobStatus::Aborted;
        };
        guard.status
    }

    /// Time since `begin`, frozen once the search finished.
    pub fn elapsed(&self) -> Duration {
        if let Ok(guard) = self.progress.lock() {
            if let Some(frozen) = guard.elapsed_at_finish {
                return frozen;
            }
        }
        let Ok(guard) = self.started_at.lock() else {
            return Duration::ZERO;
        };
        (*guard).map_or(Duration::ZERO, |started| started.elapsed())
    }

    #[inline]
    pub fn time_budget_exceeded(&self) -> bool {
        let budget_ms = self.time_budget_ms.load(Ordering::Relaxed);
        if budget_ms == 0 {
            return false;
        }
        let Ok(guard) = self.started_at.lock() else {
            return false;
        };
        let Some(started) = *guard else {
            return false;
        };
        u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX) >= budget_ms
    }

    /// Checked by the search on every recursive call.
    #[inline]
    pub fn should_abort(&self) -> bool {
        self.should_stop() || self.time_budget_exceeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn stop_flag_and_node_accounting() {
        let state = SharedSearchState::new();
        assert!(!state.should_stop());
        assert_eq!(state.status(), JobStatus::Created);

        state.begin();
        state.bump_nodes(10);
        state.bump_nodes(5);
        assert_eq!(state.processed_nodes(), 15);
        assert_eq!(state.status(), JobStatus::Running);

        state.request_stop();
        assert!(state.should_stop());
        assert!(state.should_abort());
    }

    #[test]
    fn begin_resets_previous_run() {
        let state = SharedSearchState::new();
        state.begin();
        state.bump_nodes(3);
        state.request_stop();
        state.finish(JobStatus::Aborted);

        state.begin();
        assert_eq!(state.processed_nodes(), 0);
        assert!(!state.should_stop());
        assert_eq!(state.status(), JobStatus::Running);
    }

    #[test]
    fn unlimited_budget_never_expires() {
        let state = SharedSearchState::new();
        state.set_time_budget(None);
        state.begin();
        assert!(!state.time_budget_exceeded());
    }

    #[test]
    fn oversized_budget_saturates_instead_of_wrapping() {
        for budget in [Duration::from_millis(u64::MAX) + Duration::from_millis(1), Duration::MAX] {
            let state = SharedSearchState::new();
            state.set_time_budget(Some(budget));
            state.begin();
            thread::sleep(Duration::from_millis(5));
            assert!(!state.time_budget_exceeded(), "{budget:?} expired early");
        }
    }

    #[test]
    fn budget_expires_after_deadline() {
        let state = SharedSearchState::new();
        state.set_time_budget(Some(Duration::from_millis(5)));
        assert!(!state.time_budget_exceeded(), "clock not started yet");

        state.begin();
        thread::sleep(Duration::from_millis(20));
        assert!(state.time_budget_exceeded());
        assert!(state.should_abort());
    }

    #[test]
    fn elapsed_freezes_on_finish() {
        let state = SharedSearchState::new();
        state.begin();
        thread::sleep(Duration::from_millis(2));
        state.finish(JobStatus::Done);
        let frozen = state.elapsed();
        thread::sleep(Duration::from_millis(5));
        assert_eq!(state.elapsed(), frozen);
        assert!(state.status().is_finished());
    }
}
