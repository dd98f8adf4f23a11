//! Wall-clock budget for a single move decision.

use std::time::{Duration, Instant};

use thiserror::Error;

/// Signals that the time budget was breached mid-search.
///
/// This is an explicit result variant rather than a panic: it propagates with
/// `?` through every active recursive frame, so the abort path is visible in
/// each function's signature and can never be mistaken for a legitimate score.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("search interrupted: time budget exhausted")]
pub struct SearchInterrupted;

/// Cooperative cancellation source for one move decision.
///
/// The budget is owned by the caller for the duration of a single decision and
/// is not persisted across moves. The searcher only reads it: every recursive
/// search call must invoke [`TimeBudget::checkpoint`] before doing any work.
/// The threshold is the safety margin that guarantees the decision returns
/// before the clock actually reaches zero.
#[derive(Debug, Clone, Copy)]
pub struct TimeBudget {
    deadline: Instant,
    threshold: Duration,
}

impl TimeBudget {
    /// Safety margin below which search aborts. Matches the margin the engine
    /// is tuned for under a 150 ms per-move tournament clock.
    pub const DEFAULT_THRESHOLD: Duration = Duration::from_millis(10);

    /// A budget expiring `limit` from now, with the default safety threshold.
    pub fn new(limit: Duration) -> Self {
        Self::with_threshold(limit, Self::DEFAULT_THRESHOLD)
    }

    /// A budget expiring `limit` from now, aborting once less than
    /// `threshold` remains.
    pub fn with_threshold(limit: Duration, threshold: Duration) -> Self {
        Self {
            deadline: Instant::now() + limit,
            threshold,
        }
    }

    /// Time remaining before the deadline. Monotonically decreasing; zero
    /// once the deadline has passed.
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    /// True once less than the safety threshold remains.
    pub fn is_exhausted(&self) -> bool {
        self.remaining() < self.threshold
    }

    /// The mandatory first call of every recursive search function: aborts
    /// the in-progress search before any move generation or recursion once
    /// the budget is exhausted.
    #[inline]
    pub fn checkpoint(&self) -> Result<(), SearchInterrupted> {
        if self.is_exhausted() {
            Err(SearchInterrupted)
        } else {
            Ok(())
        }
    }
}
