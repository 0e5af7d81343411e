//! Search limits and cancellation for engines.
//!
//! The search itself is synchronous. A [`TimeControl`] is the token a caller
//! (or a clock) uses to ask it to stop; engines poll it between sibling moves
//! and return the best fully searched root move.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};

/// Shallowest accepted search depth in plies.
pub const MIN_DEPTH: u8 = 1;
/// Deepest search depth offered to players; the evaluator is expensive.
pub const MAX_DEPTH: u8 = 4;

/// Search limits that control when an engine should stop searching.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Search depth in plies (half-moves)
    pub depth: u8,
    /// Maximum time allowed for this move (None = no limit)
    pub move_time: Option<Duration>,
    /// Cancellation token shared with the caller
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// Create limits with only a depth constraint.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
            time_control: TimeControl::new(None),
        }
    }

    /// Create limits with both depth and time constraints.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Clamp a requested depth into `MIN_DEPTH..=MAX_DEPTH`.
    pub fn clamp_depth(depth: u8) -> u8 {
        depth.clamp(MIN_DEPTH, MAX_DEPTH)
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.time_control.is_stopped()
    }

    /// Start the clock. Call this when search begins.
    pub fn start(&self) {
        self.time_control.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(2)
    }
}

/// Cloneable stop flag with an optional deadline.
///
/// Clones share the same flag, so a caller can keep one and hand the other
/// to the search.
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    start_time: Arc<RwLock<Option<Instant>>>,
    time_limit: Option<Duration>,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: Arc::new(RwLock::new(None)),
            time_limit,
        }
    }

    /// Start the clock. A stop already requested stays in force, so a
    /// token stopped before the search begins ends it at the first check.
    pub fn start(&self) {
        *self
            .start_time
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(Instant::now());
    }

    /// Ask the search to stop at the next sibling boundary.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Returns true if the search should stop, latching the flag when the
    /// deadline has passed.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }

        if let Some(limit) = self.time_limit
            && self.elapsed() >= limit
            && self.started()
        {
            self.stop();
            return true;
        }

        false
    }

    fn started(&self) -> bool {
        self.start_time
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Time since `start`, zero if never started.
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Remaining time (None if there is no limit).
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
