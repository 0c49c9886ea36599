//! Search control: stop flag and wall-clock limits.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Nodes between clock checks; must be a power of two.
const CLOCK_CHECK_INTERVAL: u64 = 1024;

/// Controls when a search should stop.
///
/// Two limits apply when timed:
/// - **soft**: no new iterative-deepening iteration starts past it
/// - **hard**: the running iteration aborts, checked every 1024 nodes
///
/// One control belongs to one search call on one thread.
#[derive(Debug)]
pub struct SearchControl {
    stopped: Cell<bool>,
    start: Instant,
    soft_limit: Option<Duration>,
    hard_limit: Option<Duration>,
}

impl SearchControl {
    /// Control without time limits; only [`stop`](Self::stop) ends the search.
    pub fn new_infinite() -> Self {
        Self {
            stopped: Cell::new(false),
            start: Instant::now(),
            soft_limit: None,
            hard_limit: None,
        }
    }

    /// Control with soft and hard limits; the clock starts now.
    pub fn new_timed(soft: Duration, hard: Duration) -> Self {
        Self {
            stopped: Cell::new(false),
            start: Instant::now(),
            soft_limit: Some(soft),
            hard_limit: Some(hard.max(soft)),
        }
    }

    /// Check whether the running iteration must abort.
    ///
    /// Once the hard limit fires the stop flag is set, so later calls
    /// return `true` without reading the clock.
    pub fn should_stop(&self, nodes: u64) -> bool {
        if self.stopped.get() {
            return true;
        }

        if nodes & (CLOCK_CHECK_INTERVAL - 1) != 0 {
            return false;
        }

        if let Some(hard) = self.hard_limit
            && self.elapsed() >= hard
        {
            self.stopped.set(true);
            return true;
        }

        false
    }

    /// Check whether iterative deepening should start another iteration.
    pub fn should_stop_iterating(&self) -> bool {
        if self.stopped.get() {
            return true;
        }

        self.soft_limit.is_some_and(|soft| self.elapsed() >= soft)
    }

    /// Time since the control was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Raise the stop flag.
    pub fn stop(&self) {
        self.stopped.set(true);
    }
}
