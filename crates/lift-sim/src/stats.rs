//! Running completion statistics.

use std::fmt;

/// Sentinel reported for max/min/average wait before the first completion.
pub const NO_DATA: i64 = -1;

/// Monotonically accumulated statistics for one simulation run.
///
/// Counters only ever grow; the wait-time aggregates are folded in one
/// completion at a time, so no per-person history is retained.
#[derive(Clone, Debug, PartialEq)]
pub struct RunStats {
    /// Rounds executed so far.
    pub rounds: u64,
    /// People ever produced by the arrival generator.
    pub total_arrivals: u64,
    /// People who reached their target floor.
    pub people_completed: u64,
    /// Longest completion wait, or −1 before any completion.
    pub max_wait: i64,
    /// Shortest completion wait, or −1 before any completion.
    pub min_wait: i64,
    /// Running average completion wait, or −1.0 before any completion.
    pub avg_wait: f64,
}

impl RunStats {
    pub fn new() -> Self {
        Self {
            rounds:           0,
            total_arrivals:   0,
            people_completed: 0,
            max_wait:         NO_DATA,
            min_wait:         NO_DATA,
            avg_wait:         NO_DATA as f64,
        }
    }

    /// Fold one completion into the running aggregates.
    ///
    /// The first completion seeds both extremes.  After that a new value
    /// updates at most one of them, and a value tying an existing extreme
    /// updates neither.  The average is recomputed incrementally from the
    /// previous average and the new count.
    pub fn record_completion(&mut self, finish_time: u32) {
        let finish = finish_time as i64;
        self.people_completed += 1;
        if self.people_completed == 1 {
            self.max_wait = finish;
            self.min_wait = finish;
        } else if finish > self.max_wait {
            self.max_wait = finish;
        } else if finish < self.min_wait {
            self.min_wait = finish;
        }
        let n = self.people_completed as f64;
        self.avg_wait = (self.avg_wait * (n - 1.0) + finish as f64) / n;
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rounds, {} arrived, {} completed (wait max {} / min {} / avg {:.2})",
            self.rounds,
            self.total_arrivals,
            self.people_completed,
            self.max_wait,
            self.min_wait,
            self.avg_wait
        )
    }
}
