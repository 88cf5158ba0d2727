//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, RoundSummaryRow, RunStatsRow};

/// Sink for simulation output rows.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored by [`StatsObserver`][crate::StatsObserver] and retrieved with
/// `take_error` after the run.
pub trait OutputWriter {
    /// Write one per-round summary row.
    fn write_round_summary(&mut self, row: &RoundSummaryRow) -> OutputResult<()>;

    /// Write the final statistics row.
    fn write_run_stats(&mut self, row: &RunStatsRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
