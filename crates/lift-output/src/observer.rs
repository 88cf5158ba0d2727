//! `StatsObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lift_core::Round;
use lift_entity::{FloorQueues, Person};
use lift_sim::{RunStats, SimObserver};

use crate::writer::OutputWriter;
use crate::{OutputError, RoundSummaryRow, RunStatsRow};

/// A [`SimObserver`] that tallies event counts from the hook stream and
/// writes one summary row per round plus a final statistics row to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer hooks have
/// no return value.  After the run, check for them with
/// [`take_error`][Self::take_error].
pub struct StatsObserver<W: OutputWriter> {
    writer:      W,
    arrivals:    u64,
    boarded:     u64,
    disembarked: u64,
    last_error:  Option<OutputError>,
}

impl<W: OutputWriter> StatsObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            arrivals:    0,
            boarded:     0,
            disembarked: 0,
            last_error:  None,
        }
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for StatsObserver<W> {
    fn on_arrivals(&mut self, _round: Round, batch: &FloorQueues) {
        self.arrivals = batch.total() as u64;
    }

    fn on_board(&mut self, _person: &Person, _elevator_idx: usize) {
        self.boarded += 1;
    }

    fn on_disembark(&mut self, _person: &Person, _elevator_idx: usize) {
        self.disembarked += 1;
    }

    fn on_round_end(&mut self, round: Round, _stats: &RunStats) {
        let row = RoundSummaryRow {
            round:       round.0,
            arrivals:    self.arrivals,
            boarded:     self.boarded,
            disembarked: self.disembarked,
        };
        self.arrivals = 0;
        self.boarded = 0;
        self.disembarked = 0;

        let result = self.writer.write_round_summary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, stats: &RunStats) {
        let result = self.writer.write_run_stats(&RunStatsRow::from(stats));
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
