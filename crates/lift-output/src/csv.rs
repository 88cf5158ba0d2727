//! CSV output backend.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, RoundSummaryRow, RunStatsRow};

/// Writes simulation output to two CSV files in one directory.
///
/// Header rows come from the row-struct field names on the first
/// `serialize` call.
pub struct CsvWriter {
    summaries: Writer<File>,
    stats:     Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) `round_summaries.csv` and `run_stats.csv` in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Ok(Self {
            summaries: Writer::from_path(dir.join("round_summaries.csv"))?,
            stats:     Writer::from_path(dir.join("run_stats.csv"))?,
            finished:  false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_round_summary(&mut self, row: &RoundSummaryRow) -> OutputResult<()> {
        self.summaries.serialize(row)?;
        Ok(())
    }

    fn write_run_stats(&mut self, row: &RunStatsRow) -> OutputResult<()> {
        self.stats.serialize(row)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.stats.flush()?;
        Ok(())
    }
}
