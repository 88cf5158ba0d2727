//! Tests for lift-output.

use std::path::Path;

use lift_arrivals::{ArrivalRecord, FileArrivals};
use lift_core::{Floor, Round, SimConfig};
use lift_dispatch::PushyPassenger;
use lift_sim::Sim;

use crate::writer::OutputWriter;
use crate::{CsvWriter, RoundSummaryRow, RunStatsRow, StatsObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn summary(round: u64) -> RoundSummaryRow {
    RoundSummaryRow {
        round,
        arrivals: 2,
        boarded: 1,
        disembarked: 0,
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[cfg(test)]
mod csv_writer {
    use super::*;

    #[test]
    fn writes_headers_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.write_round_summary(&summary(0)).unwrap();
        writer.write_round_summary(&summary(1)).unwrap();
        writer.finish().unwrap();

        let contents = read(&dir.path().join("round_summaries.csv"));
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "round,arrivals,boarded,disembarked");
        assert_eq!(lines[1], "0,2,1,0");
        assert_eq!(lines[2], "1,2,1,0");
    }

    #[test]
    fn writes_the_stats_row() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer
            .write_run_stats(&RunStatsRow {
                rounds:           5,
                total_arrivals:   3,
                people_completed: 2,
                max_wait:         4,
                min_wait:         1,
                avg_wait:         2.5,
            })
            .unwrap();
        writer.finish().unwrap();

        let contents = read(&dir.path().join("run_stats.csv"));
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines[0],
            "rounds,total_arrivals,people_completed,max_wait,min_wait,avg_wait"
        );
        assert_eq!(lines[1], "5,3,2,4,1,2.5");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.write_round_summary(&summary(0)).unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap();
    }
}

#[cfg(test)]
mod stats_observer {
    use super::*;

    fn scripted_sim() -> Sim<FileArrivals, PushyPassenger> {
        // One person, floor 2 → 3; completes at round 2 with wait 2.
        let records = vec![ArrivalRecord {
            round: Round(0),
            trips: vec![(Floor(2), Floor(3))],
        }];
        let arrivals = FileArrivals::new(Floor(3), records).unwrap();
        let config = SimConfig {
            num_floors:        3,
            num_elevators:     1,
            elevator_capacity: 2,
        };
        Sim::new(config, arrivals, PushyPassenger).unwrap()
    }

    #[test]
    fn one_summary_row_per_round_plus_stats() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut observer = StatsObserver::new(writer);

        scripted_sim().run(4, &mut observer).unwrap();
        assert!(observer.take_error().is_none());

        let summaries = read(&dir.path().join("round_summaries.csv"));
        // Header + one row per round.
        assert_eq!(summaries.lines().count(), 5);
        let lines: Vec<&str> = summaries.lines().collect();
        assert_eq!(lines[1], "0,1,0,0"); // arrival, no car on that floor yet
        assert_eq!(lines[2], "1,0,1,0"); // boards
        assert_eq!(lines[3], "2,0,0,1"); // delivered
        assert_eq!(lines[4], "3,0,0,0"); // quiet

        let stats = read(&dir.path().join("run_stats.csv"));
        let lines: Vec<&str> = stats.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "4,1,1,2,2,2.0");
    }

    #[test]
    fn tallies_reset_between_rounds() {
        // In-memory writer capturing rows, no filesystem involved.
        #[derive(Default)]
        struct Capture {
            rows: Vec<RoundSummaryRow>,
        }
        impl OutputWriter for Capture {
            fn write_round_summary(&mut self, row: &RoundSummaryRow) -> crate::OutputResult<()> {
                self.rows.push(*row);
                Ok(())
            }
            fn write_run_stats(&mut self, _row: &RunStatsRow) -> crate::OutputResult<()> {
                Ok(())
            }
            fn finish(&mut self) -> crate::OutputResult<()> {
                Ok(())
            }
        }

        let mut observer = StatsObserver::new(Capture::default());
        scripted_sim().run(3, &mut observer).unwrap();
        let capture = observer.into_writer();

        assert_eq!(capture.rows.len(), 3);
        assert_eq!(capture.rows[0].arrivals, 1);
        assert_eq!(capture.rows[1].arrivals, 0);
        assert_eq!(capture.rows[1].boarded, 1);
        assert_eq!(capture.rows[2].disembarked, 1);
    }
}
