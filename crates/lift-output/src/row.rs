//! Plain data row types written by output backends.

use serde::Serialize;

use lift_sim::RunStats;

/// Event counts for one simulation round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundSummaryRow {
    pub round:       u64,
    pub arrivals:    u64,
    pub boarded:     u64,
    pub disembarked: u64,
}

/// The final statistics snapshot for a whole run.
///
/// Field-for-field mirror of [`lift_sim::RunStats`]; wait extremes keep the
/// −1 "no data" sentinel of the live struct.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunStatsRow {
    pub rounds:           u64,
    pub total_arrivals:   u64,
    pub people_completed: u64,
    pub max_wait:         i64,
    pub min_wait:         i64,
    pub avg_wait:         f64,
}

impl From<&RunStats> for RunStatsRow {
    fn from(stats: &RunStats) -> Self {
        Self {
            rounds:           stats.rounds,
            total_arrivals:   stats.total_arrivals,
            people_completed: stats.people_completed,
            max_wait:         stats.max_wait,
            min_wait:         stats.min_wait,
            avg_wait:         stats.avg_wait,
        }
    }
}
