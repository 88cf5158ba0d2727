//! Scripted arrivals replayed from pre-parsed records.

use lift_core::{Floor, Round};
use lift_entity::{FloorQueues, Person};

use crate::{ArrivalError, ArrivalGenerator, ArrivalResult};

/// One row of arrival data: everyone who appears at `round`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrivalRecord {
    pub round: Round,
    /// `(start, target)` floor pairs in file order.
    pub trips: Vec<(Floor, Floor)>,
}

/// Replays a fixed arrival script, typically loaded via
/// [`load_records_csv`][crate::load_records_csv].
///
/// Rounds with no record yield an empty batch — a script shorter than the
/// run is not an error, the building just goes quiet.
pub struct FileArrivals {
    max_floor: Floor,
    records:   Vec<ArrivalRecord>,
}

impl FileArrivals {
    /// Rejects `max_floor < 2`, same as every generator.
    pub fn new(max_floor: Floor, records: Vec<ArrivalRecord>) -> ArrivalResult<Self> {
        if max_floor.0 < 2 {
            return Err(ArrivalError::Config(format!(
                "max_floor must be at least 2, got {}",
                max_floor.0
            )));
        }
        Ok(Self { max_floor, records })
    }
}

impl ArrivalGenerator for FileArrivals {
    fn max_floor(&self) -> Floor {
        self.max_floor
    }

    fn generate(&mut self, round: Round) -> FloorQueues {
        let mut batch = FloorQueues::new(self.max_floor);
        // At most one record per round is expected; the first match wins and
        // the scan stops there.
        if let Some(record) = self.records.iter().find(|r| r.round == round) {
            for &(start, target) in &record.trips {
                // Starting floors above the roof are dropped here; targets
                // are passed through untouched (a data-source concern).
                if start <= self.max_floor {
                    batch.push(start, Person::new(start, target));
                }
            }
        }
        batch
    }
}
