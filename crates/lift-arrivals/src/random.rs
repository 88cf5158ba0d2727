//! Uniform random arrivals.

use lift_core::{Floor, Round, SimRng};
use lift_entity::{FloorQueues, Person};

use crate::{ArrivalError, ArrivalGenerator, ArrivalResult};

/// Generates a fixed number of uniformly random passengers each round.
///
/// Start and target floors are drawn independently from `[1, max_floor]`
/// and rejection-resampled until they differ, so a generated person never
/// starts on the floor they want to reach.
pub struct RandomArrivals {
    max_floor:        Floor,
    people_per_round: usize,
    rng:              SimRng,
}

impl RandomArrivals {
    /// `people_per_round` may be 0 (a building nobody visits).
    ///
    /// Rejects `max_floor < 2`: with a single floor no start/target pair
    /// can differ.
    pub fn new(max_floor: Floor, people_per_round: usize, rng: SimRng) -> ArrivalResult<Self> {
        if max_floor.0 < 2 {
            return Err(ArrivalError::Config(format!(
                "max_floor must be at least 2, got {}",
                max_floor.0
            )));
        }
        Ok(Self {
            max_floor,
            people_per_round,
            rng,
        })
    }
}

impl ArrivalGenerator for RandomArrivals {
    fn max_floor(&self) -> Floor {
        self.max_floor
    }

    fn generate(&mut self, _round: Round) -> FloorQueues {
        let mut batch = FloorQueues::new(self.max_floor);
        for _ in 0..self.people_per_round {
            // Redraw both floors on collision — never clamp or shift.
            let (start, target) = loop {
                let start: u32 = self.rng.gen_range(1..=self.max_floor.0);
                let target: u32 = self.rng.gen_range(1..=self.max_floor.0);
                if start != target {
                    break (Floor(start), Floor(target));
                }
            };
            batch.push(start, Person::new(start, target));
        }
        batch
    }
}
