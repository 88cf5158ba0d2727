//! Uniformly random dispatch.

use lift_core::{Floor, SimRng};
use lift_entity::{Elevator, FloorQueues};

use crate::{Direction, MovingAlgorithm};

const CHOICES: [Direction; 3] = [Direction::Up, Direction::Stay, Direction::Down];

/// Picks an independent uniformly random direction for every car.
pub struct RandomMoves {
    rng: SimRng,
}

impl RandomMoves {
    pub fn new(rng: SimRng) -> Self {
        Self { rng }
    }
}

impl MovingAlgorithm for RandomMoves {
    fn move_elevators(
        &mut self,
        elevators: &[Elevator],
        _waiting:  &FloorQueues,
        max_floor: Floor,
    ) -> Vec<Direction> {
        elevators
            .iter()
            .map(|car| {
                // Resample until the draw respects the floor bounds.  At most
                // one of the three choices is ever invalid, so retries are
                // short in expectation.
                loop {
                    let dir = CHOICES[self.rng.gen_range(0..CHOICES.len())];
                    if dir.stays_in_bounds(car.floor, max_floor) {
                        break dir;
                    }
                }
            })
            .collect()
    }
}
