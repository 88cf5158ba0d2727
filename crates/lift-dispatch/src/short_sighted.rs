//! Nearest-job dispatch.

use lift_core::Floor;
use lift_entity::{Elevator, FloorQueues};

use crate::{Direction, MovingAlgorithm};

/// Heads for whatever is closest right now.
///
/// A loaded car consults only its head passenger (boarding order); later
/// riders never influence the decision.  An empty car seeks the waiting
/// floor nearest by absolute distance, or stays when the building is quiet.
///
/// Candidate scans start from a best distance of `max_floor` and update only
/// on strict improvement, so the first candidate found at the minimum
/// distance wins and later ties never overwrite it.
pub struct ShortSighted;

impl ShortSighted {
    /// Nearest waiting floor to `car`, or the car's own floor when nobody
    /// is waiting (which reads back as `Stay`).
    fn nearest_waiting_floor(car: &Elevator, waiting: &FloorQueues, max_floor: Floor) -> Floor {
        let mut best_distance = max_floor.0;
        let mut best_target = car.floor;
        for (floor, queue) in waiting.iter() {
            let distance = floor.distance(car.floor);
            if !queue.is_empty() && distance < best_distance {
                best_distance = distance;
                best_target = floor;
            }
        }
        best_target
    }
}

impl MovingAlgorithm for ShortSighted {
    fn move_elevators(
        &mut self,
        elevators: &[Elevator],
        waiting:   &FloorQueues,
        max_floor: Floor,
    ) -> Vec<Direction> {
        elevators
            .iter()
            .map(|car| {
                let destination = match car.passengers.first() {
                    // Head passenger only; the initial best distance of
                    // max_floor admits any target inside the building.
                    Some(head) if head.target.distance(car.floor) < max_floor.0 => head.target,
                    Some(_) => car.floor,
                    None => Self::nearest_waiting_floor(car, waiting, max_floor),
                };
                Direction::toward(car.floor, destination)
            })
            .collect()
    }
}
