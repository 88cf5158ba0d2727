//! First-passenger-first dispatch.

use lift_core::Floor;
use lift_entity::{Elevator, FloorQueues};

use crate::{Direction, MovingAlgorithm};

/// Serves whoever boarded first.
///
/// A loaded car heads for its head passenger's target (a car already there
/// stays put until the disembark stage clears it).  An empty car scans the
/// waiting registry from the ground up and heads for the first floor with
/// anyone on it; with nobody waiting anywhere it stays.
pub struct PushyPassenger;

impl MovingAlgorithm for PushyPassenger {
    fn move_elevators(
        &mut self,
        elevators: &[Elevator],
        waiting:   &FloorQueues,
        _max_floor: Floor,
    ) -> Vec<Direction> {
        elevators
            .iter()
            .map(|car| match car.passengers.first() {
                Some(head) => Direction::toward(car.floor, head.target),
                None => waiting
                    .iter()
                    .find(|(_, queue)| !queue.is_empty())
                    .map_or(Direction::Stay, |(floor, _)| {
                        Direction::toward(car.floor, floor)
                    }),
            })
            .collect()
    }
}
