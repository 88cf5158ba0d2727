//! Unit tests for lift-entity.

use lift_core::Floor;

use crate::{Elevator, FloorQueues, Person};

fn person(start: u32, target: u32) -> Person {
    Person::new(Floor(start), Floor(target))
}

#[cfg(test)]
mod person_tests {
    use super::*;

    #[test]
    fn starts_with_zero_wait() {
        let p = person(1, 4);
        assert_eq!(p.wait_time, 0);
        assert_eq!(p.start, Floor(1));
        assert_eq!(p.target, Floor(4));
    }

    #[test]
    fn anger_level_step_function() {
        let mut p = person(1, 2);
        // Exact bucket boundaries from the anger table.
        for (wait, level) in [
            (0, 0),
            (2, 0),
            (3, 1),
            (4, 1),
            (5, 2),
            (6, 2),
            (7, 3),
            (8, 3),
            (9, 4),
            (100, 4),
        ] {
            p.wait_time = wait;
            assert_eq!(p.anger_level(), level, "wait_time={wait}");
        }
    }
}

#[cfg(test)]
mod elevator_tests {
    use super::*;

    #[test]
    fn new_car_is_empty_with_room() {
        let car = Elevator::new(Floor::GROUND, 3);
        assert!(car.is_empty());
        assert!(car.has_room());
        assert_eq!(car.capacity(), 3);
        assert_eq!(car.fullness(), 0.0);
    }

    #[test]
    fn fullness_tracks_occupancy() {
        let mut car = Elevator::new(Floor::GROUND, 2);
        car.passengers.push(person(1, 3));
        assert_eq!(car.fullness(), 0.5);
        assert!(car.has_room());

        car.passengers.push(person(1, 4));
        assert_eq!(car.fullness(), 1.0);
        assert!(!car.has_room());
    }
}

#[cfg(test)]
mod registry_tests {
    use super::*;

    #[test]
    fn covers_every_floor_from_construction() {
        let queues = FloorQueues::new(Floor(4));
        assert_eq!(queues.max_floor(), Floor(4));
        assert_eq!(queues.iter().count(), 4);
        assert!(queues.iter().all(|(_, q)| q.is_empty()));
        assert!(queues.is_empty());
        assert_eq!(queues.total(), 0);
    }

    #[test]
    fn push_preserves_arrival_order() {
        let mut queues = FloorQueues::new(Floor(3));
        queues.push(Floor(2), person(2, 1));
        queues.push(Floor(2), person(2, 3));
        let targets: Vec<Floor> = queues.queue(Floor(2)).iter().map(|p| p.target).collect();
        assert_eq!(targets, vec![Floor(1), Floor(3)]);
    }

    #[test]
    fn merge_appends_and_counts() {
        let mut waiting = FloorQueues::new(Floor(3));
        waiting.push(Floor(1), person(1, 2));

        let mut batch = FloorQueues::new(Floor(3));
        batch.push(Floor(1), person(1, 3));
        batch.push(Floor(3), person(3, 1));

        assert_eq!(waiting.merge(batch), 2);
        assert_eq!(waiting.total(), 3);
        // Existing people stay ahead of merged ones on the same floor.
        let targets: Vec<Floor> = waiting.queue(Floor(1)).iter().map(|p| p.target).collect();
        assert_eq!(targets, vec![Floor(2), Floor(3)]);
    }

    #[test]
    fn take_and_restore_round_trip() {
        let mut queues = FloorQueues::new(Floor(2));
        queues.push(Floor(1), person(1, 2));

        let taken = queues.take(Floor(1));
        assert_eq!(taken.len(), 1);
        assert!(queues.queue(Floor(1)).is_empty());

        queues.restore(Floor(1), taken);
        assert_eq!(queues.queue(Floor(1)).len(), 1);
    }

    #[test]
    fn people_mut_visits_everyone() {
        let mut queues = FloorQueues::new(Floor(3));
        queues.push(Floor(1), person(1, 2));
        queues.push(Floor(3), person(3, 2));

        for p in queues.people_mut() {
            p.wait_time += 1;
        }
        assert!(queues.iter().flat_map(|(_, q)| q).all(|p| p.wait_time == 1));
    }

    #[test]
    fn iter_ascends_floors() {
        let queues = FloorQueues::new(Floor(5));
        let floors: Vec<Floor> = queues.iter().map(|(f, _)| f).collect();
        assert_eq!(
            floors,
            vec![Floor(1), Floor(2), Floor(3), Floor(4), Floor(5)]
        );
    }
}
