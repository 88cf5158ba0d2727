//! The `Sim` struct and its round loop.

use lift_arrivals::ArrivalGenerator;
use lift_core::{Floor, Round, SimConfig};
use lift_dispatch::{Direction, MovingAlgorithm};
use lift_entity::{Elevator, FloorQueues, Person};

use crate::{RunStats, SimError, SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim<A, M>` exclusively owns all mutable state for one run — the elevator
/// fleet and the waiting registry — and drives the five-stage round loop
/// described in the [crate docs](crate).  The strategies it holds are
/// invoked synchronously once per round and see a stable snapshot each time.
///
/// Create via [`Sim::new`]; drive with [`run`][Self::run].
pub struct Sim<A: ArrivalGenerator, M: MovingAlgorithm> {
    /// Building and fleet configuration.
    pub config: SimConfig,

    /// The round about to be executed (starts at 0).
    pub round: Round,

    /// The elevator fleet.  Order is fixed and meaningful: boarding resolves
    /// ties by list position, and dispatch output is index-aligned.
    pub elevators: Vec<Elevator>,

    /// People not yet aboard, queued per floor in arrival order.
    pub waiting: FloorQueues,

    /// Accumulated statistics.
    pub stats: RunStats,

    arrivals: A,
    dispatch: M,
}

impl<A: ArrivalGenerator, M: MovingAlgorithm> Sim<A, M> {
    // ── Construction ──────────────────────────────────────────────────────

    /// Validate the configuration and return a ready-to-run simulation.
    ///
    /// Every car starts empty on the ground floor and the registry starts
    /// empty.  Fails fast on an invalid `config` or on an arrival generator
    /// built for a different building height.
    pub fn new(config: SimConfig, arrivals: A, dispatch: M) -> SimResult<Self> {
        config.validate()?;

        let got = arrivals.max_floor();
        if got != config.max_floor() {
            return Err(SimError::FloorMismatch {
                expected: config.num_floors,
                got:      got.0,
            });
        }

        let elevators = (0..config.num_elevators)
            .map(|_| Elevator::new(Floor::GROUND, config.elevator_capacity))
            .collect();
        let waiting = FloorQueues::new(config.max_floor());

        Ok(Self {
            config,
            round: Round::ZERO,
            elevators,
            waiting,
            stats: RunStats::new(),
            arrivals,
            dispatch,
        })
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run `num_rounds` rounds and return the final statistics snapshot.
    ///
    /// `num_rounds` must be at least 1.  Calls observer hooks at every
    /// sub-stage; use [`NoopObserver`][crate::NoopObserver] if you don't
    /// need callbacks.
    pub fn run<O: SimObserver>(&mut self, num_rounds: u64, observer: &mut O) -> SimResult<RunStats> {
        if num_rounds < 1 {
            return Err(SimError::Config("num_rounds must be at least 1".into()));
        }

        for _ in 0..num_rounds {
            let round = self.round;
            observer.on_round_start(round);

            self.generate_arrivals(round, observer);
            self.handle_disembark(observer);
            self.handle_boarding(observer);
            self.move_elevators(observer);
            self.age_everyone();

            self.stats.rounds += 1;
            observer.on_round_end(round, &self.stats);
            self.round.advance();
        }

        observer.on_sim_end(&self.stats);
        Ok(self.stats.clone())
    }

    // ── Stage 1: arrivals ─────────────────────────────────────────────────

    fn generate_arrivals<O: SimObserver>(&mut self, round: Round, observer: &mut O) {
        let batch = self.arrivals.generate(round);
        observer.on_arrivals(round, &batch);
        self.stats.total_arrivals += self.waiting.merge(batch) as u64;
    }

    // ── Stage 2: disembark ────────────────────────────────────────────────

    /// Every passenger at their target floor leaves, all in the same round.
    /// The list is rebuilt rather than mutated mid-scan, which keeps the
    /// remaining riders in boarding order.
    fn handle_disembark<O: SimObserver>(&mut self, observer: &mut O) {
        for (idx, car) in self.elevators.iter_mut().enumerate() {
            for passenger in std::mem::take(&mut car.passengers) {
                if passenger.target == car.floor {
                    self.stats.record_completion(passenger.wait_time);
                    observer.on_disembark(&passenger, idx);
                } else {
                    car.passengers.push(passenger);
                }
            }
        }
    }

    // ── Stage 3: boarding ─────────────────────────────────────────────────

    /// Floor by floor from the ground up, arrival order within a floor.
    /// Each person takes the first car in fleet order sitting on their
    /// start floor with room; everyone left over keeps their place in the
    /// rebuilt queue.
    fn handle_boarding<O: SimObserver>(&mut self, observer: &mut O) {
        for slot in 1..=self.config.num_floors {
            let floor = Floor(slot);
            let queue = self.waiting.take(floor);
            if queue.is_empty() {
                self.waiting.restore(floor, queue);
                continue;
            }

            let mut left_behind = Vec::new();
            for person in queue {
                if let Some(person) = self.board_one(person, observer) {
                    left_behind.push(person);
                }
            }
            self.waiting.restore(floor, left_behind);
        }
    }

    /// Try to board `person`; gives the person back when no car on their
    /// start floor has room.
    ///
    /// A person boarding a car that already sits on their target floor
    /// (possible only for scripted data with start == target) completes on
    /// the spot instead of occupying a seat for zero rounds.
    fn board_one<O: SimObserver>(&mut self, person: Person, observer: &mut O) -> Option<Person> {
        for (idx, car) in self.elevators.iter_mut().enumerate() {
            if car.floor == person.start && car.has_room() {
                observer.on_board(&person, idx);
                if person.target == car.floor {
                    self.stats.record_completion(person.wait_time);
                    observer.on_disembark(&person, idx);
                } else {
                    car.passengers.push(person);
                }
                return None;
            }
        }
        Some(person)
    }

    // ── Stage 4: move ─────────────────────────────────────────────────────

    fn move_elevators<O: SimObserver>(&mut self, observer: &mut O) {
        let directions =
            self.dispatch
                .move_elevators(&self.elevators, &self.waiting, self.config.max_floor());
        debug_assert_eq!(directions.len(), self.elevators.len());
        observer.on_moves(&self.elevators, &directions);

        let max_floor = self.config.max_floor();
        for (car, dir) in self.elevators.iter_mut().zip(&directions) {
            // The dispatch boundary contract guarantees in-bounds output.
            debug_assert!(dir.stays_in_bounds(car.floor, max_floor));
            match dir {
                Direction::Up => car.floor = car.floor.above(),
                Direction::Down => car.floor = car.floor.below(),
                Direction::Stay => {}
            }
        }
    }

    // ── Stage 5: wait-time update ─────────────────────────────────────────

    /// People who left this round are already gone from both collections,
    /// so they never see this increment.
    fn age_everyone(&mut self) {
        for person in self.waiting.people_mut() {
            person.wait_time += 1;
        }
        for car in &mut self.elevators {
            for passenger in &mut car.passengers {
                passenger.wait_time += 1;
            }
        }
    }
}
