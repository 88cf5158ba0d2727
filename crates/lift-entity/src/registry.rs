//! Per-floor FIFO queues of people.

use lift_core::Floor;

use crate::Person;

/// A dense mapping from floor to the people queued there, oldest first.
///
/// Used both for the simulation's waiting registry and for per-round arrival
/// batches.  Every floor from 1 to `max_floor` is always present — empty
/// queues are represented, never omitted — so callers can merge and scan
/// without missing-key checks.
#[derive(Clone, Debug)]
pub struct FloorQueues {
    queues: Vec<Vec<Person>>,
}

impl FloorQueues {
    /// Empty queues for every floor of a building topping out at `max_floor`.
    pub fn new(max_floor: Floor) -> Self {
        Self {
            queues: vec![Vec::new(); max_floor.0 as usize],
        }
    }

    /// The highest floor represented.
    #[inline]
    pub fn max_floor(&self) -> Floor {
        Floor(self.queues.len() as u32)
    }

    /// People queued at `floor`, oldest first.
    #[inline]
    pub fn queue(&self, floor: Floor) -> &[Person] {
        &self.queues[floor.index()]
    }

    /// Append `person` to the back of `floor`'s queue.
    pub fn push(&mut self, floor: Floor, person: Person) {
        self.queues[floor.index()].push(person);
    }

    /// Remove and return the entire queue at `floor`, leaving it empty.
    ///
    /// Pairs with [`restore`][Self::restore] for filter-while-collect passes
    /// that must preserve arrival order without removing mid-iteration.
    pub fn take(&mut self, floor: Floor) -> Vec<Person> {
        std::mem::take(&mut self.queues[floor.index()])
    }

    /// Put a rebuilt queue back at `floor`.
    pub fn restore(&mut self, floor: Floor, queue: Vec<Person>) {
        self.queues[floor.index()] = queue;
    }

    /// Append every queue of `batch` onto this registry, floor by floor,
    /// preserving arrival order.  Returns how many people were merged.
    ///
    /// Both sides must cover the same floors.
    pub fn merge(&mut self, batch: FloorQueues) -> usize {
        debug_assert_eq!(self.queues.len(), batch.queues.len());
        let mut merged = 0;
        for (mine, theirs) in self.queues.iter_mut().zip(batch.queues) {
            merged += theirs.len();
            mine.extend(theirs);
        }
        merged
    }

    /// Iterate floors in ascending order with their queues.
    pub fn iter(&self) -> impl Iterator<Item = (Floor, &[Person])> {
        self.queues
            .iter()
            .enumerate()
            .map(|(i, q)| (Floor(i as u32 + 1), q.as_slice()))
    }

    /// Mutable access to every queued person, in floor then arrival order.
    pub fn people_mut(&mut self) -> impl Iterator<Item = &mut Person> {
        self.queues.iter_mut().flatten()
    }

    /// Total people across all floors.
    pub fn total(&self) -> usize {
        self.queues.iter().map(Vec::len).sum()
    }

    /// True when nobody is queued anywhere.
    pub fn is_empty(&self) -> bool {
        self.queues.iter().all(Vec::is_empty)
    }
}
