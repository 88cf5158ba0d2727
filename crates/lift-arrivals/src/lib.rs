//! `lift-arrivals` — arrival generation strategies.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`generator`] | `ArrivalGenerator` trait                                |
//! | [`random`]    | `RandomArrivals` — uniform random start/target pairs    |
//! | [`file`]      | `FileArrivals` + `ArrivalRecord` — scripted replay      |
//! | [`loader`]    | CSV loader producing `ArrivalRecord`s                   |
//! | [`error`]     | `ArrivalError`, `ArrivalResult<T>`                      |
//!
//! # Design notes
//!
//! Generators return a [`FloorQueues`] batch that covers every floor of the
//! building (empty queues included), so the simulation can merge it into the
//! waiting registry without missing-key checks.  Generators hold only their
//! own configuration (and RNG state); they never see simulation state.

pub mod error;
pub mod file;
pub mod generator;
pub mod loader;
pub mod random;


pub use error::{ArrivalError, ArrivalResult};
pub use file::{ArrivalRecord, FileArrivals};
pub use generator::ArrivalGenerator;
pub use loader::{load_records_csv, load_records_reader};
pub use random::RandomArrivals;
