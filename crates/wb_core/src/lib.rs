//! `wb_core`: aircraft weight-and-balance engine.
//!
//! No IO, no hidden state. Every pass is a pure function of the profile, the
//! station template and the load sheet handed in.

mod aircraft;
mod calculator;
mod envelope;
pub mod error;
mod profile;
mod station;
mod types;
mod validator;

#[cfg(any(test, feature = "test-support"))]
pub mod test_fixtures;

pub use aircraft::Aircraft;
pub use calculator::{center_of_gravity, compute};
pub use envelope::{classify_cg, classify_weight, evaluate};
pub use error::{Result, WbError};
pub use profile::{AircraftProfile, ProfileSpec, EMPTY_MOMENT_TOLERANCE};
pub use station::{LoadEntry, LoadSheet, LoadStation, StationSpec, StationTemplate};
pub use types::*;
pub use validator::validate_stations;

#[cfg(test)]
mod tests;
