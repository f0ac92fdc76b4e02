//! Shared test fixtures for `wb_core` and downstream crates.
//!
//! `trainer_aircraft()` is a four-seat trainer with pilot, passenger, baggage
//! and fuel stations. Its envelope figures are the reference scenario used
//! throughout the tests.

use crate::{
    Aircraft, AircraftProfile, LoadSheet, LoadStation, ProfileSpec, StationId, StationKind,
    StationSpec, StationTemplate, TailNumber,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Empty 1680 lb at 39.5 in, max gross 2450 lb, CG limits 35.0–47.3 in.
pub fn trainer_profile_spec() -> ProfileSpec {
    ProfileSpec {
        tail_number: TailNumber::from("N172TR"),
        empty_weight_lb: 1680.0,
        empty_arm_in: 39.5,
        empty_moment_lb_in: 66_360.0,
        max_gross_weight_lb: 2450.0,
        cg_forward_limit_in: 35.0,
        cg_aft_limit_in: 47.3,
    }
}

pub fn trainer_profile() -> AircraftProfile {
    AircraftProfile::new(trainer_profile_spec()).expect("trainer profile is valid")
}

/// pilot @37, passenger @37, baggage @95 capped at 120 lb, fuel @48 at 6 lb/gal.
pub fn trainer_stations() -> StationTemplate {
    let stations: Vec<LoadStation> = vec![
        StationSpec::new("pilot", "Pilot", StationKind::Seat, 37.0),
        StationSpec::new("passenger", "Front passenger", StationKind::Seat, 37.0),
        StationSpec::new("baggage", "Baggage area", StationKind::Baggage, 95.0)
            .with_max_weight(120.0),
        StationSpec::new("fuel", "Fuel", StationKind::Fuel, 48.0).with_conversion(6.0),
    ]
    .into_iter()
    .map(|spec| spec.build().expect("trainer station is valid"))
    .collect();
    StationTemplate::new(stations).expect("trainer station ids are unique")
}

pub fn trainer_aircraft() -> Aircraft {
    Aircraft::new(trainer_profile(), trainer_stations())
}

pub fn sid(id: &str) -> StationId {
    StationId::from(id)
}

/// Builds a sheet from `(station, quantity)` pairs against `stations`.
pub fn sheet_with(stations: &StationTemplate, entries: &[(&str, f64)]) -> LoadSheet {
    let mut sheet = LoadSheet::new();
    for (id, quantity) in entries {
        sheet
            .set_entry(stations, &sid(id), *quantity)
            .expect("fixture entry is valid");
    }
    sheet
}

/// Deterministic RNG seeded with 42.
pub fn make_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}
