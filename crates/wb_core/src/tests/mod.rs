use super::*;
use crate::test_fixtures::{make_rng, sheet_with, sid, trainer_aircraft, trainer_profile, trainer_stations};


// --- Shared test helpers ------------------------------------------------

fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-6
}

/// Pilot 170 lb, fuel 40 gal.
fn reference_sheet(stations: &StationTemplate) -> LoadSheet {
    sheet_with(stations, &[("pilot", 170.0), ("fuel", 40.0)])
}

/// Pilot 250 lb, fuel 56 gal, baggage 150 lb (30 lb over its cap).
fn overloaded_baggage_sheet(stations: &StationTemplate) -> LoadSheet {
    sheet_with(
        stations,
        &[("pilot", 250.0), ("fuel", 56.0), ("baggage", 150.0)],
    )
}
