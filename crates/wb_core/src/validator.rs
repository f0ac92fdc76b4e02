//! Per-station weight caps.

use crate::{LoadTotals, StationViolation};

/// Every station load heavier than its own cap, in breakdown order.
///
/// A load exactly at its cap is allowed.
pub fn validate_stations(totals: &LoadTotals) -> Vec<StationViolation> {
    totals
        .stations
        .iter()
        .filter_map(|load| {
            let max = load.max_weight_lb?;
            (load.weight_lb > max).then(|| StationViolation {
                station_id: load.station_id.clone(),
                actual_weight_lb: load.weight_lb,
                max_allowed_lb: max,
            })
        })
        .collect()
}
