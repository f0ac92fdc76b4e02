//! Weight, moment and CG accumulation.

use crate::error::{Result, WbError};
use crate::{AircraftProfile, LoadSheet, LoadTotals, StationLoad, StationTemplate};

/// Sums the empty aircraft and every sheet entry into raw totals.
///
/// Order of operations:
/// 1. Seed totals with the profile's empty weight and published empty moment.
/// 2. For each entry, `weight = quantity × factor`, `moment = weight × arm`.
/// 3. Divide moment by weight for the CG when the weight is positive.
///
/// No rounding is applied. Fails only when the sheet names a station the
/// template does not hold.
pub fn compute(
    profile: &AircraftProfile,
    stations: &StationTemplate,
    sheet: &LoadSheet,
) -> Result<LoadTotals> {
    let mut total_weight = profile.empty_weight_lb();
    let mut total_moment = profile.empty_moment_lb_in();
    let mut loads = Vec::with_capacity(sheet.len());

    for entry in sheet.entries() {
        let Some(station) = stations.get(&entry.station_id) else {
            return Err(WbError::UnknownStation {
                station_id: entry.station_id.0,
            });
        };
        let weight = station.weight_for(entry.quantity);
        let moment = weight * station.arm_in();
        total_weight += weight;
        total_moment += moment;
        loads.push(StationLoad {
            station_id: entry.station_id,
            quantity: entry.quantity,
            weight_lb: weight,
            moment_lb_in: moment,
            max_weight_lb: station.max_weight_lb(),
        });
    }

    let mut totals = LoadTotals::from_totals(total_weight, total_moment);
    totals.stations = loads;
    tracing::debug!(
        tail_number = %profile.tail_number(),
        total_weight_lb = totals.total_weight_lb,
        total_moment_lb_in = totals.total_moment_lb_in,
        cg_in = ?totals.center_of_gravity_in,
        "computed load totals"
    );
    Ok(totals)
}

/// CG for the given totals, or `None` when it cannot be computed: the weight
/// is not a positive finite number, or the quotient is not finite.
pub fn center_of_gravity(total_weight_lb: f64, total_moment_lb_in: f64) -> Option<f64> {
    if !total_weight_lb.is_finite() || total_weight_lb <= 0.0 {
        return None;
    }
    let cg = total_moment_lb_in / total_weight_lb;
    cg.is_finite().then_some(cg)
}

impl LoadTotals {
    /// Totals without a station breakdown, e.g. figures read back from storage.
    pub fn from_totals(total_weight_lb: f64, total_moment_lb_in: f64) -> Self {
        Self {
            total_weight_lb,
            total_moment_lb_in,
            center_of_gravity_in: center_of_gravity(total_weight_lb, total_moment_lb_in),
            stations: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_weight_has_no_cg() {
        assert!(center_of_gravity(0.0, 0.0).is_none());
        assert!(center_of_gravity(0.0, 1200.0).is_none());
    }

    #[test]
    fn nan_weight_has_no_cg() {
        assert!(center_of_gravity(f64::NAN, 10.0).is_none());
    }

    #[test]
    fn non_finite_totals_have_no_cg() {
        assert!(center_of_gravity(f64::INFINITY, f64::INFINITY).is_none());
        assert!(center_of_gravity(f64::INFINITY, 84_170.0).is_none());
        assert!(center_of_gravity(2000.0, f64::NAN).is_none());
        assert!(center_of_gravity(2000.0, f64::NEG_INFINITY).is_none());
        assert!(center_of_gravity(f64::MIN_POSITIVE, f64::MAX).is_none());
    }

    #[test]
    fn positive_weight_divides() {
        let cg = center_of_gravity(2090.0, 84_170.0).unwrap();
        assert!((cg - 40.272_727).abs() < 1e-5);
    }
}
