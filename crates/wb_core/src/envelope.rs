//! Envelope classification and the overall safety verdict.
//!
//! Limits are inclusive: a value sitting exactly on a limit is inside the
//! legal envelope.

use crate::validator::validate_stations;
use crate::{
    AircraftProfile, CgMargin, CgStatus, EnvelopeVerdict, LoadTotals, SafetyPolicy, WeightStatus,
};

/// A weight that is not a number never classifies as Within.
pub fn classify_weight(profile: &AircraftProfile, total_weight_lb: f64) -> WeightStatus {
    if total_weight_lb.is_nan() || total_weight_lb > profile.max_gross_weight_lb() {
        WeightStatus::Over
    } else if total_weight_lb < profile.empty_weight_lb() {
        WeightStatus::Under
    } else {
        WeightStatus::Within
    }
}

pub fn classify_cg(profile: &AircraftProfile, cg_in: Option<f64>) -> CgStatus {
    match cg_in {
        None => CgStatus::Unknown,
        Some(cg) if !cg.is_finite() => CgStatus::Unknown,
        Some(cg) if cg < profile.cg_forward_limit_in() => CgStatus::Forward,
        Some(cg) if cg > profile.cg_aft_limit_in() => CgStatus::Aft,
        Some(_) => CgStatus::Within,
    }
}

/// Classifies `totals` against the profile's envelope.
///
/// Pure: the same profile and totals always give the same verdict.
pub fn evaluate(
    profile: &AircraftProfile,
    totals: &LoadTotals,
    policy: SafetyPolicy,
) -> EnvelopeVerdict {
    let weight_status = classify_weight(profile, totals.total_weight_lb);
    let cg_status = classify_cg(profile, totals.center_of_gravity_in);
    let station_violations = validate_stations(totals);

    let envelope_ok = weight_status == WeightStatus::Within && cg_status == CgStatus::Within;
    let overall_safe = match policy {
        SafetyPolicy::Advisory => envelope_ok,
        SafetyPolicy::Strict => envelope_ok && station_violations.is_empty(),
    };

    let cg_margin_in = totals.center_of_gravity_in.map(|cg| CgMargin {
        forward_in: cg - profile.cg_forward_limit_in(),
        aft_in: profile.cg_aft_limit_in() - cg,
    });

    tracing::debug!(
        tail_number = %profile.tail_number(),
        ?weight_status,
        ?cg_status,
        violations = station_violations.len(),
        overall_safe,
        "evaluated envelope"
    );

    EnvelopeVerdict {
        weight_status,
        cg_status,
        station_violations,
        overall_safe,
        policy,
        weight_margin_lb: profile.max_gross_weight_lb() - totals.total_weight_lb,
        cg_margin_in,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::trainer_profile;

    #[test]
    fn weight_bands() {
        let profile = trainer_profile();
        assert_eq!(classify_weight(&profile, 1679.9), WeightStatus::Under);
        assert_eq!(classify_weight(&profile, 1680.0), WeightStatus::Within);
        assert_eq!(classify_weight(&profile, 2450.0), WeightStatus::Within);
        assert_eq!(classify_weight(&profile, 2450.1), WeightStatus::Over);
    }

    #[test]
    fn cg_bands() {
        let profile = trainer_profile();
        assert_eq!(classify_cg(&profile, None), CgStatus::Unknown);
        assert_eq!(classify_cg(&profile, Some(34.99)), CgStatus::Forward);
        assert_eq!(classify_cg(&profile, Some(35.0)), CgStatus::Within);
        assert_eq!(classify_cg(&profile, Some(47.3)), CgStatus::Within);
        assert_eq!(classify_cg(&profile, Some(47.31)), CgStatus::Aft);
    }

    #[test]
    fn non_finite_values_never_classify_within() {
        let profile = trainer_profile();
        assert_eq!(classify_weight(&profile, f64::NAN), WeightStatus::Over);
        assert_eq!(classify_weight(&profile, f64::INFINITY), WeightStatus::Over);
        assert_eq!(classify_weight(&profile, f64::NEG_INFINITY), WeightStatus::Under);
        assert_eq!(classify_cg(&profile, Some(f64::NAN)), CgStatus::Unknown);
        assert_eq!(classify_cg(&profile, Some(f64::INFINITY)), CgStatus::Unknown);
    }

    #[test]
    fn nan_stored_moment_is_unsafe() {
        let profile = trainer_profile();
        let totals = LoadTotals::from_totals(2000.0, f64::NAN);
        assert!(totals.center_of_gravity_in.is_none());
        for policy in [SafetyPolicy::Advisory, SafetyPolicy::Strict] {
            let verdict = evaluate(&profile, &totals, policy);
            assert_eq!(verdict.cg_status, CgStatus::Unknown);
            assert!(!verdict.overall_safe);
            assert!(verdict.cg_margin_in.is_none());
        }
    }

    #[test]
    fn margins_follow_totals() {
        let profile = trainer_profile();
        let totals = LoadTotals::from_totals(2090.0, 84_170.0);
        let verdict = evaluate(&profile, &totals, SafetyPolicy::Advisory);
        assert!((verdict.weight_margin_lb - 360.0).abs() < 1e-9);
        let margin = verdict.cg_margin_in.unwrap();
        assert!((margin.forward_in - 5.272_727).abs() < 1e-5);
        assert!((margin.aft_in - 7.027_273).abs() < 1e-5);
    }

    #[test]
    fn unknown_cg_has_no_margin() {
        let profile = trainer_profile();
        let verdict = evaluate(&profile, &LoadTotals::from_totals(0.0, 0.0), SafetyPolicy::Advisory);
        assert!(verdict.cg_margin_in.is_none());
        assert!(!verdict.overall_safe);
    }
}
