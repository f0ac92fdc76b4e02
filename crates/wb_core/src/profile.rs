//! Certified envelope constants for one aircraft.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WbError};
use crate::TailNumber;

/// Relative tolerance between the published empty moment and
/// `empty_weight × empty_arm` before a mismatch is logged.
pub const EMPTY_MOMENT_TOLERANCE: f64 = 0.005;

/// Floor on the absolute tolerance, lb·in.
const EMPTY_MOMENT_TOLERANCE_FLOOR: f64 = 1.0;

/// Unvalidated profile constants, as published in the aircraft's W&B record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSpec {
    pub tail_number: TailNumber,
    pub empty_weight_lb: f64,
    pub empty_arm_in: f64,
    pub empty_moment_lb_in: f64,
    pub max_gross_weight_lb: f64,
    pub cg_forward_limit_in: f64,
    pub cg_aft_limit_in: f64,
}

/// Validated, immutable envelope profile.
///
/// The supplied empty moment is used as-is; it is never re-derived from the
/// empty weight and arm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileSpec", into = "ProfileSpec")]
pub struct AircraftProfile {
    spec: ProfileSpec,
}

impl AircraftProfile {
    pub fn new(spec: ProfileSpec) -> Result<Self> {
        let tail = spec.tail_number.0.as_str();
        let values = [
            spec.empty_weight_lb,
            spec.empty_arm_in,
            spec.empty_moment_lb_in,
            spec.max_gross_weight_lb,
            spec.cg_forward_limit_in,
            spec.cg_aft_limit_in,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(WbError::invalid_profile(tail, "all constants must be finite"));
        }
        if spec.empty_weight_lb <= 0.0 {
            return Err(WbError::invalid_profile(
                tail,
                format!("empty weight {} must be positive", spec.empty_weight_lb),
            ));
        }
        if spec.max_gross_weight_lb <= spec.empty_weight_lb {
            return Err(WbError::invalid_profile(
                tail,
                format!(
                    "max gross weight {} must exceed empty weight {}",
                    spec.max_gross_weight_lb, spec.empty_weight_lb
                ),
            ));
        }
        if spec.cg_forward_limit_in >= spec.cg_aft_limit_in {
            return Err(WbError::invalid_profile(
                tail,
                format!(
                    "forward CG limit {} must be ahead of aft limit {}",
                    spec.cg_forward_limit_in, spec.cg_aft_limit_in
                ),
            ));
        }

        let profile = Self { spec };
        if profile.empty_moment_mismatch() {
            tracing::warn!(
                tail_number = %profile.spec.tail_number,
                supplied = profile.spec.empty_moment_lb_in,
                derived = profile.derived_empty_moment(),
                "published empty moment differs from empty weight × arm; using published value"
            );
        }
        Ok(profile)
    }

    pub fn tail_number(&self) -> &TailNumber {
        &self.spec.tail_number
    }

    pub fn empty_weight_lb(&self) -> f64 {
        self.spec.empty_weight_lb
    }

    pub fn empty_arm_in(&self) -> f64 {
        self.spec.empty_arm_in
    }

    pub fn empty_moment_lb_in(&self) -> f64 {
        self.spec.empty_moment_lb_in
    }

    pub fn max_gross_weight_lb(&self) -> f64 {
        self.spec.max_gross_weight_lb
    }

    pub fn cg_forward_limit_in(&self) -> f64 {
        self.spec.cg_forward_limit_in
    }

    pub fn cg_aft_limit_in(&self) -> f64 {
        self.spec.cg_aft_limit_in
    }

    /// `empty_weight × empty_arm`, for cross-checking the published moment.
    pub fn derived_empty_moment(&self) -> f64 {
        self.spec.empty_weight_lb * self.spec.empty_arm_in
    }

    /// Absolute difference between the published and derived empty moment.
    pub fn empty_moment_discrepancy(&self) -> f64 {
        (self.spec.empty_moment_lb_in - self.derived_empty_moment()).abs()
    }

    /// True when the discrepancy exceeds [`EMPTY_MOMENT_TOLERANCE`].
    pub fn empty_moment_mismatch(&self) -> bool {
        let allowed = (self.derived_empty_moment().abs() * EMPTY_MOMENT_TOLERANCE)
            .max(EMPTY_MOMENT_TOLERANCE_FLOOR);
        self.empty_moment_discrepancy() > allowed
    }

    pub fn spec(&self) -> &ProfileSpec {
        &self.spec
    }
}

impl TryFrom<ProfileSpec> for AircraftProfile {
    type Error = WbError;

    fn try_from(spec: ProfileSpec) -> Result<Self> {
        Self::new(spec)
    }
}

impl From<AircraftProfile> for ProfileSpec {
    fn from(profile: AircraftProfile) -> Self {
        profile.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::trainer_profile_spec;

    #[test]
    fn accepts_trainer_profile() {
        let profile = AircraftProfile::new(trainer_profile_spec()).unwrap();
        assert_eq!(profile.tail_number().0, "N172TR");
        assert!(!profile.empty_moment_mismatch());
    }

    #[test]
    fn rejects_non_positive_empty_weight() {
        let mut spec = trainer_profile_spec();
        spec.empty_weight_lb = 0.0;
        let err = AircraftProfile::new(spec).unwrap_err();
        assert!(matches!(err, WbError::InvalidProfile { .. }));
    }

    #[test]
    fn rejects_max_gross_not_above_empty() {
        let mut spec = trainer_profile_spec();
        spec.max_gross_weight_lb = spec.empty_weight_lb;
        let err = AircraftProfile::new(spec).unwrap_err();
        assert!(err.to_string().contains("max gross weight"));
    }

    #[test]
    fn rejects_inverted_cg_limits() {
        let mut spec = trainer_profile_spec();
        spec.cg_forward_limit_in = 47.3;
        spec.cg_aft_limit_in = 35.0;
        let err = AircraftProfile::new(spec).unwrap_err();
        assert!(err.to_string().contains("forward CG limit"));
    }

    #[test]
    fn rejects_equal_cg_limits() {
        let mut spec = trainer_profile_spec();
        spec.cg_aft_limit_in = spec.cg_forward_limit_in;
        assert!(AircraftProfile::new(spec).is_err());
    }

    #[test]
    fn rejects_nan_constant() {
        let mut spec = trainer_profile_spec();
        spec.empty_arm_in = f64::NAN;
        assert!(AircraftProfile::new(spec).is_err());
    }

    #[test]
    fn empty_arm_outside_envelope_is_allowed() {
        let mut spec = trainer_profile_spec();
        spec.empty_arm_in = 30.0;
        spec.empty_moment_lb_in = spec.empty_weight_lb * 30.0;
        assert!(AircraftProfile::new(spec).is_ok());
    }

    #[test]
    fn published_moment_is_trusted_on_mismatch() {
        let mut spec = trainer_profile_spec();
        spec.empty_moment_lb_in = 70_000.0;
        let profile = AircraftProfile::new(spec).unwrap();
        assert!(profile.empty_moment_mismatch());
        assert!((profile.empty_moment_lb_in() - 70_000.0).abs() < 1e-9);
        assert!((profile.empty_moment_discrepancy() - 3_640.0).abs() < 1e-9);
    }

    #[test]
    fn small_rounding_in_published_moment_is_tolerated() {
        let mut spec = trainer_profile_spec();
        spec.empty_moment_lb_in = 66_400.0;
        let profile = AircraftProfile::new(spec).unwrap();
        assert!(!profile.empty_moment_mismatch());
    }

    #[test]
    fn deserialization_runs_validation() {
        let json = r#"{
            "tail_number": "N1",
            "empty_weight_lb": 1680.0,
            "empty_arm_in": 39.5,
            "empty_moment_lb_in": 66360.0,
            "max_gross_weight_lb": 1500.0,
            "cg_forward_limit_in": 35.0,
            "cg_aft_limit_in": 47.3
        }"#;
        let parsed: std::result::Result<AircraftProfile, _> = serde_json::from_str(json);
        assert!(parsed.is_err());
    }
}
