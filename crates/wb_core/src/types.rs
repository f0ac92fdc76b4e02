//! Type definitions for `wb_core`.
//!
//! ID newtypes, classification enums and the value types returned by a
//! weight-and-balance pass. Units: pounds, inches, pound-inches.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ID newtypes
// ---------------------------------------------------------------------------

macro_rules! string_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

string_id!(TailNumber);
string_id!(StationId);

// ---------------------------------------------------------------------------
// Station enums
// ---------------------------------------------------------------------------

/// The closed set of loading positions an aircraft template can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationKind {
    Seat,
    Baggage,
    Fuel,
}

/// Unit the user enters a quantity in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityUnit {
    Pounds,
    Gallons,
}

impl StationKind {
    pub fn quantity_unit(self) -> QuantityUnit {
        match self {
            StationKind::Fuel => QuantityUnit::Gallons,
            StationKind::Seat | StationKind::Baggage => QuantityUnit::Pounds,
        }
    }
}

impl QuantityUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            QuantityUnit::Pounds => "lb",
            QuantityUnit::Gallons => "gal",
        }
    }
}

// ---------------------------------------------------------------------------
// Classification enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightStatus {
    Under,
    Within,
    Over,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CgStatus {
    Forward,
    Within,
    Aft,
    /// Total weight is zero, so the CG is undefined.
    Unknown,
}

/// Whether a per-station overload gates the overall verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyPolicy {
    /// Station overloads are reported but do not flip `overall_safe`.
    #[default]
    Advisory,
    /// Any station overload makes the loading unsafe.
    Strict,
}

// ---------------------------------------------------------------------------
// Computation results
// ---------------------------------------------------------------------------

/// One station's contribution to the totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationLoad {
    pub station_id: StationId,
    /// As entered, in the station's quantity unit.
    pub quantity: f64,
    pub weight_lb: f64,
    pub moment_lb_in: f64,
    /// Copied from the station so the validator needs only the totals.
    pub max_weight_lb: Option<f64>,
}

/// Raw output of the calculator. Never rounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadTotals {
    pub total_weight_lb: f64,
    pub total_moment_lb_in: f64,
    /// `None` when the total weight is not positive.
    pub center_of_gravity_in: Option<f64>,
    pub stations: Vec<StationLoad>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationViolation {
    pub station_id: StationId,
    pub actual_weight_lb: f64,
    pub max_allowed_lb: f64,
}

/// Distance from the CG to each envelope limit. Negative means outside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CgMargin {
    pub forward_in: f64,
    pub aft_in: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeVerdict {
    pub weight_status: WeightStatus,
    pub cg_status: CgStatus,
    pub station_violations: Vec<StationViolation>,
    pub overall_safe: bool,
    pub policy: SafetyPolicy,
    /// Max gross weight minus total weight. Negative when overweight.
    pub weight_margin_lb: f64,
    pub cg_margin_in: Option<CgMargin>,
}

/// Totals plus their classification. Ephemeral: recompute on every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightBalanceResult {
    pub tail_number: TailNumber,
    pub totals: LoadTotals,
    pub verdict: EnvelopeVerdict,
}
