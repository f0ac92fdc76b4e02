//! Error types for `wb_core`.

use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, WbError>;

/// Input problems rejected by the engine.
///
/// A zero total weight is not an error: it yields an unknown CG in the verdict.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WbError {
    /// Profile constants violate the envelope sanity rules.
    #[error("invalid profile for {tail_number}: {reason}")]
    InvalidProfile { tail_number: String, reason: String },

    /// Station arm, conversion factor or cap is not usable.
    #[error("invalid station '{station_id}': {reason}")]
    InvalidStation { station_id: String, reason: String },

    /// Two stations in one template share an id.
    #[error("duplicate station id '{station_id}'")]
    DuplicateStation { station_id: String },

    /// Negative or non-finite quantity.
    #[error("invalid quantity {quantity} for station '{station_id}'")]
    InvalidEntry { station_id: String, quantity: f64 },

    /// Entry references a station outside the active template.
    #[error("unknown station '{station_id}'")]
    UnknownStation { station_id: String },
}

impl WbError {
    pub(crate) fn invalid_profile(tail_number: &str, reason: impl Into<String>) -> Self {
        Self::InvalidProfile {
            tail_number: tail_number.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_station(station_id: &str, reason: impl Into<String>) -> Self {
        Self::InvalidStation {
            station_id: station_id.to_string(),
            reason: reason.into(),
        }
    }
}
