//! An aircraft's envelope and station template, with the compute-then-evaluate
//! pass callers run after every entry change.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::{
    compute, evaluate, AircraftProfile, LoadEntry, LoadSheet, SafetyPolicy, StationId,
    StationTemplate, TailNumber, WeightBalanceResult,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    profile: AircraftProfile,
    stations: StationTemplate,
}

impl Aircraft {
    pub fn new(profile: AircraftProfile, stations: StationTemplate) -> Self {
        Self { profile, stations }
    }

    pub fn tail_number(&self) -> &TailNumber {
        self.profile.tail_number()
    }

    pub fn profile(&self) -> &AircraftProfile {
        &self.profile
    }

    pub fn stations(&self) -> &StationTemplate {
        &self.stations
    }

    /// Sets one entry on `sheet` against this aircraft's template.
    pub fn set_entry(
        &self,
        sheet: &mut LoadSheet,
        station_id: &StationId,
        quantity: f64,
    ) -> Result<LoadEntry> {
        sheet.set_entry(&self.stations, station_id, quantity)
    }

    /// Computes totals for `sheet` and classifies them.
    pub fn calculate(&self, sheet: &LoadSheet, policy: SafetyPolicy) -> Result<WeightBalanceResult> {
        let totals = compute(&self.profile, &self.stations, sheet)?;
        let verdict = evaluate(&self.profile, &totals, policy);
        Ok(WeightBalanceResult {
            tail_number: self.profile.tail_number().clone(),
            totals,
            verdict,
        })
    }
}
