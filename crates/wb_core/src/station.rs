//! Loading stations, the per-aircraft station template, and the caller's
//! load sheet of entered quantities.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WbError};
use crate::{QuantityUnit, StationId, StationKind};

fn default_conversion() -> f64 {
    1.0
}

// ---------------------------------------------------------------------------
// Station definition
// ---------------------------------------------------------------------------

/// Unvalidated station definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationSpec {
    pub id: StationId,
    pub display_name: String,
    pub kind: StationKind,
    pub arm_in: f64,
    /// Pounds per entered unit. 1.0 for stations entered directly in pounds.
    #[serde(default = "default_conversion")]
    pub unit_conversion_factor: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_weight_lb: Option<f64>,
}

impl StationSpec {
    pub fn new(id: &str, display_name: &str, kind: StationKind, arm_in: f64) -> Self {
        Self {
            id: StationId::from(id),
            display_name: display_name.to_string(),
            kind,
            arm_in,
            unit_conversion_factor: default_conversion(),
            max_weight_lb: None,
        }
    }

    #[must_use]
    pub fn with_conversion(mut self, factor: f64) -> Self {
        self.unit_conversion_factor = factor;
        self
    }

    #[must_use]
    pub fn with_max_weight(mut self, max_weight_lb: f64) -> Self {
        self.max_weight_lb = Some(max_weight_lb);
        self
    }

    pub fn build(self) -> Result<LoadStation> {
        LoadStation::define(self)
    }
}

/// A validated loading position with a fixed arm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StationSpec", into = "StationSpec")]
pub struct LoadStation {
    spec: StationSpec,
}

impl LoadStation {
    pub fn define(spec: StationSpec) -> Result<Self> {
        let id = spec.id.0.as_str();
        if id.is_empty() {
            return Err(WbError::invalid_station(id, "id must not be empty"));
        }
        if !spec.arm_in.is_finite() {
            return Err(WbError::invalid_station(id, "arm must be finite"));
        }
        if !spec.unit_conversion_factor.is_finite() || spec.unit_conversion_factor <= 0.0 {
            return Err(WbError::invalid_station(
                id,
                format!(
                    "conversion factor {} must be positive",
                    spec.unit_conversion_factor
                ),
            ));
        }
        if let Some(max) = spec.max_weight_lb {
            if !max.is_finite() || max <= 0.0 {
                return Err(WbError::invalid_station(
                    id,
                    format!("station cap {max} must be positive"),
                ));
            }
        }
        Ok(Self { spec })
    }

    pub fn id(&self) -> &StationId {
        &self.spec.id
    }

    pub fn display_name(&self) -> &str {
        &self.spec.display_name
    }

    pub fn kind(&self) -> StationKind {
        self.spec.kind
    }

    pub fn quantity_unit(&self) -> QuantityUnit {
        self.spec.kind.quantity_unit()
    }

    pub fn arm_in(&self) -> f64 {
        self.spec.arm_in
    }

    pub fn unit_conversion_factor(&self) -> f64 {
        self.spec.unit_conversion_factor
    }

    pub fn max_weight_lb(&self) -> Option<f64> {
        self.spec.max_weight_lb
    }

    /// Weight in pounds for a quantity in this station's unit.
    pub fn weight_for(&self, quantity: f64) -> f64 {
        quantity * self.spec.unit_conversion_factor
    }
}

impl TryFrom<StationSpec> for LoadStation {
    type Error = WbError;

    fn try_from(spec: StationSpec) -> Result<Self> {
        Self::define(spec)
    }
}

impl From<LoadStation> for StationSpec {
    fn from(station: LoadStation) -> Self {
        station.spec
    }
}

// ---------------------------------------------------------------------------
// Station template
// ---------------------------------------------------------------------------

/// Ordered set of stations for one aircraft. Ids are unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LoadStation>", into = "Vec<LoadStation>")]
pub struct StationTemplate {
    stations: Vec<LoadStation>,
}

impl StationTemplate {
    pub fn new(stations: Vec<LoadStation>) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for station in &stations {
            if !seen.insert(station.id()) {
                return Err(WbError::DuplicateStation {
                    station_id: station.id().0.clone(),
                });
            }
        }
        Ok(Self { stations })
    }

    pub fn get(&self, id: &StationId) -> Option<&LoadStation> {
        self.stations.iter().find(|s| s.id() == id)
    }

    pub fn contains(&self, id: &StationId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoadStation> {
        self.stations.iter()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl TryFrom<Vec<LoadStation>> for StationTemplate {
    type Error = WbError;

    fn try_from(stations: Vec<LoadStation>) -> Result<Self> {
        Self::new(stations)
    }
}

impl From<StationTemplate> for Vec<LoadStation> {
    fn from(template: StationTemplate) -> Self {
        template.stations
    }
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadEntry {
    pub station_id: StationId,
    /// In the station's quantity unit.
    pub quantity: f64,
}

/// Entered quantities, at most one per station, iterated in station-id order.
///
/// Only [`LoadSheet::set_entry`] adds values, so every quantity is finite and
/// non-negative and every id was present in the template it was set against.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadSheet {
    entries: BTreeMap<StationId, f64>,
}

impl LoadSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `quantity` for `station_id`. On error the sheet is unchanged.
    pub fn set_entry(
        &mut self,
        stations: &StationTemplate,
        station_id: &StationId,
        quantity: f64,
    ) -> Result<LoadEntry> {
        if !quantity.is_finite() || quantity < 0.0 {
            return Err(WbError::InvalidEntry {
                station_id: station_id.0.clone(),
                quantity,
            });
        }
        if !stations.contains(station_id) {
            return Err(WbError::UnknownStation {
                station_id: station_id.0.clone(),
            });
        }
        self.entries.insert(station_id.clone(), quantity);
        Ok(LoadEntry {
            station_id: station_id.clone(),
            quantity,
        })
    }

    /// Removes the entry, returning its previous quantity.
    pub fn clear_entry(&mut self, station_id: &StationId) -> Option<f64> {
        self.entries.remove(station_id)
    }

    pub fn quantity(&self, station_id: &StationId) -> Option<f64> {
        self.entries.get(station_id).copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = LoadEntry> + '_ {
        self.entries.iter().map(|(station_id, quantity)| LoadEntry {
            station_id: station_id.clone(),
            quantity: *quantity,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
