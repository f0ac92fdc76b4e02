//! Fleet content loading shared by the CLI and any other front end.
//!
//! Aircraft live in `<content_dir>/aircraft.json`; load sheets are flat JSON
//! objects mapping station ids to entered quantities.

use anyhow::{bail, ensure, Context, Result};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use wb_core::{Aircraft, LoadSheet, StationId, TailNumber};

#[derive(Deserialize)]
struct AircraftFile {
    content_version: String,
    aircraft: Vec<Aircraft>,
}

/// Every aircraft the operator flies, keyed by tail number.
#[derive(Debug, Clone)]
pub struct Fleet {
    pub content_version: String,
    pub aircraft: Vec<Aircraft>,
}

impl Fleet {
    pub fn get(&self, tail_number: &TailNumber) -> Option<&Aircraft> {
        self.aircraft
            .iter()
            .find(|a| a.tail_number() == tail_number)
    }

    /// Case-insensitive lookup, for tail numbers typed by a user.
    pub fn find(&self, tail_number: &str) -> Result<&Aircraft> {
        self.aircraft
            .iter()
            .find(|a| a.tail_number().0.eq_ignore_ascii_case(tail_number))
            .with_context(|| format!("no aircraft with tail number '{tail_number}'"))
    }
}

/// Checks the fleet as a whole; single-aircraft rules are enforced when each
/// profile and template is deserialized.
///
/// Catches mistakes like: two entries for one tail number, or an aircraft
/// with no loading stations.
pub fn validate_fleet(fleet: &Fleet) -> Result<()> {
    ensure!(!fleet.aircraft.is_empty(), "fleet content defines no aircraft");

    let mut tails: HashSet<&TailNumber> = HashSet::new();
    for aircraft in &fleet.aircraft {
        ensure!(
            !aircraft.tail_number().0.is_empty(),
            "aircraft has empty tail number"
        );
        ensure!(
            tails.insert(aircraft.tail_number()),
            "tail number '{}' is defined more than once",
            aircraft.tail_number(),
        );
        ensure!(
            !aircraft.stations().is_empty(),
            "aircraft '{}' defines no loading stations",
            aircraft.tail_number(),
        );
    }
    Ok(())
}

pub fn parse_fleet(json: &str) -> Result<Fleet> {
    let file: AircraftFile = serde_json::from_str(json).context("parsing aircraft.json")?;
    let fleet = Fleet {
        content_version: file.content_version,
        aircraft: file.aircraft,
    };
    validate_fleet(&fleet)?;
    Ok(fleet)
}

pub fn load_fleet(content_dir: &str) -> Result<Fleet> {
    let path = Path::new(content_dir).join("aircraft.json");
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    let fleet = parse_fleet(&json)?;
    tracing::info!(
        content_version = %fleet.content_version,
        aircraft = fleet.aircraft.len(),
        "loaded fleet"
    );
    Ok(fleet)
}

/// Load-sheet file entries in file order. A station named twice is an error.
struct SheetFile(Vec<(String, f64)>);

impl<'de> Deserialize<'de> for SheetFile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = SheetFile;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of station ids to quantities")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<SheetFile, A::Error> {
                let mut seen = HashSet::new();
                let mut entries = Vec::new();
                while let Some((station, quantity)) = map.next_entry::<String, f64>()? {
                    if !seen.insert(station.clone()) {
                        return Err(de::Error::custom(format_args!(
                            "station '{station}' appears more than once"
                        )));
                    }
                    entries.push((station, quantity));
                }
                Ok(SheetFile(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Applies `{"station": quantity, ...}` to a fresh sheet for `aircraft`.
pub fn parse_sheet(json: &str, aircraft: &Aircraft) -> Result<LoadSheet> {
    let SheetFile(raw) = serde_json::from_str(json).context("parsing load sheet")?;
    let mut sheet = LoadSheet::new();
    for (station, quantity) in raw {
        aircraft
            .set_entry(&mut sheet, &StationId(station), quantity)
            .with_context(|| format!("load sheet for {}", aircraft.tail_number()))?;
    }
    Ok(sheet)
}

pub fn load_sheet(path: &Path, aircraft: &Aircraft) -> Result<LoadSheet> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading load sheet: {}", path.display()))?;
    parse_sheet(&json, aircraft).with_context(|| format!("in {}", path.display()))
}

/// Parses a `station=quantity` assignment.
pub fn parse_assignment(text: &str) -> Result<(StationId, f64)> {
    let Some((station, quantity)) = text.split_once('=') else {
        bail!("expected station=quantity, got '{text}'");
    };
    let station = station.trim();
    ensure!(!station.is_empty(), "missing station id in '{text}'");
    let quantity: f64 = quantity
        .trim()
        .parse()
        .with_context(|| format!("quantity in '{text}' is not a number"))?;
    Ok((StationId(station.to_string()), quantity))
}
