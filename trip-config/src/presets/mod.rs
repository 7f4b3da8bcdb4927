//! Named configuration presets.
//!
//! A preset is an opaque `{label, value}` pair. Applying one replaces the
//! whole configuration; it is not a reducer action.
//!
//! Presets are written as a [`PresetSpec`] naming a line and its endpoint
//! stations, then resolved against the catalog: the mode comes from the
//! line's catalog entry and the endpoints are the catalog's own station
//! values. A station name the line does not have resolves to an absent
//! endpoint.

mod error;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::StationCatalog;
use crate::domain::{Configuration, LineId, Station};

pub use error::PresetError;

/// A named, pre-built configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    /// Text offered to the user.
    pub label: String,

    /// The configuration applied wholesale.
    pub value: Configuration,
}

/// A preset described by names, before catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetSpec {
    pub label: String,
    pub line: String,
    pub from: String,
    pub to: String,
    pub date_start: String,
    #[serde(default)]
    pub date_end: Option<String>,
}

impl PresetSpec {
    /// Create a single-date preset.
    pub fn new(label: &str, line: &str, from: &str, to: &str, date_start: &str) -> Self {
        Self {
            label: label.to_string(),
            line: line.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            date_start: date_start.to_string(),
            date_end: None,
        }
    }

    /// Returns this preset as a date range ending at `date_end`.
    pub fn until(mut self, date_end: &str) -> Self {
        self.date_end = Some(date_end.to_string());
        self
    }

    /// Look the preset up in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the line id is invalid or the catalog does not
    /// have the line. Unknown station names are not an error.
    pub fn resolve<C: StationCatalog + ?Sized>(&self, catalog: &C) -> Result<Preset, PresetError> {
        let line = LineId::parse(&self.line).map_err(|source| PresetError::InvalidLine {
            label: self.label.clone(),
            source,
        })?;

        let mode = catalog
            .mode_of_line(&line)
            .ok_or_else(|| PresetError::UnknownLine {
                label: self.label.clone(),
                line: line.clone(),
            })?;

        let stations = catalog.stations_for_line(&line);
        let from = self.find_station(&stations, &self.from);
        let to = self.find_station(&stations, &self.to);

        Ok(Preset {
            label: self.label.clone(),
            value: Configuration {
                bus_mode: mode.is_bus(),
                line: Some(line),
                from,
                to,
                date_start: Some(self.date_start.clone()),
                date_end: self.date_end.clone(),
            },
        })
    }

    fn find_station(&self, stations: &[Station], stop_name: &str) -> Option<Station> {
        let found = stations.iter().find(|s| s.stop_name == stop_name).cloned();
        if found.is_none() {
            warn!(
                preset = %self.label,
                line = %self.line,
                stop_name,
                "preset station not on line"
            );
        }
        found
    }
}

/// The presets offered out of the box.
pub fn builtin_specs() -> Vec<PresetSpec> {
    vec![
        PresetSpec::new(
            "June to December 2021 — Orange Line slow zones",
            "Orange",
            "Downtown Crossing",
            "Green Street",
            "2021-06-01",
        )
        .until("2021-12-31"),
        PresetSpec::new(
            "September 9, 2021 — Route 28 first day of school traffic",
            "28",
            "Mattapan Station",
            "Nubian Station",
            "2021-09-09",
        ),
    ]
}

/// Resolve a list of specs, stopping at the first failure.
pub fn resolve_all<C: StationCatalog + ?Sized>(
    specs: &[PresetSpec],
    catalog: &C,
) -> Result<Vec<Preset>, PresetError> {
    specs.iter().map(|spec| spec.resolve(catalog)).collect()
}

/// Read preset specs from a JSON file holding an array of specs.
pub fn load_specs(path: impl AsRef<Path>) -> Result<Vec<PresetSpec>, PresetError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| PresetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let specs: Vec<PresetSpec> = serde_json::from_str(&json)?;
    debug!(count = specs.len(), path = %path.display(), "loaded preset specs");
    Ok(specs)
}
