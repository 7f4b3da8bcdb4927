//! In-memory station catalog.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::{LineId, Mode, Station};

use super::StationCatalog;
use super::dto::CatalogFile;
use super::error::CatalogError;

/// One line and its stations.
#[derive(Debug, Clone)]
struct CatalogLine {
    id: LineId,
    mode: Mode,
    stations: Vec<Station>,
}

/// An immutable catalog held in memory.
///
/// Lines keep the order they were added in. Catalogs are small (tens of
/// lines, a few hundred bus routes), so lookups scan linearly.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    lines: Vec<CatalogLine>,
}

impl StaticCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let mut catalog = Self::new();

        for (key, entry) in file.lines {
            let id = LineId::parse(&key)?;
            catalog.add_line(id, entry.mode, entry.stations)?;
        }

        debug!(lines = catalog.len(), "parsed station catalog");
        Ok(catalog)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Add a line to the catalog.
    ///
    /// Rejects line ids that are already present and stop names that
    /// repeat within the line.
    pub fn add_line(
        &mut self,
        id: LineId,
        mode: Mode,
        stations: Vec<Station>,
    ) -> Result<(), CatalogError> {
        if self.find(&id).is_some() {
            return Err(CatalogError::DuplicateLine(id));
        }

        let mut seen = HashSet::with_capacity(stations.len());
        for station in &stations {
            if !seen.insert(station.stop_name.as_str()) {
                return Err(CatalogError::DuplicateStop {
                    line: id,
                    stop_name: station.stop_name.clone(),
                });
            }
        }

        self.lines.push(CatalogLine { id, mode, stations });
        Ok(())
    }

    /// Returns the number of lines across both modes.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the catalog has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Look up a station on a line by its stop name.
    pub fn station(&self, line: &LineId, stop_name: &str) -> Option<&Station> {
        self.find(line)?
            .stations
            .iter()
            .find(|s| s.stop_name == stop_name)
    }

    fn find(&self, id: &LineId) -> Option<&CatalogLine> {
        self.lines.iter().find(|l| &l.id == id)
    }
}

impl StationCatalog for StaticCatalog {
    fn lines_for_mode(&self, mode: Mode) -> Vec<LineId> {
        self.lines
            .iter()
            .filter(|l| l.mode == mode)
            .map(|l| l.id.clone())
            .collect()
    }

    fn stations_for_line(&self, line: &LineId) -> Vec<Station> {
        self.find(line)
            .map(|l| l.stations.clone())
            .unwrap_or_default()
    }

    fn mode_of_line(&self, line: &LineId) -> Option<Mode> {
        self.find(line).map(|l| l.mode)
    }
}

/// Builder for creating catalogs in code.
///
/// Provides a fluent API for adding lines. Invalid or duplicate lines are
/// skipped with a warning.
#[derive(Debug, Default)]
pub struct StaticCatalogBuilder {
    inner: StaticCatalog,
}

impl StaticCatalogBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a subway line.
    pub fn subway(self, id: &str, stations: Vec<Station>) -> Self {
        self.line(Mode::Subway, id, stations)
    }

    /// Add a bus route.
    pub fn bus(self, id: &str, stations: Vec<Station>) -> Self {
        self.line(Mode::Bus, id, stations)
    }

    /// Add a line in the given mode.
    pub fn line(mut self, mode: Mode, id: &str, stations: Vec<Station>) -> Self {
        let added = LineId::parse(id)
            .map_err(CatalogError::from)
            .and_then(|line| self.inner.add_line(line, mode, stations));
        if let Err(e) = added {
            warn!(line = id, error = %e, "skipping catalog line");
        }
        self
    }

    /// Build the catalog.
    pub fn build(self) -> StaticCatalog {
        self.inner
    }
}
