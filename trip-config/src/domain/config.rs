//! The trip query configuration.

use serde::{Deserialize, Serialize};

use super::{LineId, Mode, Station};

/// The full set of user-selected query parameters.
///
/// A configuration is a plain value: it is created outside the engine
/// (empty, from a preset, or restored from history), every reducer action
/// returns a new one, and the caller decides where it is stored.
///
/// Nothing here enforces cross-field invariants. Values built by the
/// reducer keep them; values injected from outside may not, and the
/// options engine copes with that at read time.
///
/// Field names match the wire shape used by history and preset data, and
/// missing fields deserialize to their defaults.
///
/// # Examples
///
/// ```
/// use trip_config::domain::{Configuration, Mode};
///
/// let json = r#"{"bus_mode": true, "date_start": "2021-09-09"}"#;
/// let config: Configuration = serde_json::from_str(json).unwrap();
///
/// assert_eq!(config.mode(), Mode::Bus);
/// assert!(config.line.is_none());
/// assert!(!config.is_range());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Selects the bus namespace when true, subway otherwise.
    pub bus_mode: bool,

    /// Selected line or route.
    pub line: Option<LineId>,

    /// Origin station.
    pub from: Option<Station>,

    /// Destination station.
    pub to: Option<Station>,

    /// Single date, or start of a date range.
    pub date_start: Option<String>,

    /// End of a date range. Present means a range query.
    pub date_end: Option<String>,
}

impl Configuration {
    /// Create an empty configuration in the given mode.
    pub fn new(mode: Mode) -> Self {
        Self {
            bus_mode: mode.is_bus(),
            ..Self::default()
        }
    }

    /// Returns the catalog namespace selected by `bus_mode`.
    pub fn mode(&self) -> Mode {
        Mode::from_bus_mode(self.bus_mode)
    }

    /// Returns true if this is a date range query.
    pub fn is_range(&self) -> bool {
        self.date_end.is_some()
    }

    /// Returns true if a line is selected.
    ///
    /// Swapping endpoints is only offered to the user in that state.
    pub fn has_line(&self) -> bool {
        self.line.is_some()
    }
}
