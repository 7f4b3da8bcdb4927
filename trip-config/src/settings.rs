//! Runtime settings for the `trip-config` binary.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::options::{DateWindow, DateWindows};

/// Environment variable naming the catalog JSON file.
pub const CATALOG_VAR: &str = "TRIP_CONFIG_CATALOG";

/// Environment variable naming the preset JSON file.
pub const PRESETS_VAR: &str = "TRIP_CONFIG_PRESETS";

/// Environment variable overriding the first subway data date.
pub const SUBWAY_START_VAR: &str = "TRIP_CONFIG_SUBWAY_START";

/// Environment variable overriding the first bus data date.
pub const BUS_START_VAR: &str = "TRIP_CONFIG_BUS_START";

/// Errors reading settings from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("{0} is not set")]
    Missing(&'static str),

    /// A date variable is not `YYYY-MM-DD`
    #[error("{var} must be a YYYY-MM-DD date, got {value:?}")]
    InvalidDate { var: &'static str, value: String },
}

/// Settings for loading and checking a catalog.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Path to the catalog JSON file.
    pub catalog_path: PathBuf,

    /// Path to a preset JSON file. Built-in presets are used when unset.
    pub presets_path: Option<PathBuf>,

    /// Selectable date windows per mode.
    pub date_windows: DateWindows,
}

impl Settings {
    /// Create settings for a catalog with default date windows.
    pub fn new(catalog_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            presets_path: None,
            date_windows: DateWindows::default(),
        }
    }

    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through a variable lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let catalog_path = non_empty(CATALOG_VAR).ok_or(ConfigError::Missing(CATALOG_VAR))?;
        let mut settings = Self::new(catalog_path);
        settings.presets_path = non_empty(PRESETS_VAR).map(PathBuf::from);

        if let Some(value) = non_empty(SUBWAY_START_VAR) {
            let first = parse_date(SUBWAY_START_VAR, &value)?;
            settings.date_windows.subway = DateWindow::open_ended(first);
        }
        if let Some(value) = non_empty(BUS_START_VAR) {
            let first = parse_date(BUS_START_VAR, &value)?;
            settings.date_windows.bus = DateWindow::open_ended(first);
        }

        Ok(settings)
    }
}

fn parse_date(var: &'static str, value: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| ConfigError::InvalidDate {
        var,
        value: value.to_string(),
    })
}
