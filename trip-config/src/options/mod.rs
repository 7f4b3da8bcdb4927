//! Options engine.
//!
//! Pure functions computing the currently selectable values for each
//! selector from the catalog and the rest of the configuration. Nothing is
//! cached: option sets are recomputed from the configuration they are
//! asked about, so they can never go stale.
//!
//! Incoherent input (an endpoint from another line, an unknown line) is
//! not an error here. It just yields a smaller or empty option set.

mod dates;
mod drift;
mod lines;
mod stations;

use serde::Serialize;

use crate::catalog::StationCatalog;
use crate::domain::{Configuration, LineId, Station};

pub use dates::{DateWindow, DateWindows, SelectableDates};
pub use drift::detect_drift;
pub use lines::{line_label, options_for_line};
pub use stations::{options_for_from, options_for_stations, options_for_to};

/// One entry offered by a selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption<T> {
    /// The value selecting this entry produces.
    pub value: T,

    /// Text shown to the user.
    pub label: String,

    /// Shown but not interactive.
    pub disabled: bool,
}

/// A selector whose options come from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectField {
    Line,
    From,
    To,
}

/// Options for one selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldOptions {
    Lines(Vec<SelectOption<LineId>>),
    Stations(Vec<SelectOption<Station>>),
}

impl FieldOptions {
    /// Returns the number of options.
    pub fn len(&self) -> usize {
        match self {
            FieldOptions::Lines(options) => options.len(),
            FieldOptions::Stations(options) => options.len(),
        }
    }

    /// Returns true if nothing is selectable.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the labels in presentation order.
    pub fn labels(&self) -> Vec<&str> {
        match self {
            FieldOptions::Lines(options) => options.iter().map(|o| o.label.as_str()).collect(),
            FieldOptions::Stations(options) => options.iter().map(|o| o.label.as_str()).collect(),
        }
    }
}

/// Compute the options for a selector from the configuration's own values.
pub fn options_for_field<C: StationCatalog + ?Sized>(
    catalog: &C,
    config: &Configuration,
    field: SelectField,
) -> FieldOptions {
    let line = config.line.as_ref();
    match field {
        SelectField::Line => FieldOptions::Lines(options_for_line(catalog, config.bus_mode)),
        SelectField::From => {
            FieldOptions::Stations(options_for_from(catalog, line, config.to.as_ref()))
        }
        SelectField::To => {
            FieldOptions::Stations(options_for_to(catalog, line, config.from.as_ref()))
        }
    }
}
