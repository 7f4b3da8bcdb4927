//! Selector session.
//!
//! A `Selector` holds the current configuration and the end-date picker
//! flag for one set of selectors. It is the single path through which the
//! presentation layer changes configuration: user actions go through the
//! reducer, external replacements (presets, history) through
//! [`Selector::replace`], and both run the visibility rule.

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::catalog::StationCatalog;
use crate::domain::{Configuration, Drift, LineId, Station};
use crate::options::{
    self, DateWindows, FieldOptions, SelectField, SelectOption, SelectableDates, detect_drift,
};
use crate::presets::Preset;
use crate::reducer::{Action, reduce};
use crate::visibility::{Cause, RangeVisibility};

#[cfg(test)]
mod scenario_tests;

/// Configuration state for one set of selectors.
#[derive(Debug, Clone)]
pub struct Selector<C> {
    catalog: C,
    config: Configuration,
    visibility: RangeVisibility,
}

impl<C: StationCatalog> Selector<C> {
    /// Create a selector with an empty subway configuration.
    pub fn new(catalog: C) -> Self {
        Self::with_configuration(catalog, Configuration::default())
    }

    /// Create a selector starting from an existing configuration.
    ///
    /// The end-date picker starts shown for range queries.
    pub fn with_configuration(catalog: C, config: Configuration) -> Self {
        let visibility = RangeVisibility::initial(&config);
        Self {
            catalog,
            config,
            visibility,
        }
    }

    /// The current configuration.
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Returns true if the end-date picker is shown.
    pub fn show_date_end_picker(&self) -> bool {
        self.visibility.is_shown()
    }

    /// Apply a user action.
    pub fn dispatch(&mut self, action: Action) -> &Configuration {
        let next = reduce(&self.config, &action);
        self.transition(next, Cause::from(&action));
        &self.config
    }

    /// Replace the whole configuration (preset, history restore).
    pub fn replace(&mut self, config: Configuration) -> &Configuration {
        self.transition(config, Cause::Replaced);
        &self.config
    }

    /// Apply a preset's configuration.
    pub fn apply_preset(&mut self, preset: &Preset) -> &Configuration {
        debug!(preset = %preset.label, "applying preset");
        self.replace(preset.value.clone())
    }

    /// The user asked to pick a date range.
    pub fn show_range(&mut self) {
        self.visibility = self
            .visibility
            .after(&self.config, &self.config, Cause::ShowRangeClicked);
    }

    /// Returns true if swapping endpoints should be offered.
    pub fn can_swap(&self) -> bool {
        self.config.has_line()
    }

    /// Options for a selector, from the current configuration.
    pub fn options(&self, field: SelectField) -> FieldOptions {
        options::options_for_field(&self.catalog, &self.config, field)
    }

    /// Line options for the current mode.
    pub fn line_options(&self) -> Vec<SelectOption<LineId>> {
        options::options_for_line(&self.catalog, self.config.bus_mode)
    }

    /// Origin options for the current line and destination.
    pub fn from_options(&self) -> Vec<SelectOption<Station>> {
        options::options_for_from(&self.catalog, self.config.line.as_ref(), self.config.to.as_ref())
    }

    /// Destination options for the current line and origin.
    pub fn to_options(&self) -> Vec<SelectOption<Station>> {
        options::options_for_to(&self.catalog, self.config.line.as_ref(), self.config.from.as_ref())
    }

    /// Dates the pickers offer in the current mode.
    pub fn available_dates(&self, windows: &DateWindows, today: NaiveDate) -> SelectableDates {
        windows.available_dates(self.config.mode(), today)
    }

    /// Invariant violations in the current configuration.
    pub fn drift(&self) -> Vec<Drift> {
        detect_drift(&self.catalog, &self.config)
    }

    fn transition(&mut self, next: Configuration, cause: Cause) {
        self.visibility = self.visibility.after(&self.config, &next, cause);
        trace!(
            ?cause,
            show_date_end_picker = self.visibility.is_shown(),
            "configuration transition"
        );
        self.config = next;
    }
}
