//! Configuration reducer.
//!
//! Pure transitions from `(configuration, action)` to the next
//! configuration. These are the only legal ways to change a configuration
//! and they are total: any configuration is accepted, including one that
//! already drifts, and each operation only guarantees the rule it owns.
//! Given distinct endpoints, no operation makes them the same stop.

mod action;

use tracing::{debug, warn};

use crate::domain::{Configuration, Station};

pub use action::{Action, FieldUpdate};

/// Apply an action to a configuration.
///
/// # Examples
///
/// ```
/// use trip_config::domain::{Configuration, LineId};
/// use trip_config::reducer::{Action, FieldUpdate, reduce};
///
/// let config = Configuration::default();
/// let orange = LineId::parse("Orange").unwrap();
///
/// let next = reduce(&config, &Action::Select(FieldUpdate::SetLine(orange.clone())));
/// assert_eq!(next.line, Some(orange));
///
/// let next = reduce(&next, &Action::ToggleMode);
/// assert!(next.bus_mode);
/// assert!(next.line.is_none());
/// ```
pub fn reduce(config: &Configuration, action: &Action) -> Configuration {
    debug!(action = action.name(), "reducing configuration");
    match action {
        Action::ToggleMode => toggle_mode(config),
        Action::Select(update) => select_field(config, update.clone()),
        Action::SwapEndpoints => swap_endpoints(config),
        Action::ClearDateRange => clear_date_range(config),
    }
}

/// Flip the mode and clear every other field.
///
/// Line, stations and dates all belong to one mode's namespace, so none of
/// them survive a mode change.
pub fn toggle_mode(config: &Configuration) -> Configuration {
    Configuration::new(config.mode().toggled())
}

/// Set exactly one field; everything else passes through.
///
/// Changing the line does not clear `from`/`to`. Stale endpoints are
/// tolerated until replaced; the options engine stops offering them.
///
/// Setting an endpoint to the stop already held by the other endpoint is
/// ignored and returns the configuration unchanged.
pub fn select_field(config: &Configuration, update: FieldUpdate) -> Configuration {
    debug!(field = update.field_name(), "selecting field");
    let mut next = config.clone();
    match update {
        FieldUpdate::SetLine(line) => next.line = Some(line),
        FieldUpdate::SetFrom(station) => {
            if clashes(&station, config.to.as_ref()) {
                warn!(stop_name = %station.stop_name, "origin equals destination, ignoring");
            } else {
                next.from = Some(station);
            }
        }
        FieldUpdate::SetTo(station) => {
            if clashes(&station, config.from.as_ref()) {
                warn!(stop_name = %station.stop_name, "destination equals origin, ignoring");
            } else {
                next.to = Some(station);
            }
        }
        FieldUpdate::SetDateStart(date) => next.date_start = date,
        FieldUpdate::SetDateEnd(date) => next.date_end = date,
    }
    next
}

fn clashes(station: &Station, other: Option<&Station>) -> bool {
    other.is_some_and(|other| other.is_same_stop(station))
}

/// Exchange origin and destination.
///
/// Absent values swap into absent positions. No line is required.
pub fn swap_endpoints(config: &Configuration) -> Configuration {
    let mut next = config.clone();
    std::mem::swap(&mut next.from, &mut next.to);
    next
}

/// Drop the end date, leaving the start date alone.
pub fn clear_date_range(config: &Configuration) -> Configuration {
    Configuration {
        date_end: None,
        ..config.clone()
    }
}
