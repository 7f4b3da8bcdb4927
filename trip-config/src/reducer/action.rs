//! Reducer actions.

use serde::{Deserialize, Serialize};

use crate::domain::{LineId, Station};

/// A single-field update.
///
/// Each variant sets exactly one field of the configuration. Date setters
/// take an optional value so a cleared picker can be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldUpdate {
    #[serde(rename = "line")]
    SetLine(LineId),
    #[serde(rename = "from")]
    SetFrom(Station),
    #[serde(rename = "to")]
    SetTo(Station),
    #[serde(rename = "date_start")]
    SetDateStart(Option<String>),
    #[serde(rename = "date_end")]
    SetDateEnd(Option<String>),
}

impl FieldUpdate {
    /// Name of the field this update writes.
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldUpdate::SetLine(_) => "line",
            FieldUpdate::SetFrom(_) => "from",
            FieldUpdate::SetTo(_) => "to",
            FieldUpdate::SetDateStart(_) => "date_start",
            FieldUpdate::SetDateEnd(_) => "date_end",
        }
    }
}

/// A discrete user action on the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "update", rename_all = "snake_case")]
pub enum Action {
    /// Switch between bus and subway, clearing everything else.
    ToggleMode,
    /// Pick a value for one field.
    Select(FieldUpdate),
    /// Exchange origin and destination.
    SwapEndpoints,
    /// Drop the end of the date range.
    ClearDateRange,
}

impl Action {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Action::ToggleMode => "toggle_mode",
            Action::Select(_) => "select",
            Action::SwapEndpoints => "swap_endpoints",
            Action::ClearDateRange => "clear_date_range",
        }
    }
}

impl From<FieldUpdate> for Action {
    fn from(update: FieldUpdate) -> Self {
        Action::Select(update)
    }
}
