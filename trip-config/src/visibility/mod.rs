//! End-date picker visibility.
//!
//! Whether the end-date picker is shown is presentation state, not part of
//! the configuration, but it has to follow `date_end` even when the whole
//! configuration is swapped out by a preset or a history entry. The rule
//! is a pure function of the transition:
//!
//! | cause                     | result                                   |
//! |---------------------------|------------------------------------------|
//! | mode toggled              | hidden                                   |
//! | range cleared             | hidden                                   |
//! | "show range" clicked      | shown                                    |
//! | end-date picker cleared   | hidden if `date_end` was present          |
//! | end-date picker set       | unchanged                                |
//! | anything else             | `date_end.is_some()` if `date_end` changed, else unchanged |
//!
//! Only the value of `date_end` counts as a change. Replacing the
//! configuration with an equal `date_end` leaves the flag alone.

use crate::domain::Configuration;
use crate::reducer::{Action, FieldUpdate};

/// Why the configuration (or the flag) is changing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause {
    /// `Action::ToggleMode`.
    ModeToggled,
    /// `Action::ClearDateRange`.
    RangeCleared,
    /// The end-date picker itself wrote `date_end`.
    EndDatePicked,
    /// The user asked for the range controls.
    ShowRangeClicked,
    /// Any other reducer action.
    Edited,
    /// The configuration was replaced wholesale (preset, history).
    Replaced,
}

impl From<&Action> for Cause {
    fn from(action: &Action) -> Self {
        match action {
            Action::ToggleMode => Cause::ModeToggled,
            Action::ClearDateRange => Cause::RangeCleared,
            Action::Select(FieldUpdate::SetDateEnd(_)) => Cause::EndDatePicked,
            Action::Select(_) | Action::SwapEndpoints => Cause::Edited,
        }
    }
}

/// Compute the next visibility of the end-date picker.
pub fn next_visibility(
    prev: &Configuration,
    next: &Configuration,
    visible: bool,
    cause: Cause,
) -> bool {
    match cause {
        Cause::ModeToggled | Cause::RangeCleared => false,
        Cause::ShowRangeClicked => true,
        Cause::EndDatePicked => {
            if next.date_end.is_none() && prev.date_end.is_some() {
                false
            } else {
                visible
            }
        }
        Cause::Edited | Cause::Replaced => {
            if prev.date_end != next.date_end {
                next.date_end.is_some()
            } else {
                visible
            }
        }
    }
}

/// The end-date picker's visibility flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeVisibility {
    shown: bool,
}

impl RangeVisibility {
    /// Initial visibility for a configuration: shown for range queries.
    pub fn initial(config: &Configuration) -> Self {
        Self {
            shown: config.is_range(),
        }
    }

    /// Returns true if the end-date picker is shown.
    pub fn is_shown(self) -> bool {
        self.shown
    }

    /// Visibility after a transition from `prev` to `next`.
    pub fn after(self, prev: &Configuration, next: &Configuration, cause: Cause) -> Self {
        Self {
            shown: next_visibility(prev, next, self.shown, cause),
        }
    }
}
