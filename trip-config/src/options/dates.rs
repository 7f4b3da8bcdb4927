//! Selectable date windows for the date pickers.
//!
//! Each mode has its own first day of available data. The window is only
//! offered to the pickers; the reducer accepts any date string.

use chrono::NaiveDate;

use crate::domain::Mode;

/// The configured bounds of one mode's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    /// First day with data.
    pub first: NaiveDate,

    /// Last day with data. `None` means data runs up to today.
    pub last: Option<NaiveDate>,
}

impl DateWindow {
    /// A window starting at `first` and running up to today.
    pub fn open_ended(first: NaiveDate) -> Self {
        Self { first, last: None }
    }

    /// Resolve the window against the current date.
    pub fn resolve(&self, today: NaiveDate) -> SelectableDates {
        SelectableDates {
            first: self.first,
            last: self.last.unwrap_or(today),
        }
    }
}

/// Date windows for both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindows {
    pub bus: DateWindow,
    pub subway: DateWindow,
}

impl DateWindows {
    /// Returns the window for a mode.
    pub fn for_mode(&self, mode: Mode) -> &DateWindow {
        match mode {
            Mode::Bus => &self.bus,
            Mode::Subway => &self.subway,
        }
    }

    /// The inclusive range of dates the pickers offer in this mode.
    pub fn available_dates(&self, mode: Mode, today: NaiveDate) -> SelectableDates {
        self.for_mode(mode).resolve(today)
    }
}

impl Default for DateWindows {
    fn default() -> Self {
        Self {
            bus: DateWindow::open_ended(ymd(2018, 8, 1)),
            subway: DateWindow::open_ended(ymd(2016, 1, 15)),
        }
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// A resolved, inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectableDates {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl SelectableDates {
    /// Returns true if no date can be picked.
    pub fn is_empty(&self) -> bool {
        self.last < self.first
    }

    /// Returns true if the date lies in the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first <= date && date <= self.last
    }

    /// Returns true if the ISO-8601 date string lies in the range.
    ///
    /// Strings that are not `YYYY-MM-DD` dates are reported as outside.
    pub fn contains_str(&self, date: &str) -> bool {
        NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok_and(|d| self.contains(d))
    }
}
