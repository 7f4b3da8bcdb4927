//! Transit mode.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The catalog namespace a line belongs to.
///
/// A `Configuration` stores this as the `bus_mode` flag; `Mode` is the typed
/// view of that flag used when talking to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Bus routes.
    Bus,
    /// Subway (rapid transit) lines.
    Subway,
}

impl Mode {
    /// Returns the mode selected by a `bus_mode` flag.
    pub fn from_bus_mode(bus_mode: bool) -> Self {
        if bus_mode { Mode::Bus } else { Mode::Subway }
    }

    /// Returns true for [`Mode::Bus`].
    pub fn is_bus(self) -> bool {
        matches!(self, Mode::Bus)
    }

    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            Mode::Bus => Mode::Subway,
            Mode::Subway => Mode::Bus,
        }
    }

    /// Returns the catalog's name for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Bus => "bus",
            Mode::Subway => "subway",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
