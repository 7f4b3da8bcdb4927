//! Line and route options.

use crate::catalog::StationCatalog;
use crate::domain::{LineId, Mode};

use super::SelectOption;

/// Display label for a line in the given mode.
///
/// Bus routes read "Route 28", or "Routes 57/57A" when the identifier
/// combines several routes. Subway lines read "Orange Line".
///
/// # Examples
///
/// ```
/// use trip_config::domain::{LineId, Mode};
/// use trip_config::options::line_label;
///
/// let line = LineId::parse("57/57A").unwrap();
/// assert_eq!(line_label(Mode::Bus, &line), "Routes 57/57A");
///
/// let line = LineId::parse("Red").unwrap();
/// assert_eq!(line_label(Mode::Subway, &line), "Red Line");
/// ```
pub fn line_label(mode: Mode, line: &LineId) -> String {
    match mode {
        Mode::Bus if line.is_combined() => format!("Routes {line}"),
        Mode::Bus => format!("Route {line}"),
        Mode::Subway => format!("{line} Line"),
    }
}

/// Options for the line selector, in catalog order.
pub fn options_for_line<C: StationCatalog + ?Sized>(
    catalog: &C,
    bus_mode: bool,
) -> Vec<SelectOption<LineId>> {
    let mode = Mode::from_bus_mode(bus_mode);
    catalog
        .lines_for_mode(mode)
        .into_iter()
        .map(|line| SelectOption {
            label: line_label(mode, &line),
            value: line,
            disabled: false,
        })
        .collect()
}
