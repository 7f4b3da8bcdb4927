//! Station options for the origin and destination selectors.

use tracing::trace;

use crate::catalog::StationCatalog;
use crate::domain::{LineId, Station};

use super::SelectOption;

/// All stations on a line, sorted by their `order` field.
///
/// This is the shared base set for both endpoints. Disabled stations are
/// kept and flagged. No line, or a line the catalog does not know, yields
/// nothing.
pub fn options_for_stations<C: StationCatalog + ?Sized>(
    catalog: &C,
    line: Option<&LineId>,
) -> Vec<SelectOption<Station>> {
    let Some(line) = line else {
        return Vec::new();
    };

    let mut options: Vec<SelectOption<Station>> = catalog
        .stations_for_line(line)
        .into_iter()
        .map(|station| SelectOption {
            label: station.stop_name.clone(),
            disabled: station.disabled,
            value: station,
        })
        .collect();

    // Stable, so equal orders keep catalog order
    options.sort_by_key(|o| o.value.order);
    options
}

/// Origin options: every station on the line except the destination.
pub fn options_for_from<C: StationCatalog + ?Sized>(
    catalog: &C,
    line: Option<&LineId>,
    to: Option<&Station>,
) -> Vec<SelectOption<Station>> {
    options_for_stations(catalog, line)
        .into_iter()
        .filter(|o| !to.is_some_and(|to| o.value.is_same_stop(to)))
        .collect()
}

/// Destination options: every station on the line except the origin, and
/// only stations sharing a branch with the origin when both are
/// branch-restricted.
///
/// # Examples
///
/// ```
/// use trip_config::catalog::StaticCatalogBuilder;
/// use trip_config::domain::{LineId, Station};
/// use trip_config::options::options_for_to;
///
/// let catalog = StaticCatalogBuilder::new()
///     .subway("Green", vec![
///         Station::new("Lechmere", 1).with_branches(["D"]),
///         Station::new("Copley", 2),
///         Station::new("Mission Park", 3).with_branches(["E"]),
///     ])
///     .build();
///
/// let green = LineId::parse("Green").unwrap();
/// let from = Station::new("Mission Park", 3).with_branches(["E"]);
///
/// let labels: Vec<String> = options_for_to(&catalog, Some(&green), Some(&from))
///     .into_iter()
///     .map(|o| o.label)
///     .collect();
/// assert_eq!(labels, vec!["Copley"]);
/// ```
pub fn options_for_to<C: StationCatalog + ?Sized>(
    catalog: &C,
    line: Option<&LineId>,
    from: Option<&Station>,
) -> Vec<SelectOption<Station>> {
    let options = options_for_stations(catalog, line);
    let Some(from) = from else {
        return options;
    };

    options
        .into_iter()
        .filter(|o| {
            if o.value.is_same_stop(from) {
                return false;
            }
            let reachable = from.can_pair_with(&o.value);
            if !reachable {
                trace!(from = %from.stop_name, to = %o.value.stop_name, "no shared branch");
            }
            reachable
        })
        .collect()
}
