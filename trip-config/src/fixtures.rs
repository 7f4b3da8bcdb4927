//! Shared test catalog.

use crate::catalog::{StaticCatalog, StaticCatalogBuilder};
use crate::domain::{LineId, Station};

/// A small catalog covering plain lines, branching lines and bus routes.
pub(crate) fn sample_catalog() -> StaticCatalog {
    StaticCatalogBuilder::new()
        .subway(
            "Red",
            vec![
                Station::new("Alewife", 1).with_branches(["A", "B"]),
                Station::new("Park Street", 10),
                Station::new("JFK/UMass", 15).with_branches(["A", "B"]),
                Station::new("Ashmont", 20).with_branches(["A"]),
                Station::new("Quincy Center", 25).with_branches(["B"]),
                Station::new("Braintree", 30)
                    .with_branches(["B"])
                    .with_disabled(true),
            ],
        )
        .subway(
            "Orange",
            vec![
                Station::new("Oak Grove", 1),
                Station::new("Malden Center", 2),
                Station::new("Wellington", 3),
                Station::new("Community College", 6),
                Station::new("North Station", 7),
                Station::new("Downtown Crossing", 10),
                Station::new("Green Street", 17),
                Station::new("Forest Hills", 19),
            ],
        )
        .subway(
            "Green",
            vec![
                Station::new("Lechmere", 1).with_branches(["D", "E"]),
                Station::new("Government Center", 3),
                Station::new("Copley", 6),
                Station::new("Kenmore", 8).with_branches(["B", "C", "D"]),
                Station::new("Riverside", 20).with_branches(["D"]),
                Station::new("Mission Park", 14).with_branches(["E"]),
            ],
        )
        .subway(
            "Blue",
            vec![
                Station::new("Wonderland", 1),
                Station::new("Revere Beach", 2),
                Station::new("State Street", 10),
                Station::new("Bowdoin", 12),
            ],
        )
        .bus(
            "1",
            vec![
                Station::new("Harvard", 1),
                Station::new("Nubian Station", 20),
            ],
        )
        .bus(
            "28",
            vec![
                Station::new("Mattapan Station", 1),
                Station::new("Blue Hill Ave & Morton St", 5),
                Station::new("Nubian Station", 12),
            ],
        )
        .bus(
            "57/57A",
            vec![
                Station::new("Watertown Yard", 1),
                Station::new("Kenmore", 12),
            ],
        )
        .build()
}

/// Clone a station out of the catalog by name.
pub(crate) fn station(catalog: &StaticCatalog, line: &str, stop_name: &str) -> Station {
    let line = LineId::parse(line).unwrap();
    catalog
        .station(&line, stop_name)
        .cloned()
        .unwrap_or_else(|| panic!("no station {stop_name} on {line}"))
}
