//! Read-side drift detection.

use crate::catalog::StationCatalog;
use crate::domain::{Configuration, Drift, Endpoint, Station};

/// List the invariant violations carried by a configuration.
///
/// Drift comes from configurations built outside the reducer (presets,
/// history) and from stale endpoints left behind by a line change. A
/// `date_end` without `date_start` is allowed and is not reported.
pub fn detect_drift<C: StationCatalog + ?Sized>(catalog: &C, config: &Configuration) -> Vec<Drift> {
    let mut drift = Vec::new();
    let endpoints = [(Endpoint::From, &config.from), (Endpoint::To, &config.to)];

    match &config.line {
        None => {
            for (endpoint, station) in endpoints {
                if let Some(station) = station {
                    drift.push(Drift::EndpointWithoutLine(endpoint, station.stop_name.clone()));
                }
            }
        }
        Some(line) => match catalog.mode_of_line(line) {
            None => drift.push(Drift::UnknownLine(line.clone())),
            Some(mode) => {
                if mode != config.mode() {
                    drift.push(Drift::LineOutsideMode {
                        line: line.clone(),
                        mode: config.mode(),
                    });
                }

                let stations = catalog.stations_for_line(line);
                for (endpoint, station) in endpoints {
                    if let Some(station) = station {
                        if !on_line(&stations, station) {
                            drift.push(Drift::EndpointNotOnLine {
                                endpoint,
                                stop_name: station.stop_name.clone(),
                                line: line.clone(),
                            });
                        }
                    }
                }
            }
        },
    }

    if let (Some(from), Some(to)) = (&config.from, &config.to) {
        if from.is_same_stop(to) {
            drift.push(Drift::SameEndpoints(from.stop_name.clone()));
        }
    }

    drift
}

fn on_line(stations: &[Station], station: &Station) -> bool {
    stations.iter().any(|s| s.is_same_stop(station))
}
