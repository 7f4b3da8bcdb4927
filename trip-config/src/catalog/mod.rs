//! Station catalog access.
//!
//! The catalog is the read-only source of lines and stations. The engine
//! only talks to it through [`StationCatalog`]; [`StaticCatalog`] is the
//! in-memory implementation loaded from the JSON station data.

mod dto;
mod error;
mod static_catalog;

use std::sync::Arc;

use crate::domain::{LineId, Mode, Station};

pub use error::CatalogError;
pub use static_catalog::{StaticCatalog, StaticCatalogBuilder};

/// Trait for providing lines and stations.
///
/// This abstraction allows the options engine to be tested with mock data
/// and driven by whatever data source the host application has.
pub trait StationCatalog {
    /// Lines or routes in the given mode, in catalog order.
    fn lines_for_mode(&self, mode: Mode) -> Vec<LineId>;

    /// Stations on a line, in catalog order.
    ///
    /// Returns an empty list for lines the catalog does not know.
    fn stations_for_line(&self, line: &LineId) -> Vec<Station>;

    /// The mode a line belongs to, or `None` for unknown lines.
    fn mode_of_line(&self, line: &LineId) -> Option<Mode>;
}

impl<C: StationCatalog + ?Sized> StationCatalog for &C {
    fn lines_for_mode(&self, mode: Mode) -> Vec<LineId> {
        (**self).lines_for_mode(mode)
    }

    fn stations_for_line(&self, line: &LineId) -> Vec<Station> {
        (**self).stations_for_line(line)
    }

    fn mode_of_line(&self, line: &LineId) -> Option<Mode> {
        (**self).mode_of_line(line)
    }
}

impl<C: StationCatalog + ?Sized> StationCatalog for Arc<C> {
    fn lines_for_mode(&self, mode: Mode) -> Vec<LineId> {
        (**self).lines_for_mode(mode)
    }

    fn stations_for_line(&self, line: &LineId) -> Vec<Station> {
        (**self).stations_for_line(line)
    }

    fn mode_of_line(&self, line: &LineId) -> Option<Mode> {
        (**self).mode_of_line(line)
    }
}
