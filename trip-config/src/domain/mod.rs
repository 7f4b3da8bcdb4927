//! Domain types for trip query configuration.
//!
//! This module contains the value types shared by the options engine,
//! the reducer and the catalog adapter. Identifier types enforce their
//! invariants at construction time; the `Configuration` itself does not,
//! since configurations may arrive from presets or navigation history
//! carrying drift.

mod config;
mod drift;
mod line;
mod mode;
mod station;

pub use config::Configuration;
pub use drift::{Drift, Endpoint};
pub use line::{InvalidLineId, LineId};
pub use mode::Mode;
pub use station::Station;
