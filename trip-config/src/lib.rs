//! Trip query configuration engine.
//!
//! Derives the valid choices for a set of interdependent selectors (mode,
//! line, origin, destination, dates) and applies user actions to produce
//! the next, internally consistent configuration.

pub mod catalog;
pub mod domain;
pub mod options;
pub mod presets;
pub mod reducer;
pub mod session;
pub mod settings;
pub mod visibility;

#[cfg(test)]
pub(crate) mod fixtures;
