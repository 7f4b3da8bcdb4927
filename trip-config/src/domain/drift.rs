//! Invariant drift descriptions.
//!
//! A configuration drifts when it was built outside the reducer (a preset,
//! a history entry) and breaks one of the cross-field rules. Drift is only
//! ever reported; nothing in the engine refuses a drifted configuration.

use std::fmt;

use super::{LineId, Mode};

/// Which endpoint of a trip a drift refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The origin station.
    From,
    /// The destination station.
    To,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::From => f.write_str("from"),
            Endpoint::To => f.write_str("to"),
        }
    }
}

/// A single invariant violation found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Drift {
    /// The line is in the catalog but under the other mode
    #[error("line {line} is not a {mode} line")]
    LineOutsideMode { line: LineId, mode: Mode },

    /// The line is not in the catalog at all
    #[error("line {0} is not in the catalog")]
    UnknownLine(LineId),

    /// An endpoint is set but no line is selected
    #[error("{0} station {1} is set without a line")]
    EndpointWithoutLine(Endpoint, String),

    /// An endpoint names a stop the line does not have
    #[error("{endpoint} station {stop_name} is not on line {line}")]
    EndpointNotOnLine {
        endpoint: Endpoint,
        stop_name: String,
        line: LineId,
    },

    /// Origin and destination are the same stop
    #[error("from and to are both {0}")]
    SameEndpoints(String),
}
