//! Line and route identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid line identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line id: {reason}")]
pub struct InvalidLineId {
    reason: &'static str,
}

/// A catalog key naming a subway line or bus route.
///
/// Bus identifiers may combine several physical routes joined by `/`
/// (e.g. "57/57A"). That only affects display labels; the engine treats the
/// whole identifier as one opaque key.
///
/// # Examples
///
/// ```
/// use trip_config::domain::LineId;
///
/// let orange = LineId::parse("Orange").unwrap();
/// assert_eq!(orange.as_str(), "Orange");
///
/// let combined = LineId::parse("57/57A").unwrap();
/// assert!(combined.is_combined());
/// assert_eq!(combined.routes().collect::<Vec<_>>(), vec!["57", "57A"]);
///
/// // Empty and padded identifiers are rejected
/// assert!(LineId::parse("").is_err());
/// assert!(LineId::parse(" Red").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineId(String);

impl LineId {
    /// Parse a line identifier from a string.
    ///
    /// The input must be non-empty and carry no leading or trailing
    /// whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidLineId> {
        if s.is_empty() {
            return Err(InvalidLineId {
                reason: "must not be empty",
            });
        }

        if s.trim() != s {
            return Err(InvalidLineId {
                reason: "must not have leading or trailing whitespace",
            });
        }

        Ok(LineId(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the physical routes this identifier covers.
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// Returns true if the identifier joins more than one route.
    pub fn is_combined(&self) -> bool {
        self.0.contains('/')
    }
}

impl TryFrom<String> for LineId {
    type Error = InvalidLineId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        LineId::parse(&value)
    }
}

impl From<LineId> for String {
    fn from(line: LineId) -> Self {
        line.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any trimmed non-empty identifier parses and keeps its text
        #[test]
        fn trimmed_always_parses(s in "[A-Za-z0-9][A-Za-z0-9/ -]{0,10}[A-Za-z0-9]") {
            let line = LineId::parse(&s).unwrap();
            prop_assert_eq!(line.as_str(), s.as_str());
        }

        /// Joining the routes back with '/' reproduces the identifier
        #[test]
        fn routes_rejoin(s in "[0-9A-Z]{1,3}(/[0-9A-Z]{1,3}){0,3}") {
            let line = LineId::parse(&s).unwrap();
            let rejoined = line.routes().collect::<Vec<_>>().join("/");
            prop_assert_eq!(rejoined, s);
        }

        /// Leading whitespace is always rejected
        #[test]
        fn leading_whitespace_rejected(s in "[ \t][A-Za-z0-9]{1,8}") {
            prop_assert!(LineId::parse(&s).is_err());
        }
    }
}
