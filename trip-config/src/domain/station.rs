//! Station value type.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

/// A station on one line, as the catalog describes it.
///
/// Branch membership models lines that fork: a station on the E branch and
/// a station on the D branch of the same nominal line are not connected by
/// any single trip. An empty branch set means "no branch restriction".
///
/// `disabled` stations stay in every option set; the flag only tells the
/// presentation layer to render them non-interactive.
///
/// # Examples
///
/// ```
/// use trip_config::domain::Station;
///
/// let park = Station::new("Mission Park", 3).with_branches(["E"]);
/// let lechmere = Station::new("Lechmere", 1).with_branches(["D"]);
/// let copley = Station::new("Copley", 2);
///
/// assert!(!park.can_pair_with(&lechmere));
/// assert!(park.can_pair_with(&copley));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Display name, unique within a line.
    pub stop_name: String,

    /// Sort key for presentation and selection order.
    pub order: i32,

    /// Branches this station serves. Empty means unrestricted.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub branches: BTreeSet<String>,

    /// Whether the station should be shown but not be interactive.
    #[serde(default)]
    pub disabled: bool,
}

impl Station {
    /// Create an enabled, unrestricted station.
    pub fn new(stop_name: impl Into<String>, order: i32) -> Self {
        Self {
            stop_name: stop_name.into(),
            order,
            branches: BTreeSet::new(),
            disabled: false,
        }
    }

    /// Returns this station with the given branch memberships.
    pub fn with_branches<I, S>(mut self, branches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.branches = branches.into_iter().map(Into::into).collect();
        self
    }

    /// Returns this station with the disabled flag set.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Returns true if both values denote the same stop.
    ///
    /// Stop names are unique within a line, so this holds for copies of a
    /// catalog station (e.g. restored from history) even when other fields
    /// have since changed.
    pub fn is_same_stop(&self, other: &Station) -> bool {
        self.stop_name == other.stop_name
    }

    /// Returns true if the station is limited to specific branches.
    pub fn is_branch_restricted(&self) -> bool {
        !self.branches.is_empty()
    }

    /// Returns true if the two stations serve at least one common branch.
    pub fn shares_branch_with(&self, other: &Station) -> bool {
        !self.branches.is_disjoint(&other.branches)
    }

    /// Returns true if a trip may connect the two stations.
    ///
    /// Pairs are only ruled out when both sides are branch-restricted and
    /// their branch sets are disjoint.
    pub fn can_pair_with(&self, other: &Station) -> bool {
        if self.is_branch_restricted() && other.is_branch_restricted() {
            return self.shares_branch_with(other);
        }
        true
    }
}

/// Catalog data uses `null` for stations without branch information.
fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<BTreeSet<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
