//! On-disk shape of the station catalog.
//!
//! The catalog file is a JSON object keyed by line id:
//!
//! ```json
//! {
//!   "Orange": { "type": "subway", "stations": [ { "stop_name": "Oak Grove", "order": 1 } ] },
//!   "28":     { "type": "bus",    "stations": [ ... ] }
//! }
//! ```
//!
//! Object key order is the catalog's line order, so the object is read as
//! an ordered list of entries rather than a map.

use std::fmt;

use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};

use crate::domain::{Mode, Station};

/// One line entry in the catalog file.
#[derive(Debug, Deserialize)]
pub(crate) struct LineDto {
    #[serde(rename = "type")]
    pub mode: Mode,

    #[serde(default)]
    pub stations: Vec<Station>,
}

/// The whole catalog file, entries in file order.
#[derive(Debug)]
pub(crate) struct CatalogFile {
    pub lines: Vec<(String, LineDto)>,
}

impl<'de> Deserialize<'de> for CatalogFile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CatalogFileVisitor)
    }
}

struct CatalogFileVisitor;

impl<'de> Visitor<'de> for CatalogFileVisitor {
    type Value = CatalogFile;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping line ids to line entries")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut lines = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, LineDto>()? {
            lines.push((key, value));
        }
        Ok(CatalogFile { lines })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_file_order() {
        let json = r#"{
            "Red": {"type": "subway", "stations": []},
            "Orange": {"type": "subway", "stations": []},
            "1": {"type": "bus", "stations": []},
            "Blue": {"type": "subway", "stations": []}
        }"#;

        let file: CatalogFile = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = file.lines.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Red", "Orange", "1", "Blue"]);
        assert_eq!(file.lines[2].1.mode, Mode::Bus);
    }

    #[test]
    fn missing_stations_default_empty() {
        let file: CatalogFile = serde_json::from_str(r#"{"Mattapan": {"type": "subway"}}"#).unwrap();
        assert!(file.lines[0].1.stations.is_empty());
    }

    #[test]
    fn rejects_unknown_mode() {
        let result = serde_json::from_str::<CatalogFile>(r#"{"F1": {"type": "ferry"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_object() {
        assert!(serde_json::from_str::<CatalogFile>("[]").is_err());
    }
}
