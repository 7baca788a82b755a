//! City model definitions.

use serde::{Deserialize, Serialize};

/// A city the user can watch.
///
/// The serialized field names (`id`, `city`, `timezone`) are the persisted
/// snapshot layout and must stay stable across releases.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct City {
    /// Identifier, unique within the catalog
    pub id: String,

    /// Human-readable city name
    #[serde(rename = "city")]
    pub display_name: String,

    /// IANA time zone identifier, e.g. `Asia/Seoul`
    #[serde(rename = "timezone")]
    pub time_zone: String,
}

impl City {
    /// Creates a new city value.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        time_zone: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            time_zone: time_zone.into(),
        }
    }
}

/// A catalog row: a city plus the country it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub city: City,
    pub country: String,
}

impl CatalogEntry {
    pub fn id(&self) -> &str {
        &self.city.id
    }

    pub fn display_name(&self) -> &str {
        &self.city.display_name
    }

    pub fn time_zone(&self) -> &str {
        &self.city.time_zone
    }
}

impl From<CatalogEntry> for City {
    fn from(entry: CatalogEntry) -> Self {
        entry.city
    }
}

impl From<&CatalogEntry> for City {
    fn from(entry: &CatalogEntry) -> Self {
        entry.city.clone()
    }
}
