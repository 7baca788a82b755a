//! Built-in, read-only catalog of searchable cities.

use crate::{
    error::{ClockError, Result},
    models::{CatalogEntry, City},
};

// (id, city, country, timezone)
const BUILTIN_CITIES: &[(&str, &str, &str, &str)] = &[
    ("1", "Seoul", "South Korea", "Asia/Seoul"),
    ("2", "Tokyo", "Japan", "Asia/Tokyo"),
    ("3", "Beijing", "China", "Asia/Shanghai"),
    ("4", "Bangkok", "Thailand", "Asia/Bangkok"),
    ("5", "New York", "USA", "America/New_York"),
    ("6", "Los Angeles", "USA", "America/Los_Angeles"),
    ("7", "Toronto", "Canada", "America/Toronto"),
    ("8", "Vancouver", "Canada", "America/Vancouver"),
    ("9", "London", "UK", "Europe/London"),
    ("10", "Paris", "France", "Europe/Paris"),
    ("11", "Berlin", "Germany", "Europe/Berlin"),
    ("12", "Sydney", "Australia", "Australia/Sydney"),
    ("13", "Melbourne", "Australia", "Australia/Melbourne"),
    ("14", "Dubai", "UAE", "Asia/Dubai"),
    ("15", "Moscow", "Russia", "Europe/Moscow"),
];

/// A fixed list of cities that users can search and add.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Creates a catalog from arbitrary entries, keeping their order.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// The catalog shipped with the application.
    pub fn builtin() -> Self {
        let entries = BUILTIN_CITIES
            .iter()
            .map(|&(id, name, country, zone)| CatalogEntry {
                city: City::new(id, name, zone),
                country: country.to_string(),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive substring match on the display name, in catalog
    /// order. An empty query matches every entry.
    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.display_name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Looks up an entry by ID.
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Looks up an entry by ID, failing with [`ClockError::CityNotFound`].
    pub fn require(&self, id: &str) -> Result<&CatalogEntry> {
        self.get(id).ok_or_else(|| ClockError::CityNotFound { id: id.to_string() })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
