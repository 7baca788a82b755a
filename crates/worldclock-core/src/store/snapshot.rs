//! Persisted snapshot encoding.
//!
//! The snapshot is a bare JSON array of `{"id", "city", "timezone"}` objects.
//! There is no version field: anything that does not decode into that shape
//! is treated exactly like a missing snapshot.

use std::collections::HashSet;

use crate::{error::Result, models::City};

/// Serializes the watch list in order.
pub fn encode(cities: &[City]) -> Result<String> {
    Ok(serde_json::to_string(cities)?)
}

/// Parses a stored snapshot.
///
/// Returns `None` for empty or malformed payloads. Repeated IDs are dropped,
/// keeping the first occurrence, so a decoded list always satisfies the
/// watch-list uniqueness invariant.
pub fn decode(raw: &str) -> Option<Vec<City>> {
    if raw.trim().is_empty() {
        return None;
    }

    let cities: Vec<City> = match serde_json::from_str(raw) {
        Ok(cities) => cities,
        Err(e) => {
            log::warn!("Discarding malformed watch-list snapshot: {e}");
            return None;
        }
    };

    let total = cities.len();
    let mut seen = HashSet::new();
    let unique: Vec<City> = cities
        .into_iter()
        .filter(|city| seen.insert(city.id.clone()))
        .collect();
    if unique.len() != total {
        log::warn!(
            "Dropped {} duplicate entries from watch-list snapshot",
            total - unique.len()
        );
    }
    Some(unique)
}
