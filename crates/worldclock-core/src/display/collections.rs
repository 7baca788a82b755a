//! Collection wrapper types for displaying the clock board and search results.

use std::fmt;

use crate::{clock::CityTime, models::CatalogEntry};

/// Newtype wrapper for displaying the watched cities with their local time.
///
/// Rows are numbered from zero, matching the indices `reorder` expects.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use worldclock_core::{clock::clock_rows, display::ClockBoard, City};
///
/// let instant: Timestamp = "2024-03-01T00:00:00Z".parse().unwrap();
/// let cities = vec![City::new("1", "Seoul", "Asia/Seoul")];
///
/// let board = ClockBoard(clock_rows(&cities, instant));
/// let output = format!("{}", board);
/// assert!(output.contains("**Seoul** `2024-03-01 09:00:00`"));
/// ```
pub struct ClockBoard(pub Vec<CityTime>);

impl ClockBoard {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CityTime> {
        self.0.iter()
    }
}

impl fmt::Display for ClockBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No cities in your world clock.");
        }
        for (index, row) in self.0.iter().enumerate() {
            writeln!(
                f,
                "{index}. **{}** `{}` {}",
                row.city.display_name, row.time, row.city.time_zone
            )?;
        }
        Ok(())
    }
}

/// A catalog entry together with whether it is already being watched.
pub struct SearchHit<'a> {
    pub entry: &'a CatalogEntry,
    pub watched: bool,
}

/// Newtype wrapper for displaying catalog search results.
pub struct SearchResults<'a>(pub Vec<SearchHit<'a>>);

impl SearchResults<'_> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for SearchResults<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No matching cities.");
        }
        for hit in &self.0 {
            write!(
                f,
                "- `{}` **{}**, {} ({})",
                hit.entry.id(),
                hit.entry.display_name(),
                hit.entry.country,
                hit.entry.time_zone()
            )?;
            if hit.watched {
                write!(f, " *(added)*")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
