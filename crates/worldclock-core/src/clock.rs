//! Time formatting for watched cities.
//!
//! All output uses the fixed-width, sortable `YYYY-MM-DD HH:MM:SS` layout on
//! a 24-hour clock. Offsets and DST come from the tz database at the instant
//! being formatted.

use jiff::{Timestamp, Zoned};

use crate::{
    display::ZonedTime,
    error::{ClockError, Result},
    models::City,
};

/// strftime pattern for every clock reading.
pub const CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Text shown in place of a time when a city's zone cannot be resolved.
pub const INVALID_ZONE_TEXT: &str = "invalid time zone";

/// Resolves `instant` in the named IANA time zone.
pub fn zoned(instant: Timestamp, time_zone: &str) -> Result<Zoned> {
    instant
        .in_tz(time_zone)
        .map_err(|source| ClockError::InvalidTimeZone {
            zone: time_zone.to_string(),
            source,
        })
}

/// Formats `instant` as local wall-clock time in `time_zone`.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use worldclock_core::clock::format_in_zone;
///
/// let instant: Timestamp = "2024-03-01T00:00:00Z".parse().unwrap();
/// assert_eq!(format_in_zone(instant, "Asia/Seoul").unwrap(), "2024-03-01 09:00:00");
/// ```
pub fn format_in_zone(instant: Timestamp, time_zone: &str) -> Result<String> {
    Ok(ZonedTime::new(instant, time_zone)?.to_string())
}

/// One rendered row of the clock screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityTime {
    pub city: City,
    pub time: String,
}

/// Formats the same instant for every city, in list order.
///
/// Cities whose zone cannot be resolved get [`INVALID_ZONE_TEXT`] so one bad
/// entry never hides the others.
pub fn clock_rows(cities: &[City], instant: Timestamp) -> Vec<CityTime> {
    cities
        .iter()
        .map(|city| {
            let time = format_in_zone(instant, &city.time_zone).unwrap_or_else(|e| {
                log::debug!("Cannot format time for {}: {e}", city.display_name);
                INVALID_ZONE_TEXT.to_string()
            });
            CityTime {
                city: city.clone(),
                time,
            }
        })
        .collect()
}
