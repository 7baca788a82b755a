//! DateTime display utilities.

use std::fmt;

use jiff::{Timestamp, Zoned};

use crate::{clock::CLOCK_FORMAT, error::Result};

/// A timestamp resolved in a named time zone, displayed as wall-clock time.
///
/// # Format
///
/// `YYYY-MM-DD HH:MM:SS`
/// - Year, month, and day are zero-padded
/// - Time is in 24-hour format with zero-padded components
/// - No zone suffix, so values line up in fixed-width columns
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use worldclock_core::display::ZonedTime;
///
/// let instant: Timestamp = "2024-03-01T00:00:00Z".parse().unwrap();
/// let tokyo = ZonedTime::new(instant, "Asia/Tokyo").unwrap();
/// assert_eq!(tokyo.to_string(), "2024-03-01 09:00:00");
/// ```
#[derive(Debug, Clone)]
pub struct ZonedTime(Zoned);

impl ZonedTime {
    /// Resolves `instant` in `time_zone`.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::InvalidTimeZone` if the zone is unknown.
    pub fn new(instant: Timestamp, time_zone: &str) -> Result<Self> {
        crate::clock::zoned(instant, time_zone).map(Self)
    }

    pub fn zoned(&self) -> &Zoned {
        &self.0
    }
}

impl fmt::Display for ZonedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime(CLOCK_FORMAT))
    }
}
