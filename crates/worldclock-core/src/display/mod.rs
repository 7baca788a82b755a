//! Display formatting for clock readings, search results and notices.
//!
//! Domain models stay free of presentation code; this module provides
//! [`std::fmt::Display`] implementations and newtype wrappers that render them
//! as markdown for the terminal.
//!
//! - [`collections`]: the clock board and catalog search results
//! - [`datetime`]: zoned timestamp formatting
//! - [`notice`]: `Display` for [`crate::models::Notice`]

pub mod collections;
pub mod datetime;
pub mod notice;

pub use collections::{ClockBoard, SearchHit, SearchResults};
pub use datetime::ZonedTime;
