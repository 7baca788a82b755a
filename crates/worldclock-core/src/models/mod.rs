//! Data models for cities, mutation outcomes and notices.
//!
//! Display implementations for these models live in
//! [`crate::display`] so that the data types stay free of presentation
//! concerns.
//!
//! # Examples
//!
//! ```rust
//! use worldclock_core::models::{AddOutcome, City, Notice};
//!
//! let seoul = City::new("1", "Seoul", "Asia/Seoul");
//! let outcome = AddOutcome::Added(seoul);
//!
//! let notice = Notice::for_add(&outcome).unwrap();
//! assert_eq!(notice.title(), "City Added");
//! assert_eq!(notice.message(), "Seoul added to world clock");
//! ```

pub mod city;
pub mod notice;
pub mod outcome;

#[cfg(test)]
mod tests;

pub use city::{CatalogEntry, City};
pub use notice::{Notice, NoticeEvent, NoticeKind};
pub use outcome::{AddOutcome, Outcome, RemoveOutcome, ReorderOutcome};
