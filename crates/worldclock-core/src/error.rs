//! Error types for the world clock library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all world clock operations.
///
/// Only storage backends, the time formatter and catalog lookups produce
/// errors. The watch-list store itself recovers from storage failures by
/// logging them, so its mutation methods return outcomes instead.
#[derive(Error, Debug)]
pub enum ClockError {
    /// SQLite connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// The time zone identifier could not be resolved by the tz database
    #[error("Unknown time zone '{zone}': {source}")]
    InvalidTimeZone {
        zone: String,
        #[source]
        source: jiff::Error,
    },
    /// No catalog city has the given ID
    #[error("City with ID {id} not found")]
    CityNotFound { id: String },
    /// Configuration and runtime wiring errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> ClockError {
        ClockError::Database {
            message: self.message,
            source,
        }
    }
}

impl ClockError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Wraps a blocking task join failure.
    pub(crate) fn join(e: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {e}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ClockError::database(message).with_source(e))
    }
}

/// Result type alias for world clock operations
pub type Result<T> = std::result::Result<T, ClockError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_context_wraps_message() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::InvalidQuery);
        let err = result.db_context("Failed to read key").unwrap_err();
        assert_eq!(err.to_string(), "Database error: Failed to read key");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_city_not_found_message() {
        let err = ClockError::CityNotFound {
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "City with ID 42 not found");
    }
}
