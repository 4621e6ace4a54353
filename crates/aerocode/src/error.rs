//! Error types for aerocode.
//!
//! The search, tally, grouping and classification functions never fail. The
//! errors here cover everything around them: loading configuration, reading
//! a seed file, and building record stores whose invariants do not hold.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::Domain;

/// The main error type for aerocode operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Seed Errors ===
    /// Failed to read a seed file.
    #[error("failed to read seed file {path}: {source}")]
    SeedRead {
        /// Path to the seed file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Record Store Errors ===
    /// Two records of the same domain share an id.
    #[error("duplicate {domain} id '{id}'")]
    DuplicateId {
        /// Domain of the offending records.
        domain: Domain,
        /// The repeated id.
        id: String,
    },

    /// A progress value lies outside 0..=100.
    #[error("{domain} '{id}' has progress {progress}, expected 0..=100")]
    ProgressOutOfRange {
        /// Domain of the offending record.
        domain: Domain,
        /// Id of the offending record.
        id: String,
        /// The rejected value.
        progress: u8,
    },

    // === Lookup Errors ===
    /// A view name did not match any known view.
    #[error("unknown view '{0}'")]
    UnknownView(String),

    /// No record of the domain has the requested id.
    #[error("no {domain} with id '{id}'")]
    RecordNotFound {
        /// Domain searched.
        domain: Domain,
        /// The id that was not found.
        id: String,
    },

    // === I/O Errors ===
    /// File system or terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for aerocode operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a duplicate id error.
    #[must_use]
    pub fn duplicate_id(domain: Domain, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            domain,
            id: id.into(),
        }
    }

    /// Create a record not found error.
    #[must_use]
    pub fn record_not_found(domain: Domain, id: impl Into<String>) -> Self {
        Self::RecordNotFound {
            domain,
            id: id.into(),
        }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error reports a broken record invariant.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Self::DuplicateId { .. } | Self::ProgressOutOfRange { .. }
        )
    }
}
