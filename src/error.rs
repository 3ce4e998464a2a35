//! Error types for the itempress library.

use std::io;
use thiserror::Error;

/// Result type alias for itempress operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during a catalog import.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the catalog document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The catalog JSON is malformed or violates the document contract
    /// (missing mandatory fields, unrecognized block kind, wrong types).
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A batch could not be serialized for size accounting or transfer.
    #[error("batch serialization error for batch of {count} records: {source}")]
    BatchSerialize {
        /// Number of records in the offending batch
        count: usize,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A submission collaborator reported a transport or status failure.
    #[error("submission failed for batch of {count} records: {reason}")]
    Submission {
        /// Number of records in the rejected batch
        count: usize,
        /// Human-readable failure description
        reason: String,
    },

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Build a submission error from a batch size and failure description.
    pub fn submission(count: usize, reason: impl Into<String>) -> Self {
        Error::Submission {
            count,
            reason: reason.into(),
        }
    }
}
