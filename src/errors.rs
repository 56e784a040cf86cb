/*!
 * Error types for the slokwai application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading or writing a single verse record
#[derive(Error, Debug)]
pub enum RecordError {
    /// Reading or writing the record file failed
    #[error("I/O error on {path:?}: {source}")]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The record is not a valid JSON document
    #[error("Failed to parse {path:?}: {source}")]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The record could not be encoded as JSON
    #[error("Failed to encode record: {0}")]
    Encode(#[source] serde_json::Error),

    /// The record's top-level value is not a JSON object
    #[error("Record is not a JSON object: {0:?}")]
    NotAnObject(PathBuf),

    /// The filename does not encode a chapter and verse number
    #[error("Filename does not encode chapter and verse: {0}")]
    InvalidFilename(String),
}

/// Errors that can occur when working with a whole corpus directory
#[derive(Error, Debug)]
pub enum CorpusError {
    /// The corpus directory does not exist
    #[error("Directory {0:?} does not exist")]
    MissingDirectory(PathBuf),

    /// No record in the corpus was usable for the requested operation
    #[error("No slok data found in {0:?}")]
    NoUsableRecords(PathBuf),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a single record
    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    /// Error from a corpus-wide operation
    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

