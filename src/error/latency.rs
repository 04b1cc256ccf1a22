use std::path::PathBuf;
use thiserror::Error;

/// Why a single latency log row was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordIssue {
    #[error("expected {expected} fields, found {actual}")]
    FieldCount { expected: usize, actual: usize },
    #[error("{column} value '{value}' is not a finite number")]
    NotNumeric { column: &'static str, value: String },
    #[error("{message}")]
    Malformed { message: String },
}

#[derive(Debug, Error)]
pub enum LatencyError {
    #[error("Failed to read latency log '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write latency log '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed row {row} in latency log '{path}': {reason}")]
    RecordParse {
        path: PathBuf,
        row: usize,
        reason: RecordIssue,
    },
    #[error("No data to aggregate: {failed} of {clients} client logs could not be read.")]
    NoData { clients: usize, failed: usize },
}
