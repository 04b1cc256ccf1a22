use std::path::PathBuf;
use thiserror::Error;

use crate::workload::ArgKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestLineError {
    #[error("Request line is empty.")]
    Empty,
    #[error("Unknown function '{name}'.")]
    UnknownFunction { name: String },
    #[error("'{function}' expects {expected} tokens, found {actual}.")]
    TokenCount {
        function: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("Invalid {kind} argument '{value}'.")]
    InvalidArgument { kind: ArgKind, value: String },
    #[error("Invalid zone tag '{value}'. Expected 'Zone:<1-5>'.")]
    InvalidZone { value: String },
}

#[derive(Debug, Error)]
pub enum WorkloadError {
    #[error("Failed to write workload file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read workload file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid request at '{path}' line {line}: {source}")]
    InvalidRequestLine {
        path: PathBuf,
        line: usize,
        #[source]
        source: RequestLineError,
    },
}
