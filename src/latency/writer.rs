use std::fs::{self, File, OpenOptions};
use std::path::Path;

use csv::WriterBuilder;

use crate::error::LatencyError;

use super::record::LatencyRecord;

/// Appends one record to a client latency log, creating the file and its
/// parent directory when missing.
///
/// # Errors
///
/// Returns [`LatencyError::FileWrite`] when the log cannot be opened or
/// written.
pub fn append_record(path: &Path, record: &LatencyRecord) -> Result<(), LatencyError> {
    let write_error = |err: std::io::Error| LatencyError::FileWrite {
        path: path.to_path_buf(),
        source: err,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(write_error)?;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    writer
        .write_record([
            record.turnaround.to_string(),
            record.execution.to_string(),
            record.waiting.to_string(),
        ])
        .map_err(|err| write_error(err.into()))?;
    writer.flush().map_err(write_error)
}

/// Truncates a client latency log so a new run starts empty.
///
/// # Errors
///
/// Returns [`LatencyError::FileWrite`] when the log cannot be created.
pub fn reset_log(path: &Path) -> Result<(), LatencyError> {
    File::create(path)
        .map(drop)
        .map_err(|err| LatencyError::FileWrite {
            path: path.to_path_buf(),
            source: err,
        })
}
