use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::warn;

use crate::error::{LatencyError, RecordIssue};

use super::record::{LatencyRecord, Metric};

/// File name of the latency log for 1-based client `client`.
#[must_use]
pub fn log_file_name(client: usize) -> String {
    format!("client_data_z{}.csv", client)
}

/// Log paths for clients `1..=clients` under `dir`, in client order.
#[must_use]
pub fn client_log_paths(dir: &Path, clients: usize) -> Vec<PathBuf> {
    (1..=clients)
        .map(|client| dir.join(log_file_name(client)))
        .collect()
}

/// Reads every record of one client's latency log, in file order.
///
/// The log has no header and exactly three numeric columns per row. Blank
/// lines are skipped. Rows whose turnaround is below their execution or
/// waiting time are kept but logged.
///
/// # Errors
///
/// Returns [`LatencyError::FileRead`] when the file cannot be opened or read
/// and [`LatencyError::RecordParse`] for the first malformed row.
pub fn read_records(path: &Path) -> Result<Vec<LatencyRecord>, LatencyError> {
    let file = File::open(path).map_err(|err| LatencyError::FileRead {
        path: path.to_path_buf(),
        source: err,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(BufReader::new(file));

    let mut records = Vec::new();
    let mut row = StringRecord::new();
    loop {
        let row_number = records.len().saturating_add(1);
        match reader.read_record(&mut row) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => return Err(csv_error(path, line_of(&row, row_number), err)),
        }
        let line = line_of(&row, row_number);
        let record = parse_row(&row).map_err(|reason| LatencyError::RecordParse {
            path: path.to_path_buf(),
            row: line,
            reason,
        })?;
        if !record.is_consistent() {
            warn!(
                "Row {} of {}: turnaround {} is below execution {} or waiting {}",
                line,
                path.display(),
                record.turnaround,
                record.execution,
                record.waiting
            );
        }
        records.push(record);
    }
    Ok(records)
}

fn line_of(row: &StringRecord, fallback: usize) -> usize {
    row.position()
        .and_then(|position| usize::try_from(position.line()).ok())
        .unwrap_or(fallback)
}

fn csv_error(path: &Path, row: usize, err: csv::Error) -> LatencyError {
    let message = err.to_string();
    if let csv::ErrorKind::Io(source) = err.into_kind() {
        return LatencyError::FileRead {
            path: path.to_path_buf(),
            source,
        };
    }
    LatencyError::RecordParse {
        path: path.to_path_buf(),
        row,
        reason: RecordIssue::Malformed { message },
    }
}

pub(super) fn parse_row(row: &StringRecord) -> Result<LatencyRecord, RecordIssue> {
    if row.len() != Metric::ALL.len() {
        return Err(RecordIssue::FieldCount {
            expected: Metric::ALL.len(),
            actual: row.len(),
        });
    }
    let mut values = [0.0_f64; 3];
    for ((slot, metric), field) in values.iter_mut().zip(Metric::ALL).zip(row.iter()) {
        *slot = field
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| RecordIssue::NotNumeric {
                column: metric.as_str(),
                value: field.to_owned(),
            })?;
    }
    let [turnaround, execution, waiting] = values;
    Ok(LatencyRecord::new(turnaround, execution, waiting))
}
