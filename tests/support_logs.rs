use std::path::Path;

use zonebench::latency::{LatencyRecord, append_record, log_file_name};

/// Writes `client_data_z<client>.csv` under `dir` with the given rows.
///
/// # Errors
///
/// Returns an error if the log cannot be written.
pub fn write_client_log(dir: &Path, client: usize, rows: &[(f64, f64, f64)]) -> Result<(), String> {
    let path = dir.join(log_file_name(client));
    for (turnaround, execution, waiting) in rows {
        append_record(
            &path,
            &LatencyRecord::new(*turnaround, *execution, *waiting),
        )
        .map_err(|err| format!("append failed: {}", err))?;
    }
    Ok(())
}
