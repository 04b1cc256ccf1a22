use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::error::WorkloadError;

use super::generator::generate_line;
use super::random::{RandomSource, client_source};
use super::request::RequestLine;

/// File name of the workload for 1-based client `client`.
#[must_use]
pub fn workload_file_name(client: usize) -> String {
    format!("client_{}.txt", client)
}

/// Writes `line_count` freshly generated request lines to `path`.
///
/// Lines go to a sibling staging file which is renamed over `path` once
/// flushed, so readers see either the old content or the complete new file.
///
/// # Errors
///
/// Returns [`WorkloadError::FileWrite`] when the staging file cannot be
/// written or moved into place.
pub fn write_workload<R>(path: &Path, line_count: usize, source: &mut R) -> Result<(), WorkloadError>
where
    R: RandomSource + ?Sized,
{
    let staging = staging_path(path);
    let result = write_lines(&staging, line_count, source)
        .and_then(|()| fs::rename(&staging, path))
        .map_err(|err| WorkloadError::FileWrite {
            path: path.to_path_buf(),
            source: err,
        });
    if result.is_err()
        && let Err(err) = fs::remove_file(&staging)
    {
        debug!("Could not remove staging file {}: {}", staging.display(), err);
    }
    result
}

fn write_lines<R>(path: &Path, line_count: usize, source: &mut R) -> std::io::Result<()>
where
    R: RandomSource + ?Sized,
{
    let mut writer = BufWriter::new(File::create(path)?);
    for _ in 0..line_count {
        writeln!(writer, "{}", generate_line(source))?;
    }
    writer.flush()?;
    writer.get_ref().sync_all()
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(OsString::new, |name| name.to_os_string());
    name.push(".tmp");
    path.with_file_name(name)
}

/// Outcome of a multi-client generation run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<WorkloadError>,
}

impl GenerationReport {
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Writes `client_<k>.txt` for `k` in `1..=clients` under `dir`.
///
/// Each file gets its own random source (see [`client_source`]). A file that
/// fails to write is recorded in the report and does not stop the others.
///
/// # Errors
///
/// Returns [`WorkloadError::FileWrite`] only when `dir` itself cannot be
/// created.
pub fn write_workloads(
    dir: &Path,
    clients: usize,
    line_count: usize,
    seed: Option<u64>,
) -> Result<GenerationReport, WorkloadError> {
    fs::create_dir_all(dir).map_err(|err| WorkloadError::FileWrite {
        path: dir.to_path_buf(),
        source: err,
    })?;

    let mut report = GenerationReport::default();
    for client in 1..=clients {
        let path = dir.join(workload_file_name(client));
        let mut source = client_source(seed, client);
        match write_workload(&path, line_count, &mut source) {
            Ok(()) => {
                info!("Wrote {} requests to {}", line_count, path.display());
                report.written.push(path);
            }
            Err(err) => {
                error!("{}", err);
                report.failures.push(err);
            }
        }
    }
    Ok(report)
}

/// Reads a workload file back, validating every line against the catalog.
///
/// # Errors
///
/// Returns [`WorkloadError::FileRead`] when the file cannot be read and
/// [`WorkloadError::InvalidRequestLine`] for the first line that does not
/// parse.
pub fn read_workload(path: &Path) -> Result<Vec<RequestLine>, WorkloadError> {
    let content = fs::read_to_string(path).map_err(|err| WorkloadError::FileRead {
        path: path.to_path_buf(),
        source: err,
    })?;
    content
        .lines()
        .enumerate()
        .map(|(index, line)| {
            line.parse::<RequestLine>()
                .map_err(|err| WorkloadError::InvalidRequestLine {
                    path: path.to_path_buf(),
                    line: index.saturating_add(1),
                    source: err,
                })
        })
        .collect()
}
