use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::LatencyError;

use super::reader::read_records;
use super::record::LatencyRecord;

/// A latency record tagged with where it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetRow {
    /// 1-based position of the source log in the aggregated path list.
    pub client_id: usize,
    /// 0-based row position inside the source log.
    pub request_index: usize,
    pub record: LatencyRecord,
}

/// All clients' records, ordered by client id and then by row position.
///
/// Built once by [`aggregate`] or [`UnifiedDataset::from_clients`] and never
/// mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnifiedDataset {
    rows: Vec<DatasetRow>,
}

impl UnifiedDataset {
    /// Concatenates per-client record lists in ascending client id order.
    ///
    /// Duplicate ids are merged in the order given, keeping each client's
    /// rows contiguous; request indices continue across the merged batches.
    #[must_use]
    pub fn from_clients<I>(clients: I) -> Self
    where
        I: IntoIterator<Item = (usize, Vec<LatencyRecord>)>,
    {
        let mut clients: Vec<(usize, Vec<LatencyRecord>)> = clients.into_iter().collect();
        clients.sort_by_key(|(client_id, _)| *client_id);

        let capacity = clients.iter().map(|(_, records)| records.len()).sum();
        let mut rows: Vec<DatasetRow> = Vec::with_capacity(capacity);
        for (client_id, records) in clients {
            let start = match rows.last() {
                Some(last) if last.client_id == client_id => last.request_index.saturating_add(1),
                Some(_) | None => 0,
            };
            rows.extend(records.into_iter().enumerate().map(|(offset, record)| {
                DatasetRow {
                    client_id,
                    request_index: start.saturating_add(offset),
                    record,
                }
            }));
        }
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct client ids present, ascending.
    #[must_use]
    pub fn client_ids(&self) -> Vec<usize> {
        let mut ids: Vec<usize> = self.rows.iter().map(|row| row.client_id).collect();
        ids.dedup();
        ids
    }

    /// Rows of one client in request order.
    pub fn client_rows(&self, client_id: usize) -> impl Iterator<Item = &DatasetRow> + '_ {
        self.rows
            .iter()
            .skip_while(move |row| row.client_id != client_id)
            .take_while(move |row| row.client_id == client_id)
    }
}

/// A client whose log did not make it into the dataset.
#[derive(Debug)]
pub struct ClientFailure {
    pub client_id: usize,
    pub path: PathBuf,
    pub error: LatencyError,
}

/// Result of [`aggregate`]: the merged dataset plus per-client diagnostics.
#[derive(Debug)]
pub struct Aggregation {
    pub dataset: UnifiedDataset,
    pub failures: Vec<ClientFailure>,
}

/// Reads every log in `paths` and merges them into one dataset.
///
/// Client ids follow the position in `paths` (1-based), so a client whose log
/// fails keeps its slot and later clients are not renumbered. Logs are read in
/// parallel and reassembled in input order.
///
/// # Errors
///
/// Returns [`LatencyError::NoData`] when no log contributed any row.
pub fn aggregate<P>(paths: &[P]) -> Result<Aggregation, LatencyError>
where
    P: AsRef<Path> + Sync,
{
    let results: Vec<Result<Vec<LatencyRecord>, LatencyError>> = paths
        .par_iter()
        .map(|path| read_records(path.as_ref()))
        .collect();

    let mut clients = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for (index, (path, result)) in paths.iter().zip(results).enumerate() {
        let client_id = index.saturating_add(1);
        match result {
            Ok(records) => {
                debug!(
                    "Client {} contributed {} records from {}",
                    client_id,
                    records.len(),
                    path.as_ref().display()
                );
                clients.push((client_id, records));
            }
            Err(err) => {
                warn!("Skipping client {}: {}", client_id, err);
                failures.push(ClientFailure {
                    client_id,
                    path: path.as_ref().to_path_buf(),
                    error: err,
                });
            }
        }
    }

    let dataset = UnifiedDataset::from_clients(clients);
    if dataset.is_empty() {
        return Err(LatencyError::NoData {
            clients: paths.len(),
            failed: failures.len(),
        });
    }
    Ok(Aggregation { dataset, failures })
}
