use crate::latency::{Metric, UnifiedDataset};

/// Lazily yields `(request_index, value)` for one client and metric, ordered
/// by request index.
pub fn time_series(
    dataset: &UnifiedDataset,
    client_id: usize,
    metric: Metric,
) -> impl Iterator<Item = (usize, f64)> + '_ {
    dataset
        .client_rows(client_id)
        .map(move |row| (row.request_index, row.record.value(metric)))
}
