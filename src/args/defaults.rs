use super::types::PositiveUsize;

/// Workload files generated per run unless overridden.
pub(crate) const DEFAULT_GENERATE_CLIENTS: PositiveUsize = PositiveUsize::new_or_min(5);
/// Lines written to each workload file.
pub(crate) const DEFAULT_LINES_PER_CLIENT: usize = 1_000;
/// Client logs analyzed unless overridden.
pub(crate) const DEFAULT_ANALYZE_CLIENTS: PositiveUsize = PositiveUsize::new_or_min(1);

pub(crate) fn default_output_dir() -> String {
    "request_files".to_owned()
}

pub(crate) fn default_log_dir() -> String {
    "log".to_owned()
}

pub(crate) fn default_charts_path() -> String {
    "charts".to_owned()
}
