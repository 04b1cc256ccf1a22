//! Per-client latency logs and their aggregation.
//!
//! Each simulated client appends one `turnaround,execution,waiting` row per
//! completed request to `client_data_z<k>.csv`. The reader turns one log into
//! [`LatencyRecord`]s; the aggregator merges all clients into a
//! [`UnifiedDataset`] tagged with client identity and row position.
mod aggregate;
mod reader;
mod record;
mod writer;


pub use aggregate::{Aggregation, ClientFailure, DatasetRow, UnifiedDataset, aggregate};
pub use reader::{client_log_paths, log_file_name, read_records};
pub use record::{LatencyRecord, Metric};
pub use writer::{append_record, reset_log};
