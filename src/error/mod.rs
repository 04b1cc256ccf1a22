mod analysis;
mod app;
mod config;
mod latency;
mod validation;
mod workload;

pub use analysis::AnalysisError;
pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use latency::{LatencyError, RecordIssue};
pub use validation::ValidationError;
pub use workload::{RequestLineError, WorkloadError};
