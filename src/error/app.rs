use thiserror::Error;

use super::{AnalysisError, ConfigError, LatencyError, WorkloadError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("Workload error: {0}")]
    Workload(#[from] WorkloadError),
    #[error("Latency log error: {0}")]
    Latency(#[from] LatencyError),
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn workload<E>(error: E) -> Self
    where
        E: Into<WorkloadError>,
    {
        error.into().into()
    }
}
