use std::path::PathBuf;

use plotters::prelude::{BitMapBackend, DrawingAreaErrorKind, DrawingBackend};
use thiserror::Error;

type PlottersError = DrawingAreaErrorKind<<BitMapBackend<'static> as DrawingBackend>::ErrorType>;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid view '{value}'. Use time-series or distribution.")]
    InvalidView { value: String },
    #[error("Invalid metric '{value}'. Use turnaround, execution, or waiting.")]
    InvalidMetric { value: String },
    #[error("At least one metric must be selected.")]
    NoMetrics,
    #[error("Failed to prepare chart output '{path}': {source}")]
    ChartOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Plotting error: {source}")]
    Plotters {
        #[from]
        source: PlottersError,
    },
}
