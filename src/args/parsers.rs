use crate::analysis::ViewKind;
use crate::error::{AnalysisError, ValidationError};
use crate::latency::Metric;

use super::types::PositiveUsize;

pub(super) fn parse_positive_usize(s: &str) -> Result<PositiveUsize, ValidationError> {
    s.parse::<PositiveUsize>()
}

/// Parses a view name for `--view`.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidView`] for an unsupported name.
pub fn parse_view(s: &str) -> Result<ViewKind, AnalysisError> {
    s.parse()
}

/// Parses a metric name for `--metric`.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidMetric`] for an unsupported name.
pub fn parse_metric(s: &str) -> Result<Metric, AnalysisError> {
    s.parse()
}
