use crate::error::AnalysisError;
use crate::latency::Metric;

use super::summary::FiveNumberSummary;

/// One line of the time-series overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLine {
    pub client_id: usize,
    pub metric: Metric,
    pub points: Vec<(usize, f64)>,
}

/// All lines sharing one request-index/time plane.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeSeriesChart {
    pub lines: Vec<SeriesLine>,
}

/// Summary box for one client.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientBox {
    pub client_id: usize,
    pub summary: FiveNumberSummary,
}

/// Per-client boxes for a single metric.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionChart {
    pub metric: Metric,
    pub boxes: Vec<ClientBox>,
}

/// Receiver of prepared chart data. Implementations draw, store, or record
/// it; they must not need anything beyond the chart value itself.
pub trait ChartSink {
    /// # Errors
    ///
    /// Returns an error when the chart cannot be drawn.
    fn time_series(&mut self, chart: &TimeSeriesChart) -> Result<(), AnalysisError>;

    /// # Errors
    ///
    /// Returns an error when the chart cannot be drawn.
    fn distribution(&mut self, chart: &DistributionChart) -> Result<(), AnalysisError>;
}
