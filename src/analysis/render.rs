use tracing::debug;

use crate::error::AnalysisError;
use crate::latency::{Metric, UnifiedDataset};

use super::selection::{MetricSelection, ViewKind, ViewRequest};
use super::series::time_series;
use super::sink::{ChartSink, ClientBox, DistributionChart, SeriesLine, TimeSeriesChart};
use super::summary::FiveNumberSummary;

/// Builds the overlay: one line per client and selected metric, clients
/// ascending, metrics in column order within a client.
#[must_use]
pub fn time_series_chart(dataset: &UnifiedDataset, metrics: &MetricSelection) -> TimeSeriesChart {
    let lines = dataset
        .client_ids()
        .into_iter()
        .flat_map(|client_id| {
            metrics.metrics().iter().map(move |metric| SeriesLine {
                client_id,
                metric: *metric,
                points: time_series(dataset, client_id, *metric).collect(),
            })
        })
        .collect();
    TimeSeriesChart { lines }
}

/// Summarizes `metric` for every client present in the dataset.
#[must_use]
pub fn distribution_boxes(dataset: &UnifiedDataset, metric: Metric) -> Vec<ClientBox> {
    dataset
        .client_ids()
        .into_iter()
        .filter_map(|client_id| {
            let values: Vec<f64> = time_series(dataset, client_id, metric)
                .map(|(_, value)| value)
                .collect();
            FiveNumberSummary::from_values(&values).map(|summary| ClientBox { client_id, summary })
        })
        .collect()
}

/// Computes the requested view and hands it to `sink`.
///
/// A time-series request produces a single chart; a distribution request
/// produces one chart per selected metric. The dataset is only read.
///
/// # Errors
///
/// Propagates the first error returned by `sink`.
pub fn render<S>(
    request: &ViewRequest,
    dataset: &UnifiedDataset,
    sink: &mut S,
) -> Result<(), AnalysisError>
where
    S: ChartSink + ?Sized,
{
    match request.view {
        ViewKind::TimeSeries => {
            let chart = time_series_chart(dataset, &request.metrics);
            debug!("Rendering {} time series lines", chart.lines.len());
            sink.time_series(&chart)
        }
        ViewKind::Distribution => {
            for metric in request.metrics.metrics() {
                let chart = DistributionChart {
                    metric: *metric,
                    boxes: distribution_boxes(dataset, *metric),
                };
                debug!("Rendering {} distribution boxes for {}", chart.boxes.len(), metric);
                sink.distribution(&chart)?;
            }
            Ok(())
        }
    }
}
