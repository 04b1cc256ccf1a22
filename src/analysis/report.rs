use crate::latency::UnifiedDataset;

use super::render::distribution_boxes;
use super::selection::MetricSelection;

/// Text table of per-client summaries, one line per client and metric.
#[must_use]
pub fn summary_lines(dataset: &UnifiedDataset, metrics: &MetricSelection) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<8} {:<11} {:>7} {:>10} {:>10} {:>10} {:>10} {:>10} {:>8}",
        "Client", "Metric", "Count", "Min", "Q1", "Median", "Q3", "Max", "Outliers"
    )];
    for metric in metrics.metrics() {
        for client_box in distribution_boxes(dataset, *metric) {
            let summary = &client_box.summary;
            lines.push(format!(
                "{:<8} {:<11} {:>7} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>8}",
                client_box.client_id,
                metric.as_str(),
                summary.count,
                summary.min,
                summary.q1,
                summary.median,
                summary.q3,
                summary.max,
                summary.outliers.len()
            ));
        }
    }
    lines
}
