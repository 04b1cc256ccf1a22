//! Views over a [`UnifiedDataset`](crate::latency::UnifiedDataset).
//!
//! The analysis side only selects and summarizes data; drawing is delegated
//! to a [`ChartSink`], so everything here is testable without a rendering
//! backend.
mod render;
mod report;
mod selection;
mod series;
mod sink;
mod summary;


pub use render::{distribution_boxes, render, time_series_chart};
pub use report::summary_lines;
pub use selection::{MetricSelection, ViewKind, ViewRequest};
pub use series::time_series;
pub use sink::{ChartSink, ClientBox, DistributionChart, SeriesLine, TimeSeriesChart};
pub use summary::FiveNumberSummary;
