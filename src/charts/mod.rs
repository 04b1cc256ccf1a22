//! PNG chart output backed by `plotters`.
mod boxes;
mod overlay;

#[cfg(test)]
mod tests;

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::{ChartSink, DistributionChart, TimeSeriesChart};
use crate::error::AnalysisError;
use crate::latency::Metric;

/// Unit the latency logs were recorded in; only affects axis labels.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[default]
    Ms,
    S,
}

impl TimeUnit {
    #[must_use]
    pub const fn axis_label(self) -> &'static str {
        match self {
            TimeUnit::Ms => "Time (ms)",
            TimeUnit::S => "Time (seconds)",
        }
    }
}

/// File name of the time-series overlay.
pub const TIME_SERIES_FILE: &str = "time_series.png";

/// File name of the distribution chart for `metric`.
#[must_use]
pub fn distribution_file_name(metric: Metric) -> String {
    format!("distribution_{}.png", metric.as_str())
}

/// Chart sink that writes one PNG per chart into a directory.
pub struct PlottersSink {
    dir: PathBuf,
    unit: TimeUnit,
    written: Vec<PathBuf>,
}

impl PlottersSink {
    #[must_use]
    pub fn new(dir: &Path, unit: TimeUnit) -> Self {
        Self {
            dir: dir.to_path_buf(),
            unit,
            written: Vec::new(),
        }
    }

    /// Paths of the charts written so far, in drawing order.
    #[must_use]
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn prepare(&self, file_name: &str) -> Result<PathBuf, AnalysisError> {
        fs::create_dir_all(&self.dir).map_err(|err| AnalysisError::ChartOutput {
            path: self.dir.clone(),
            source: err,
        })?;
        Ok(self.dir.join(file_name))
    }

    fn finish(&mut self, path: PathBuf) {
        info!("Wrote chart {}", path.display());
        self.written.push(path);
    }
}

impl ChartSink for PlottersSink {
    fn time_series(&mut self, chart: &TimeSeriesChart) -> Result<(), AnalysisError> {
        let path = self.prepare(TIME_SERIES_FILE)?;
        overlay::draw_time_series(&path, chart, self.unit)?;
        self.finish(path);
        Ok(())
    }

    fn distribution(&mut self, chart: &DistributionChart) -> Result<(), AnalysisError> {
        let path = self.prepare(&distribution_file_name(chart.metric))?;
        boxes::draw_distribution(&path, chart, self.unit)?;
        self.finish(path);
        Ok(())
    }
}
