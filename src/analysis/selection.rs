use std::fmt;
use std::str::FromStr;

use crate::error::AnalysisError;
use crate::latency::Metric;

/// Which chart to produce from the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// One line per client and metric over the request index.
    TimeSeries,
    /// One box per client for each metric.
    Distribution,
}

impl ViewKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ViewKind::TimeSeries => "time-series",
            ViewKind::Distribution => "distribution",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewKind {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "time-series" | "timeseries" | "series" => Ok(ViewKind::TimeSeries),
            "distribution" | "box" | "boxplot" => Ok(ViewKind::Distribution),
            _ => Err(AnalysisError::InvalidView {
                value: s.to_owned(),
            }),
        }
    }
}

/// Non-empty set of metrics, kept in log column order without duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSelection(Vec<Metric>);

impl MetricSelection {
    #[must_use]
    pub fn all() -> Self {
        Self(Metric::ALL.to_vec())
    }

    /// # Errors
    ///
    /// Returns [`AnalysisError::NoMetrics`] when `metrics` is empty.
    pub fn new<I>(metrics: I) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = Metric>,
    {
        let mut metrics: Vec<Metric> = metrics.into_iter().collect();
        metrics.sort_unstable();
        metrics.dedup();
        if metrics.is_empty() {
            return Err(AnalysisError::NoMetrics);
        }
        Ok(Self(metrics))
    }

    /// Parses metric names.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidMetric`] for an unknown name and
    /// [`AnalysisError::NoMetrics`] when `names` is empty.
    pub fn parse<I, S>(names: I) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let metrics = names
            .into_iter()
            .map(|name| name.as_ref().parse::<Metric>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(metrics)
    }

    #[must_use]
    pub fn metrics(&self) -> &[Metric] {
        &self.0
    }

    #[must_use]
    pub fn contains(&self, metric: Metric) -> bool {
        self.0.contains(&metric)
    }
}

impl Default for MetricSelection {
    fn default() -> Self {
        Self::all()
    }
}

/// A validated render request: view plus metric subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRequest {
    pub view: ViewKind,
    pub metrics: MetricSelection,
}

impl ViewRequest {
    #[must_use]
    pub const fn new(view: ViewKind, metrics: MetricSelection) -> Self {
        Self { view, metrics }
    }

    /// Builds a request from user-supplied names.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidView`] or
    /// [`AnalysisError::InvalidMetric`] for unsupported names and
    /// [`AnalysisError::NoMetrics`] for an empty metric list.
    pub fn parse<I, S>(view: &str, metrics: I) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            view: view.parse()?,
            metrics: MetricSelection::parse(metrics)?,
        })
    }
}
