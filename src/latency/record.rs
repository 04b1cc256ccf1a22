use std::fmt;
use std::str::FromStr;

use crate::error::AnalysisError;

/// One of the three timings carried by every latency record, in log column
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    Turnaround,
    Execution,
    Waiting,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Turnaround, Metric::Execution, Metric::Waiting];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Metric::Turnaround => "turnaround",
            Metric::Execution => "execution",
            Metric::Waiting => "waiting",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Metric::Turnaround => "Turnaround Time",
            Metric::Execution => "Execution Time",
            Metric::Waiting => "Waiting Time",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "turnaround" | "turnaround-time" => Ok(Metric::Turnaround),
            "execution" | "execution-time" => Ok(Metric::Execution),
            "waiting" | "waiting-time" => Ok(Metric::Waiting),
            _ => Err(AnalysisError::InvalidMetric {
                value: s.to_owned(),
            }),
        }
    }
}

/// Timings of one completed request, in the unit the client logged them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatencyRecord {
    pub turnaround: f64,
    pub execution: f64,
    pub waiting: f64,
}

impl LatencyRecord {
    #[must_use]
    pub const fn new(turnaround: f64, execution: f64, waiting: f64) -> Self {
        Self {
            turnaround,
            execution,
            waiting,
        }
    }

    #[must_use]
    pub const fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Turnaround => self.turnaround,
            Metric::Execution => self.execution,
            Metric::Waiting => self.waiting,
        }
    }

    /// Turnaround covers both execution and waiting time.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.turnaround >= self.execution && self.turnaround >= self.waiting
    }
}
