/// Tukey fence multiplier applied to the interquartile range.
const WHISKER_IQR_FACTOR: f64 = 1.5;

/// Five-number summary of one client's values for one metric.
///
/// Quartiles use linear interpolation between closest ranks. `min` and `max`
/// are the whisker ends: the most extreme values that still lie within
/// 1.5 x IQR of the box. Values beyond the fences are listed in `outliers`
/// but still count towards the quartiles.
#[derive(Debug, Clone, PartialEq)]
pub struct FiveNumberSummary {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub outliers: Vec<f64>,
}

impl FiveNumberSummary {
    /// Returns `None` for an empty sample.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile(&sorted, 0.25)?;
        let median = quantile(&sorted, 0.5)?;
        let q3 = quantile(&sorted, 0.75)?;
        let reach = (q3 - q1) * WHISKER_IQR_FACTOR;
        let (lower_fence, upper_fence) = (q1 - reach, q3 + reach);

        let inside = || {
            sorted
                .iter()
                .copied()
                .filter(move |value| (lower_fence..=upper_fence).contains(value))
        };
        let min = inside().next()?;
        let max = inside().last()?;
        let outliers = sorted
            .iter()
            .copied()
            .filter(|value| !(lower_fence..=upper_fence).contains(value))
            .collect();

        Some(Self {
            count: sorted.len(),
            min,
            q1,
            median,
            q3,
            max,
            outliers,
        })
    }

    #[must_use]
    pub const fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Quantile `q` in `[0, 1]` of an ascending slice.
fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let position = q.clamp(0.0, 1.0) * last as f64;
    let lower_index = position.floor() as usize;
    let upper_index = position.ceil() as usize;
    let lower = *sorted.get(lower_index)?;
    let upper = *sorted.get(upper_index)?;
    // Weighted form stays finite for any finite pair, unlike `upper - lower`.
    let weight = position - lower_index as f64;
    Some(lower * (1.0 - weight) + upper * weight)
}
