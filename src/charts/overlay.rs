use std::path::Path;

use plotters::prelude::*;

use crate::analysis::TimeSeriesChart;
use crate::error::AnalysisError;
use crate::latency::Metric;

use super::TimeUnit;

/// Headroom above the highest plotted value.
const Y_HEADROOM: f64 = 1.05;

pub(super) fn draw_time_series(
    path: &Path,
    chart: &TimeSeriesChart,
    unit: TimeUnit,
) -> Result<(), AnalysisError> {
    let root = BitMapBackend::new(path, (1600, 900)).into_drawing_area();
    root.fill(&WHITE)?;

    let points = || chart.lines.iter().flat_map(|line| line.points.iter().copied());
    let x_max = points()
        .map(|(index, _)| index)
        .max()
        .unwrap_or(0)
        .saturating_add(1);
    let y_peak = points().map(|(_, value)| value).fold(0.0_f64, f64::max);
    let y_max = if y_peak > 0.0 { y_peak * Y_HEADROOM } else { 1.0 };

    let mut plot = ChartBuilder::on(&root)
        .caption("Time Metrics Across Clients", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0usize..x_max, 0.0_f64..y_max)?;

    plot.configure_mesh()
        .x_desc("Request Index")
        .y_desc(unit.axis_label())
        .draw()?;

    for line in &chart.lines {
        let style = Palette99::pick(line.client_id).stroke_width(2);
        let series = line.points.iter().copied();
        // Solid turnaround, long dashes for execution, short dashes for waiting.
        let annotation = match line.metric {
            Metric::Turnaround => plot.draw_series(LineSeries::new(series, style))?,
            Metric::Execution => {
                plot.draw_series(DashedLineSeries::new(series, 10_u32, 6_u32, style))?
            }
            Metric::Waiting => plot.draw_series(DashedLineSeries::new(series, 2_u32, 4_u32, style))?,
        };
        annotation
            .label(format!("Client {} - {}", line.client_id, line.metric.label()))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x.saturating_add(20), y)], style));
    }

    plot.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}
