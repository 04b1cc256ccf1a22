use std::path::Path;

use plotters::prelude::*;

use crate::analysis::DistributionChart;
use crate::error::AnalysisError;

use super::TimeUnit;

/// Half the width of a box, in client slots.
const BOX_HALF_WIDTH: f64 = 0.3;
const CAP_HALF_WIDTH: f64 = 0.15;
const Y_HEADROOM: f64 = 1.1;

pub(super) fn draw_distribution(
    path: &Path,
    chart: &DistributionChart,
    unit: TimeUnit,
) -> Result<(), AnalysisError> {
    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let values = || {
        chart.boxes.iter().flat_map(|client_box| {
            let summary = &client_box.summary;
            [summary.min, summary.max]
                .into_iter()
                .chain(summary.outliers.iter().copied())
        })
    };
    let y_low = values().fold(0.0_f64, f64::min);
    let y_peak = values().fold(0.0_f64, f64::max);
    let y_high = if y_peak > 0.0 { y_peak * Y_HEADROOM } else { 1.0 };
    let slots = chart.boxes.len() as f64 + 1.0;

    let label_at = |x: &f64| {
        let slot = x.round();
        if (x - slot).abs() > f64::EPSILON || slot < 1.0 {
            return String::new();
        }
        (slot as usize)
            .checked_sub(1)
            .and_then(|index| chart.boxes.get(index))
            .map(|client_box| format!("Client {}", client_box.client_id))
            .unwrap_or_default()
    };

    let mut plot = ChartBuilder::on(&root)
        .caption(
            format!("{} by Client", chart.metric.label()),
            ("sans-serif", 30),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0_f64..slots, y_low..y_high)?;

    plot.configure_mesh()
        .disable_x_mesh()
        .x_labels(chart.boxes.len().saturating_add(2))
        .x_label_formatter(&label_at)
        .x_desc("Client")
        .y_desc(unit.axis_label())
        .draw()?;

    for (slot, client_box) in chart.boxes.iter().enumerate() {
        let x = slot as f64 + 1.0;
        let summary = &client_box.summary;
        let color = Palette99::pick(client_box.client_id).to_rgba();
        let outline = color.stroke_width(2);

        plot.draw_series([Rectangle::new(
            [(x - BOX_HALF_WIDTH, summary.q1), (x + BOX_HALF_WIDTH, summary.q3)],
            color.mix(0.3).filled(),
        )])?;
        plot.draw_series([Rectangle::new(
            [(x - BOX_HALF_WIDTH, summary.q1), (x + BOX_HALF_WIDTH, summary.q3)],
            outline,
        )])?;

        let whiskers = [
            vec![(x, summary.q1), (x, summary.min)],
            vec![(x, summary.q3), (x, summary.max)],
            vec![(x - CAP_HALF_WIDTH, summary.min), (x + CAP_HALF_WIDTH, summary.min)],
            vec![(x - CAP_HALF_WIDTH, summary.max), (x + CAP_HALF_WIDTH, summary.max)],
        ];
        plot.draw_series(
            whiskers
                .into_iter()
                .map(|segment| PathElement::new(segment, outline)),
        )?;
        plot.draw_series([PathElement::new(
            vec![
                (x - BOX_HALF_WIDTH, summary.median),
                (x + BOX_HALF_WIDTH, summary.median),
            ],
            BLACK.stroke_width(2),
        )])?;
        plot.draw_series(
            summary
                .outliers
                .iter()
                .map(|value| Circle::new((x, *value), 3, color.stroke_width(1))),
        )?;
    }

    root.present()?;
    Ok(())
}
