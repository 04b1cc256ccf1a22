use tempfile::tempdir;

use super::{PlottersSink, TIME_SERIES_FILE, TimeUnit, distribution_file_name};
use crate::analysis::{MetricSelection, ViewKind, ViewRequest, render};
use crate::latency::{LatencyRecord, Metric, UnifiedDataset};

fn sample_dataset() -> UnifiedDataset {
    UnifiedDataset::from_clients([
        (
            1,
            vec![
                LatencyRecord::new(120.0, 40.0, 80.0),
                LatencyRecord::new(150.0, 45.0, 105.0),
                LatencyRecord::new(90.0, 30.0, 60.0),
                LatencyRecord::new(900.0, 50.0, 850.0),
            ],
        ),
        (2, vec![LatencyRecord::new(60.0, 20.0, 40.0)]),
    ])
}

#[test]
fn time_series_chart_is_written() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let charts = dir.path().join("charts");
    let mut sink = PlottersSink::new(&charts, TimeUnit::Ms);
    let request = ViewRequest::new(ViewKind::TimeSeries, MetricSelection::all());
    render(&request, &sample_dataset(), &mut sink).map_err(|err| err.to_string())?;

    let expected = charts.join(TIME_SERIES_FILE);
    if sink.written() != [expected.clone()] {
        return Err(format!("unexpected outputs {:?}", sink.written()));
    }
    if std::fs::metadata(&expected).is_err() {
        return Err("Missing time series output".to_owned());
    }
    Ok(())
}

#[test]
fn distribution_charts_are_written_per_metric() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let mut sink = PlottersSink::new(dir.path(), TimeUnit::S);
    let metrics = MetricSelection::new([Metric::Turnaround, Metric::Waiting])
        .map_err(|err| err.to_string())?;
    let request = ViewRequest::new(ViewKind::Distribution, metrics);
    render(&request, &sample_dataset(), &mut sink).map_err(|err| err.to_string())?;

    for metric in [Metric::Turnaround, Metric::Waiting] {
        let path = dir.path().join(distribution_file_name(metric));
        if std::fs::metadata(&path).is_err() {
            return Err(format!("Missing distribution output for {}", metric));
        }
    }
    if std::fs::metadata(dir.path().join(distribution_file_name(Metric::Execution))).is_ok() {
        return Err("Unselected metric was drawn".to_owned());
    }
    Ok(())
}

#[test]
fn axis_label_follows_time_unit() -> Result<(), String> {
    if TimeUnit::Ms.axis_label() != "Time (ms)" || TimeUnit::S.axis_label() != "Time (seconds)" {
        return Err("unexpected axis labels".to_owned());
    }
    if distribution_file_name(Metric::Execution) != "distribution_execution.png" {
        return Err("unexpected distribution file name".to_owned());
    }
    Ok(())
}
