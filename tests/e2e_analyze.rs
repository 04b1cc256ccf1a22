mod support;
mod support_logs;

use tempfile::tempdir;

use support::{describe, run_zonebench};
use support_logs::write_client_log;
use zonebench::analysis::{MetricSelection, ViewKind, ViewRequest, render};
use zonebench::charts::{PlottersSink, TIME_SERIES_FILE, TimeUnit};
use zonebench::latency::{aggregate, client_log_paths};

fn summary_rows(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(str::to_owned)
        .collect()
}

#[test]
fn e2e_analyze_library_skips_missing_client() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    write_client_log(dir.path(), 1, &[(10.0, 6.0, 4.0), (12.0, 7.0, 5.0)])?;
    write_client_log(dir.path(), 3, &[(20.0, 15.0, 5.0)])?;

    let paths = client_log_paths(dir.path(), 3);
    let aggregation = aggregate(&paths).map_err(|err| format!("aggregate failed: {}", err))?;
    if aggregation.dataset.client_ids() != [1, 3] {
        return Err(format!(
            "Unexpected clients {:?}",
            aggregation.dataset.client_ids()
        ));
    }
    if aggregation.failures.len() != 1 {
        return Err(format!("Expected one failure, got {:?}", aggregation.failures));
    }

    let charts = dir.path().join("charts");
    let mut sink = PlottersSink::new(&charts, TimeUnit::Ms);
    let request = ViewRequest::new(ViewKind::TimeSeries, MetricSelection::all());
    render(&request, &aggregation.dataset, &mut sink)
        .map_err(|err| format!("render failed: {}", err))?;
    if !charts.join(TIME_SERIES_FILE).exists() {
        return Err("Missing time series chart".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_analyze_cli_prints_summary() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    write_client_log(dir.path(), 1, &[(10.0, 6.0, 4.0)])?;
    write_client_log(dir.path(), 2, &[(20.0, 15.0, 5.0)])?;
    let log_dir = dir.path().to_string_lossy().into_owned();

    let output = run_zonebench([
        "analyze",
        "--clients",
        "2",
        "--log-dir",
        &log_dir,
        "--metric",
        "turnaround",
        "--no-charts",
    ])?;
    if !output.status.success() {
        return Err(describe(&output));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let rows = summary_rows(&stdout);
    if rows.len() != 2 || !rows.iter().all(|row| row.contains("turnaround")) {
        return Err(format!("Unexpected summary:\n{}", stdout));
    }
    if dir.path().join("charts").exists() {
        return Err("Charts written despite --no-charts".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_analyze_cli_distribution_charts() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let logs = dir.path().join("log");
    write_client_log(&logs, 1, &[(10.0, 6.0, 4.0), (11.0, 6.0, 5.0), (30.0, 20.0, 10.0)])?;
    let charts = dir.path().join("charts");
    let log_dir = logs.to_string_lossy().into_owned();
    let charts_path = charts.to_string_lossy().into_owned();

    let output = run_zonebench([
        "analyze",
        "-l",
        &log_dir,
        "--view",
        "distribution",
        "-m",
        "waiting",
        "-m",
        "execution",
        "--charts-path",
        &charts_path,
    ])?;
    if !output.status.success() {
        return Err(describe(&output));
    }

    for name in ["distribution_execution.png", "distribution_waiting.png"] {
        if !charts.join(name).exists() {
            return Err(format!("Missing chart {}", name));
        }
    }
    if charts.join("distribution_turnaround.png").exists() {
        return Err("Unselected metric was rendered".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_analyze_cli_fails_without_data() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let log_dir = dir.path().to_string_lossy().into_owned();
    let output = run_zonebench(["analyze", "--clients", "2", "--log-dir", &log_dir])?;
    if output.status.success() {
        return Err("Expected failure when no logs exist".to_owned());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("No data to aggregate") {
        return Err(format!("Missing readable error message:\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_analyze_cli_rejects_unknown_view() -> Result<(), String> {
    let output = run_zonebench(["analyze", "--view", "pie-chart"])?;
    if output.status.success() {
        return Err("Expected failure for unknown view".to_owned());
    }
    Ok(())
}
