use std::path::Path;

use tracing::{info, warn};

use zonebench::analysis::{ViewRequest, render, summary_lines};
use zonebench::args::AnalyzeArgs;
use zonebench::charts::PlottersSink;
use zonebench::error::AppResult;
use zonebench::latency::{aggregate, client_log_paths};

pub(crate) fn run_analyze(args: &AnalyzeArgs) -> AppResult<()> {
    let paths = client_log_paths(Path::new(&args.log_dir), args.clients.get());
    let aggregation = aggregate(&paths)?;
    if !aggregation.failures.is_empty() {
        let skipped: Vec<String> = aggregation
            .failures
            .iter()
            .map(|failure| failure.client_id.to_string())
            .collect();
        warn!(
            "{} of {} client log(s) skipped: clients {}",
            skipped.len(),
            paths.len(),
            skipped.join(", ")
        );
    }

    let dataset = aggregation.dataset;
    let request = ViewRequest::new(args.view, args.metric_selection());
    info!(
        "Loaded {} records from {} client(s)",
        dataset.len(),
        dataset.client_ids().len()
    );

    for line in summary_lines(&dataset, &request.metrics) {
        println!("{}", line);
    }

    if args.no_charts {
        return Ok(());
    }

    let mut sink = PlottersSink::new(Path::new(&args.charts_path), args.time_unit);
    render(&request, &dataset, &mut sink)?;
    for path in sink.written() {
        info!("Chart written to {}", path.display());
    }
    Ok(())
}
