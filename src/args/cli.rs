use clap::{Args, Parser, Subcommand};

use crate::analysis::{MetricSelection, ViewKind};
use crate::charts::TimeUnit;
use crate::latency::Metric;

use super::defaults::{
    DEFAULT_ANALYZE_CLIENTS, DEFAULT_GENERATE_CLIENTS, DEFAULT_LINES_PER_CLIENT,
    default_charts_path, default_log_dir, default_output_dir,
};
use super::parsers::{parse_metric, parse_positive_usize, parse_view};
use super::types::PositiveUsize;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Generate request workloads for the zone query service and analyze client latency logs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable ANSI colors in log output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Path to a TOML or JSON config file (defaults to ./zonebench.toml or ./zonebench.json)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Write one request workload file per simulated client
    Generate(GenerateArgs),
    /// Aggregate client latency logs and render charts
    Analyze(AnalyzeArgs),
}

#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    /// Number of clients (files client_1.txt .. client_K.txt)
    #[arg(
        long,
        short = 'k',
        default_value_t = DEFAULT_GENERATE_CLIENTS,
        value_parser = parse_positive_usize
    )]
    pub clients: PositiveUsize,

    /// Request lines per client file
    #[arg(long, short = 'n', default_value_t = DEFAULT_LINES_PER_CLIENT)]
    pub lines: usize,

    /// Directory receiving the workload files
    #[arg(long = "output-dir", short = 'o', default_value_t = default_output_dir())]
    pub output_dir: String,

    /// Seed for reproducible workloads (client k uses seed + k)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Args, Clone)]
pub struct AnalyzeArgs {
    /// Number of clients (logs client_data_z1.csv .. client_data_zK.csv)
    #[arg(
        long,
        short = 'k',
        default_value_t = DEFAULT_ANALYZE_CLIENTS,
        value_parser = parse_positive_usize
    )]
    pub clients: PositiveUsize,

    /// Directory holding the client latency logs
    #[arg(long = "log-dir", short = 'l', default_value_t = default_log_dir())]
    pub log_dir: String,

    /// Chart to render (time-series or distribution)
    #[arg(long, default_value = "time-series", value_parser = parse_view)]
    pub view: ViewKind,

    /// Metric to include (turnaround, execution, waiting; repeatable, default all)
    #[arg(long = "metric", short = 'm', value_parser = parse_metric)]
    pub metrics: Vec<Metric>,

    /// Directory receiving chart images
    #[arg(long = "charts-path", default_value_t = default_charts_path())]
    pub charts_path: String,

    /// Unit the latency logs were recorded in (axis labels only)
    #[arg(long = "time-unit", value_enum, default_value_t = TimeUnit::Ms)]
    pub time_unit: TimeUnit,

    /// Print the summary table without writing charts
    #[arg(long = "no-charts")]
    pub no_charts: bool,
}

impl AnalyzeArgs {
    /// Selected metrics; all three when none were given.
    #[must_use]
    pub fn metric_selection(&self) -> MetricSelection {
        MetricSelection::new(self.metrics.iter().copied()).unwrap_or_default()
    }
}
