use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::analysis::MetricSelection;
use crate::args::{AnalyzeArgs, Cli, Command, GenerateArgs, PositiveUsize};
use crate::error::ConfigError;

use super::types::{AnalyzeConfig, ConfigFile, GenerateConfig};

/// Applies configuration values to CLI arguments. Values given on the
/// command line win over the file.
///
/// # Errors
///
/// Returns an error when a config value is out of range or names an unknown
/// view or metric.
pub fn apply_config(
    cli: &mut Cli,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> Result<(), ConfigError> {
    match &mut cli.command {
        Command::Generate(args) => {
            if let Some(section) = config.generate.as_ref() {
                let sub = matches.subcommand_matches("generate");
                apply_generate(args, sub, section)?;
            }
        }
        Command::Analyze(args) => {
            if let Some(section) = config.analyze.as_ref() {
                let sub = matches.subcommand_matches("analyze");
                apply_analyze(args, sub, section)?;
            }
        }
    }
    Ok(())
}

fn apply_generate(
    args: &mut GenerateArgs,
    matches: Option<&ArgMatches>,
    config: &GenerateConfig,
) -> Result<(), ConfigError> {
    if !is_cli(matches, "clients")
        && let Some(clients) = config.clients
    {
        args.clients = ensure_positive(clients, "generate.clients")?;
    }

    if !is_cli(matches, "lines")
        && let Some(lines) = config.lines
    {
        args.lines = lines;
    }

    if !is_cli(matches, "output_dir")
        && let Some(output_dir) = config.output_dir.clone()
    {
        args.output_dir = output_dir;
    }

    if !is_cli(matches, "seed")
        && let Some(seed) = config.seed
    {
        args.seed = Some(seed);
    }

    Ok(())
}

fn apply_analyze(
    args: &mut AnalyzeArgs,
    matches: Option<&ArgMatches>,
    config: &AnalyzeConfig,
) -> Result<(), ConfigError> {
    if !is_cli(matches, "clients")
        && let Some(clients) = config.clients
    {
        args.clients = ensure_positive(clients, "analyze.clients")?;
    }

    if !is_cli(matches, "log_dir")
        && let Some(log_dir) = config.log_dir.clone()
    {
        args.log_dir = log_dir;
    }

    if !is_cli(matches, "view")
        && let Some(view) = config.view.as_deref()
    {
        args.view = view
            .parse()
            .map_err(|err| ConfigError::InvalidSelection {
                field: "analyze.view",
                source: err,
            })?;
    }

    if !is_cli(matches, "metrics")
        && let Some(metrics) = config.metrics.as_ref()
    {
        let selection =
            MetricSelection::parse(metrics).map_err(|err| ConfigError::InvalidSelection {
                field: "analyze.metrics",
                source: err,
            })?;
        args.metrics = selection.metrics().to_vec();
    }

    if !is_cli(matches, "charts_path")
        && let Some(charts_path) = config.charts_path.clone()
    {
        args.charts_path = charts_path;
    }

    if !is_cli(matches, "time_unit")
        && let Some(time_unit) = config.time_unit
    {
        args.time_unit = time_unit;
    }

    if !is_cli(matches, "no_charts")
        && let Some(no_charts) = config.no_charts
    {
        args.no_charts = no_charts;
    }

    Ok(())
}

fn ensure_positive(value: usize, field: &'static str) -> Result<PositiveUsize, ConfigError> {
    PositiveUsize::try_from(value).map_err(|_err| ConfigError::ValueTooSmall { field, min: 1 })
}

fn is_cli(matches: Option<&ArgMatches>, id: &str) -> bool {
    matches
        .and_then(|matches| matches.value_source(id))
        .is_some_and(|source| source == ValueSource::CommandLine)
}
