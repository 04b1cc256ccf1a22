use std::ffi::OsString;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::{debug, error};

use zonebench::args::{Cli, Command};
use zonebench::config::{apply_config, load_config};
use zonebench::error::AppResult;

use crate::app::{run_analyze, run_generate};

pub(crate) fn run() -> AppResult<()> {
    let (cli, matches) = parse_args()?;

    crate::system::logger::init_logging(cli.verbose, cli.no_color);

    execute(cli, &matches).inspect_err(|err| error!("{}", err))
}

fn parse_args() -> AppResult<(Cli, ArgMatches)> {
    let raw_args: Vec<OsString> = std::env::args_os().collect();
    let matches = Cli::command().get_matches_from(raw_args);
    let cli = Cli::from_arg_matches(&matches)?;
    Ok((cli, matches))
}

fn execute(mut cli: Cli, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = load_config(cli.config.as_deref())? {
        debug!("Applying configuration file values");
        apply_config(&mut cli, matches, &config)?;
    }

    match cli.command {
        Command::Generate(args) => run_generate(&args),
        Command::Analyze(args) => run_analyze(&args),
    }
}
