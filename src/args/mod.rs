//! Command-line arguments.
mod cli;
mod defaults;
mod parsers;
mod types;


pub use cli::{AnalyzeArgs, Cli, Command, GenerateArgs};
pub use parsers::{parse_metric, parse_view};
pub use types::PositiveUsize;
