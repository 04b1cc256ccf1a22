use serde::Deserialize;

use crate::charts::TimeUnit;

/// Contents of `zonebench.toml` / `zonebench.json`.
///
/// The two sections are independent: the generator and the analyzer each
/// read their own client count.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub generate: Option<GenerateConfig>,
    pub analyze: Option<AnalyzeConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateConfig {
    pub clients: Option<usize>,
    pub lines: Option<usize>,
    pub output_dir: Option<String>,
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeConfig {
    pub clients: Option<usize>,
    pub log_dir: Option<String>,
    pub view: Option<String>,
    pub metrics: Option<Vec<String>>,
    pub charts_path: Option<String>,
    pub time_unit: Option<TimeUnit>,
    pub no_charts: Option<bool>,
}
