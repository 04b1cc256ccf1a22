mod analyze;
mod generate;

pub(crate) use analyze::run_analyze;
pub(crate) use generate::run_generate;
