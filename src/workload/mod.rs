//! Request workload synthesis.
//!
//! A workload is a plain-text file of request lines, one per line, each
//! naming a function from the fixed [`CATALOG`], its arguments, and a trailing
//! zone tag. The generator draws every value from an injectable
//! [`RandomSource`] so tests can script exact sequences.
mod catalog;
mod generator;
mod random;
mod request;
mod writer;


pub use catalog::{
    ArgKind, BOUND_MAX, BOUND_MIN, CATALOG, COUNT_MAX, COUNT_MIN, COUNTRIES, FunctionSignature,
    ZONE_MAX, ZONE_MIN, lookup,
};
pub use generator::{RequestGenerator, generate_line};
pub use random::{RandomSource, client_source};
pub use request::{ArgValue, RequestLine};
pub use writer::{
    GenerationReport, read_workload, workload_file_name, write_workload, write_workloads,
};
