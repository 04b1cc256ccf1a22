//! Core library for the `zonebench` CLI.
//!
//! This crate provides the building blocks used by the binary: the request
//! catalog and workload generator, the latency log reader and aggregator,
//! summary statistics, and chart rendering. The primary user-facing
//! interface is the `zonebench` command-line application; library APIs may
//! evolve as the CLI grows.
pub mod analysis;
pub mod args;
pub mod charts;
pub mod config;
pub mod error;
pub mod latency;
pub mod workload;
