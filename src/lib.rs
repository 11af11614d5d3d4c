//! Core library for the `surgeprobe` CLI.
//!
//! This crate provides the internal building blocks used by the binary: CLI
//! argument types, configuration parsing, the concurrent probe engine,
//! outcome records, and summary aggregation. The primary user-facing
//! interface is the `surgeprobe` command-line application; library APIs may
//! evolve as the CLI grows.
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
pub mod probe;
