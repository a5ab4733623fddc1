//! Observability for the Baseline scanner.
//! `tracing` crate with `EnvFilter`, per-module log levels.

pub mod setup;

pub use setup::{init_tracing, LOG_ENV};
