//! Core library for the `iprotate` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, configuration parsing, the what-is-my-IP lookup client, the
//! sequential prober, run metrics and the append-only run logs. The primary
//! user-facing interface is the `iprotate` command-line application.
pub mod args;
pub mod clock;
pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
pub mod probe;
pub mod sinks;
