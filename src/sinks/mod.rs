//! Append-only run logs: one plain-text line and one JSON line per run.
pub mod config;
mod format;
mod writers;

#[cfg(test)]
mod tests;

pub use config::SinksConfig;
pub use format::{JsonLogRecord, format_text_line, json_line};
pub use writers::{append_line, write_sinks};
