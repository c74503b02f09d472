use clap::Parser;
use reqwest::Url;
use std::time::Duration;

use super::defaults::{
    DEFAULT_DELAY_ARG, DEFAULT_JSON_LOG_FILE, DEFAULT_LOG_FILE, DEFAULT_REQUESTS,
    DEFAULT_TIMEOUT_ARG, DEFAULT_URL,
};
use super::parsers::{
    parse_bool_env, parse_duration_arg, parse_log_path, parse_request_count, parse_url,
};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Repeatedly ask a what-is-my-IP endpoint which address you egress from, to see whether it rotates."
)]
pub struct ProbeArgs {
    /// Number of sequential requests to issue
    #[arg(
        value_name = "REQUESTS",
        default_value_t = DEFAULT_REQUESTS,
        value_parser = parse_request_count
    )]
    pub requests: u64,

    /// Endpoint answering with {"ip": "..."}
    #[arg(long, short, default_value = DEFAULT_URL, value_parser = parse_url)]
    pub url: Url,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(
        long = "timeout",
        default_value = DEFAULT_TIMEOUT_ARG,
        value_parser = parse_duration_arg
    )]
    pub timeout: Duration,

    /// Pause between requests (supports ms/s/m/h)
    #[arg(
        long = "delay",
        default_value = DEFAULT_DELAY_ARG,
        value_parser = parse_duration_arg
    )]
    pub delay: Duration,

    /// Plain-text log, one line appended per run
    #[arg(long = "log-file", default_value = DEFAULT_LOG_FILE, value_parser = parse_log_path)]
    pub log_file: String,

    /// JSON-lines log, one object appended per run
    #[arg(
        long = "json-log-file",
        default_value = DEFAULT_JSON_LOG_FILE,
        value_parser = parse_log_path
    )]
    pub json_log_file: String,

    /// Path to config file (TOML/JSON). Defaults to ./iprotate.toml or ./iprotate.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,

    /// Enable verbose logging (sets log level to debug unless overridden by IPROTATE_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
