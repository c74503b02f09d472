use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::ProbeArgs;
use crate::args::parsers::{parse_log_path, parse_url};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments. Values given on the command
/// line always win.
///
/// # Errors
///
/// Returns an error when a config value fails the same validation as its CLI flag.
pub fn apply_config(
    args: &mut ProbeArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "requests")
        && let Some(requests) = config.requests
    {
        args.requests = requests;
    }

    if !is_cli(matches, "url")
        && let Some(url) = config.url.as_deref()
    {
        args.url = parse_url(url).map_err(|err| invalid("url", err))?;
    }

    if !is_cli(matches, "timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.timeout = timeout
            .to_duration()
            .map_err(|err| invalid("timeout", err))?;
    }

    if !is_cli(matches, "delay")
        && let Some(delay) = config.delay.as_ref()
    {
        args.delay = delay.to_duration().map_err(|err| invalid("delay", err))?;
    }

    if !is_cli(matches, "log_file")
        && let Some(path) = config.log_file.as_deref()
    {
        args.log_file = parse_log_path(path).map_err(|err| invalid("log_file", err))?;
    }

    if !is_cli(matches, "json_log_file")
        && let Some(path) = config.json_log_file.as_deref()
    {
        args.json_log_file =
            parse_log_path(path).map_err(|err| invalid("json_log_file", err))?;
    }

    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    if !is_cli(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn invalid(field: &'static str, source: ValidationError) -> AppError {
    AppError::config(ConfigError::InvalidField { field, source })
}
