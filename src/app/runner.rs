use std::path::PathBuf;

use tracing::debug;

use iprotate::{
    args::ProbeArgs,
    clock::SystemClock,
    error::AppResult,
    http::{HttpIpLookup, LookupClientConfig},
    probe::{ProbeRun, ProbeSettings, Prober, run_and_record},
    sinks::SinksConfig,
};

use super::summary::ConsoleReporter;

/// Runs one probe against the real endpoint and appends both run logs.
pub(crate) async fn run_local(args: &ProbeArgs) -> AppResult<ProbeRun> {
    let lookup = HttpIpLookup::new(LookupClientConfig {
        url: args.url.clone(),
        timeout: args.timeout,
    })?;
    let prober = Prober::new(
        lookup,
        SystemClock::new(),
        ProbeSettings { delay: args.delay },
    );
    let sinks = SinksConfig {
        text_log: PathBuf::from(&args.log_file),
        json_log: PathBuf::from(&args.json_log_file),
    };
    let mut reporter = ConsoleReporter::new(args.no_color);

    debug!(
        "Probing {} with {} requests (timeout {}ms, delay {}ms)",
        prober.target(),
        args.requests,
        args.timeout.as_millis(),
        args.delay.as_millis()
    );

    Ok(run_and_record(&prober, args.requests, &mut reporter, &sinks).await)
}
