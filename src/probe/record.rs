use tracing::{info, warn};

use crate::clock::Clock;
use crate::http::IpLookup;
use crate::sinks::{SinksConfig, write_sinks};

use super::prober::{ProbeReporter, ProbeRun, Prober};

/// Runs the prober, then appends the run to both logs. Log failures are
/// reported as warnings and never fail the run.
pub async fn run_and_record<L, C, R>(
    prober: &Prober<L, C>,
    request_count: u64,
    reporter: &mut R,
    sinks: &SinksConfig,
) -> ProbeRun
where
    L: IpLookup,
    C: Clock,
    R: ProbeReporter + ?Sized,
{
    let run = prober.run(request_count, reporter).await;

    let errors = write_sinks(sinks, &run.summary).await;
    for err in &errors {
        warn!("Failed to write run log: {}", err);
    }
    if errors.is_empty() {
        info!(
            "Run recorded in {} and {}",
            sinks.text_log.display(),
            sinks.json_log.display()
        );
    }

    run
}
