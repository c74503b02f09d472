use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::args::DEFAULT_DELAY;
use crate::clock::Clock;
use crate::http::IpLookup;
use crate::metrics::{IpDistribution, RequestOutcome, RunMetrics, RunSummary, build_summary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeSettings {
    /// Pause after every attempt except the last, whether it succeeded or not.
    pub delay: Duration,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }
}

/// Receives progress as the run advances. Calls arrive in request order.
pub trait ProbeReporter {
    fn on_start(&mut self, request_count: u64, started_at: &DateTime<Utc>, target: &str);
    fn on_outcome(&mut self, outcome: &RequestOutcome);
    fn on_finish(&mut self, summary: &RunSummary);
}

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct ProbeRun {
    ips: Vec<String>,
    pub outcomes: Vec<RequestOutcome>,
    pub summary: RunSummary,
}

impl ProbeRun {
    /// IPs from successful attempts, in request order.
    #[must_use]
    pub fn ips(&self) -> &[String] {
        &self.ips
    }
}

/// Sequential rotation prober: one lookup at a time, throttled between attempts.
pub struct Prober<L, C> {
    lookup: L,
    clock: C,
    settings: ProbeSettings,
}

impl<L, C> Prober<L, C>
where
    L: IpLookup,
    C: Clock,
{
    pub const fn new(lookup: L, clock: C, settings: ProbeSettings) -> Self {
        Self {
            lookup,
            clock,
            settings,
        }
    }

    #[must_use]
    pub fn target(&self) -> &str {
        self.lookup.target()
    }

    /// Issues exactly `request_count` lookups. Individual failures are counted
    /// and reported, never returned.
    pub async fn run<R>(&self, request_count: u64, reporter: &mut R) -> ProbeRun
    where
        R: ProbeReporter + ?Sized,
    {
        let started_at = self.clock.wall_time();
        let mut metrics = RunMetrics::new(self.clock.now_ms());
        let mut distribution = IpDistribution::new();
        let mut ips = Vec::new();
        let mut outcomes = Vec::new();

        reporter.on_start(request_count, &started_at, self.lookup.target());

        for index in 0..request_count {
            let request_start = self.clock.now_ms();
            let result = self.lookup.lookup().await;
            let elapsed_ms = self.clock.now_ms().saturating_sub(request_start);

            let outcome = match result {
                Ok(ip) => {
                    distribution.record(&ip);
                    metrics.record_success(elapsed_ms);
                    ips.push(ip.clone());
                    RequestOutcome::success(index, ip, elapsed_ms)
                }
                Err(err) => {
                    debug!("Request {} failed after {}ms: {:?}", index, elapsed_ms, err);
                    metrics.record_failure();
                    RequestOutcome::failure(index, elapsed_ms, err.to_string())
                }
            };
            reporter.on_outcome(&outcome);
            outcomes.push(outcome);

            if index.saturating_add(1) < request_count {
                self.clock.sleep(self.settings.delay).await;
            }
        }

        metrics.finish(self.clock.now_ms());
        let summary = build_summary(
            request_count,
            &metrics,
            distribution,
            self.clock.wall_time(),
        );
        reporter.on_finish(&summary);

        ProbeRun {
            ips,
            outcomes,
            summary,
        }
    }
}
