use chrono::{DateTime, Utc};

use super::types::{DistributionRow, IpDistribution, RunMetrics, RunSummary};

/// Tenths of a percent represented by one bar symbol (5 percentage points).
const BAR_SYMBOL_X10: u64 = 50;

/// Mean of the collected response times, or 0 when nothing succeeded.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the logged average keeps its fractional part"
)]
pub fn average_response_time(response_times_ms: &[u64]) -> f64 {
    if response_times_ms.is_empty() {
        return 0.0;
    }
    let sum = response_times_ms
        .iter()
        .fold(0u128, |acc, value| acc.saturating_add(u128::from(*value)));
    sum as f64 / response_times_ms.len() as f64
}

/// `count / total * 100` in tenths of a percent, rounded half up.
#[must_use]
pub fn percentage_x10(count: u64, total: u64) -> u64 {
    let numerator = u128::from(count)
        .saturating_mul(2_000)
        .saturating_add(u128::from(total));
    let denominator = u128::from(total).saturating_mul(2);
    numerator
        .checked_div(denominator)
        .and_then(|value| u64::try_from(value).ok())
        .unwrap_or(0)
}

/// One symbol per five whole percentage points of the rounded percentage.
#[must_use]
pub fn bar_len(percentage_x10: u64) -> usize {
    let symbols = percentage_x10.checked_div(BAR_SYMBOL_X10).unwrap_or(0);
    usize::try_from(symbols).unwrap_or(usize::MAX)
}

#[must_use]
pub fn format_x10(value: u64) -> String {
    format!("{}.{}", value / 10, value % 10)
}

/// Freezes the run counters into the summary written to the logs.
#[must_use]
pub fn build_summary(
    requests_total: u64,
    metrics: &RunMetrics,
    distribution: IpDistribution,
    timestamp: DateTime<Utc>,
) -> RunSummary {
    RunSummary {
        timestamp,
        requests_total,
        success_count: metrics.success_count,
        fail_count: metrics.fail_count,
        total_time_ms: metrics.total_time_ms,
        avg_response_time_ms: average_response_time(&metrics.response_times_ms),
        distribution,
    }
}

/// Rows for the distribution table, in first-seen order.
#[must_use]
pub fn distribution_rows(summary: &RunSummary) -> Vec<DistributionRow> {
    summary
        .distribution
        .iter()
        .map(|(ip, count)| {
            let percentage = percentage_x10(count, summary.requests_total);
            DistributionRow {
                ip: ip.to_owned(),
                count,
                percentage_x10: percentage,
                bar_len: bar_len(percentage),
            }
        })
        .collect()
}
