use chrono::{DateTime, Utc};

/// Result of one lookup attempt. `index` is zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOutcome {
    pub index: u64,
    pub ip: Option<String>,
    pub elapsed_ms: u64,
    pub succeeded: bool,
    pub error_message: Option<String>,
}

impl RequestOutcome {
    #[must_use]
    pub const fn success(index: u64, ip: String, elapsed_ms: u64) -> Self {
        Self {
            index,
            ip: Some(ip),
            elapsed_ms,
            succeeded: true,
            error_message: None,
        }
    }

    #[must_use]
    pub const fn failure(index: u64, elapsed_ms: u64, error_message: String) -> Self {
        Self {
            index,
            ip: None,
            elapsed_ms,
            succeeded: false,
            error_message: Some(error_message),
        }
    }

    /// One-based position used in console output.
    #[must_use]
    pub const fn display_index(&self) -> u64 {
        self.index.saturating_add(1)
    }
}

/// Per-IP occurrence counts, kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IpDistribution {
    entries: Vec<(String, u64)>,
}

impl IpDistribution {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, ip: &str) {
        match self.entries.iter_mut().find(|(seen, _)| seen == ip) {
            Some((_, count)) => *count = count.saturating_add(1),
            None => self.entries.push((ip.to_owned(), 1)),
        }
    }

    #[must_use]
    pub fn count(&self, ip: &str) -> u64 {
        self.entries
            .iter()
            .find(|(seen, _)| seen == ip)
            .map_or(0, |(_, count)| *count)
    }

    #[must_use]
    pub const fn unique_count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, (_, count)| acc.saturating_add(*count))
    }

    /// Unique IPs in the order they were first observed.
    pub fn ips(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(ip, _)| ip.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(ip, count)| (ip.as_str(), *count))
    }
}

/// Counters accumulated while a run is in flight.
#[derive(Debug, Clone, Default)]
pub struct RunMetrics {
    pub success_count: u64,
    pub fail_count: u64,
    pub response_times_ms: Vec<u64>,
    pub start_ms: u64,
    pub total_time_ms: u64,
}

impl RunMetrics {
    #[must_use]
    pub const fn new(start_ms: u64) -> Self {
        Self {
            success_count: 0,
            fail_count: 0,
            response_times_ms: Vec::new(),
            start_ms,
            total_time_ms: 0,
        }
    }

    pub fn record_success(&mut self, elapsed_ms: u64) {
        self.success_count = self.success_count.saturating_add(1);
        self.response_times_ms.push(elapsed_ms);
    }

    pub const fn record_failure(&mut self) {
        self.fail_count = self.fail_count.saturating_add(1);
    }

    pub const fn finish(&mut self, end_ms: u64) {
        self.total_time_ms = end_ms.saturating_sub(self.start_ms);
    }
}

/// Final aggregate of a run, written once to each log.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub timestamp: DateTime<Utc>,
    pub requests_total: u64,
    pub success_count: u64,
    pub fail_count: u64,
    pub total_time_ms: u64,
    pub avg_response_time_ms: f64,
    pub distribution: IpDistribution,
}

impl RunSummary {
    #[must_use]
    pub fn unique_count(&self) -> usize {
        self.distribution.unique_count()
    }

    #[must_use]
    pub fn unique_ips(&self) -> Vec<&str> {
        self.distribution.ips().collect()
    }
}

/// One row of the distribution table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionRow {
    pub ip: String,
    pub count: u64,
    /// Share of all requests in tenths of a percent, rounded half up.
    pub percentage_x10: u64,
    pub bar_len: usize,
}
