use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::clock::format_timestamp;
use crate::error::SinkError;
use crate::metrics::{IpDistribution, RunSummary};

/// `2024-05-01T12:00:00.000Z: Requests=3, Success=3, Failed=0, AvgTime=123.3ms, Unique IPs=2, IPs=1.1.1.1,2.2.2.2`
#[must_use]
pub fn format_text_line(summary: &RunSummary) -> String {
    format!(
        "{}: Requests={}, Success={}, Failed={}, AvgTime={:.1}ms, Unique IPs={}, IPs={}",
        format_timestamp(&summary.timestamp),
        summary.requests_total,
        summary.success_count,
        summary.fail_count,
        summary.avg_response_time_ms,
        summary.unique_count(),
        summary.unique_ips().join(",")
    )
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonLogRecord<'run> {
    pub timestamp: String,
    pub requests: RequestCounts,
    pub performance: Performance,
    pub ip_data: IpData<'run>,
}

#[derive(Debug, Serialize)]
pub struct RequestCounts {
    pub total: u64,
    pub success: u64,
    pub failed: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub total_time: u64,
    pub avg_response_time: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IpData<'run> {
    pub unique_count: usize,
    pub ips: Vec<&'run str>,
    pub distribution: DistributionMap<'run>,
}

/// Serializes the distribution as a JSON object in first-seen order.
#[derive(Debug)]
pub struct DistributionMap<'run>(pub &'run IpDistribution);

impl Serialize for DistributionMap<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.unique_count()))?;
        for (ip, count) in self.0.iter() {
            map.serialize_entry(ip, &count)?;
        }
        map.end()
    }
}

impl<'run> JsonLogRecord<'run> {
    #[must_use]
    pub fn from_summary(summary: &'run RunSummary) -> Self {
        Self {
            timestamp: format_timestamp(&summary.timestamp),
            requests: RequestCounts {
                total: summary.requests_total,
                success: summary.success_count,
                failed: summary.fail_count,
            },
            performance: Performance {
                total_time: summary.total_time_ms,
                avg_response_time: summary.avg_response_time_ms,
            },
            ip_data: IpData {
                unique_count: summary.unique_count(),
                ips: summary.unique_ips(),
                distribution: DistributionMap(&summary.distribution),
            },
        }
    }
}

/// Single-line JSON for the detailed log.
///
/// # Errors
///
/// Returns an error when serialization fails.
pub fn json_line(summary: &RunSummary) -> Result<String, SinkError> {
    serde_json::to_string(&JsonLogRecord::from_summary(summary))
        .map_err(|err| SinkError::SerializeJson { source: err })
}
