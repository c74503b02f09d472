//! Run counters, IP distribution, and summary math.
mod summary;
mod types;


pub use summary::{
    average_response_time, bar_len, build_summary, distribution_rows, format_x10, percentage_x10,
};
pub use types::{DistributionRow, IpDistribution, RequestOutcome, RunMetrics, RunSummary};
