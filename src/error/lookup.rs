use thiserror::Error;

/// Failure of a single IP lookup. Recorded per request; never aborts a run.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("timeout of {timeout_ms}ms exceeded")]
    Timeout { timeout_ms: u128 },
    #[error("request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
    #[error("request failed with status code {status}")]
    Status { status: u16 },
    #[error("invalid response body: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
    #[error("response did not contain an IP address")]
    MissingIp,
    #[error("Failed to build HTTP client: {source}")]
    BuildClient {
        #[source]
        source: reqwest::Error,
    },
    #[cfg(test)]
    #[error("{message}")]
    Simulated { message: String },
}
