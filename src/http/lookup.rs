use async_trait::async_trait;
use serde::Deserialize;

use crate::error::LookupError;

/// Body returned by a what-is-my-IP endpoint (`{"ip": "203.0.113.7"}`).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct IpResponse {
    #[serde(default)]
    pub ip: Option<String>,
}

impl IpResponse {
    /// Extracts a non-empty IP.
    ///
    /// # Errors
    ///
    /// Returns `MissingIp` when the field is absent or blank.
    pub fn into_ip(self) -> Result<String, LookupError> {
        self.ip
            .map(|ip| ip.trim().to_owned())
            .filter(|ip| !ip.is_empty())
            .ok_or(LookupError::MissingIp)
    }
}

/// Asks an external service which public IP the request came from.
#[async_trait]
pub trait IpLookup: Send + Sync {
    /// Performs a single lookup. The implementation owns the timeout.
    ///
    /// # Errors
    ///
    /// Returns a `LookupError` on timeout, transport failure, non-2xx status,
    /// or an unusable body.
    async fn lookup(&self) -> Result<String, LookupError>;

    /// Endpoint shown in the run header.
    fn target(&self) -> &str;
}

#[async_trait]
impl<T> IpLookup for std::sync::Arc<T>
where
    T: IpLookup + ?Sized,
{
    async fn lookup(&self) -> Result<String, LookupError> {
        (**self).lookup().await
    }

    fn target(&self) -> &str {
        (**self).target()
    }
}
