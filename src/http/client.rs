use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::LookupError;

use super::lookup::{IpLookup, IpResponse};

#[derive(Debug, Clone)]
pub struct LookupClientConfig {
    pub url: Url,
    pub timeout: Duration,
}

/// `IpLookup` backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct HttpIpLookup {
    client: Client,
    url: Url,
    timeout: Duration,
}

impl HttpIpLookup {
    /// Builds the HTTP client used for every lookup of a run.
    ///
    /// # Errors
    ///
    /// Returns `BuildClient` when reqwest cannot construct the client.
    pub fn new(config: LookupClientConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|err| LookupError::BuildClient { source: err })?;
        Ok(Self {
            client,
            url: config.url,
            timeout: config.timeout,
        })
    }

    fn classify(&self, err: reqwest::Error) -> LookupError {
        if err.is_timeout() {
            LookupError::Timeout {
                timeout_ms: self.timeout.as_millis(),
            }
        } else if err.is_decode() {
            LookupError::Decode { source: err }
        } else {
            LookupError::Transport { source: err }
        }
    }
}

#[async_trait]
impl IpLookup for HttpIpLookup {
    async fn lookup(&self) -> Result<String, LookupError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|err| self.classify(err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
            });
        }

        let body: IpResponse = response.json().await.map_err(|err| self.classify(err))?;
        let ip = body.into_ip()?;
        debug!("Lookup against {} returned {}", self.url, ip);
        Ok(ip)
    }

    fn target(&self) -> &str {
        self.url.as_str()
    }
}
