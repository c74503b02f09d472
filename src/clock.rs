//! Time source used by the prober. Tests swap [`SystemClock`] for a scripted
//! clock so a run needs no real timers.
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use tokio::time::Instant;

#[async_trait]
pub trait Clock: Send + Sync {
    /// Milliseconds elapsed on a monotonic timeline.
    fn now_ms(&self) -> u64;

    /// Current wall-clock time.
    fn wall_time(&self) -> DateTime<Utc>;

    async fn sleep(&self, duration: Duration);
}

#[async_trait]
impl<T> Clock for Arc<T>
where
    T: Clock + ?Sized,
{
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }

    fn wall_time(&self) -> DateTime<Utc> {
        (**self).wall_time()
    }

    async fn sleep(&self, duration: Duration) {
        (**self).sleep(duration).await;
    }
}

/// Tokio-backed clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    fn wall_time(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Formats a timestamp as RFC 3339 UTC with millisecond precision
/// (`2024-05-01T12:00:00.000Z`).
#[must_use]
pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}
