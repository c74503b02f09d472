use std::time::Duration;

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("iprotate/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_URL: &str = "http://api.ipify.org?format=json";
pub const DEFAULT_REQUESTS: u64 = 20;
/// Clap defaults for the duration flags, in the same syntax users type.
pub const DEFAULT_TIMEOUT_ARG: &str = "5s";
pub const DEFAULT_DELAY_ARG: &str = "1s";
/// Pause used by `ProbeSettings::default`. Matches `DEFAULT_DELAY_ARG`.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1_000);
pub const DEFAULT_LOG_FILE: &str = "ip_rotations.log";
pub const DEFAULT_JSON_LOG_FILE: &str = "ip_rotations_detailed.json";
