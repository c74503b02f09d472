use std::path::PathBuf;

use crate::args::{DEFAULT_JSON_LOG_FILE, DEFAULT_LOG_FILE};

/// Where a finished run is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinksConfig {
    pub text_log: PathBuf,
    pub json_log: PathBuf,
}

impl Default for SinksConfig {
    fn default() -> Self {
        Self {
            text_log: PathBuf::from(DEFAULT_LOG_FILE),
            json_log: PathBuf::from(DEFAULT_JSON_LOG_FILE),
        }
    }
}
