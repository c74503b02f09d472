use std::time::Duration;

use serde::Deserialize;

use crate::args::parsers::parse_duration_arg;
use crate::error::ValidationError;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub requests: Option<u64>,
    #[serde(alias = "api_url")]
    pub url: Option<String>,
    pub timeout: Option<DurationValue>,
    pub delay: Option<DurationValue>,
    pub log_file: Option<String>,
    pub json_log_file: Option<String>,
    pub no_color: Option<bool>,
    pub verbose: Option<bool>,
}

/// A duration written either as bare seconds (`5`) or with a unit (`"250ms"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => parse_duration_arg(text),
        }
    }
}
