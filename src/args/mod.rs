//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;

#[cfg(test)]
mod test_support;

pub use cli::ProbeArgs;
pub use defaults::{
    DEFAULT_DELAY, DEFAULT_DELAY_ARG, DEFAULT_JSON_LOG_FILE, DEFAULT_LOG_FILE, DEFAULT_REQUESTS,
    DEFAULT_TIMEOUT_ARG, DEFAULT_URL,
};

pub(crate) use defaults::DEFAULT_USER_AGENT;
