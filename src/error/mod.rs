mod app;
mod config;
mod lookup;
mod sink;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use lookup::LookupError;
pub use sink::SinkError;
pub use validation::ValidationError;
