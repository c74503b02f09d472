use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Environment variables consulted for a filter, in priority order.
const FILTER_ENV_VARS: [&str; 2] = ["IPROTATE_LOG", "RUST_LOG"];

const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

fn build_filter(configured: Option<&str>, verbose: bool) -> EnvFilter {
    configured
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbose)))
}

/// Installs the global subscriber. Diagnostics go to stderr; stdout is
/// reserved for the run report.
pub fn init_logging(verbose: bool, no_color: bool) {
    let configured = FILTER_ENV_VARS
        .iter()
        .find_map(|name| std::env::var(name).ok());
    let filter = build_filter(configured.as_deref(), verbose);

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_falls_back_to_verbosity() -> Result<(), String> {
        let cases = [
            (None, false, "info"),
            (None, true, "debug"),
            (Some("iprotate=trace"), false, "iprotate=trace"),
            (Some("iprotate=loud"), true, "debug"),
        ];
        for (configured, verbose, expected) in cases {
            let filter = build_filter(configured, verbose).to_string();
            if filter != expected {
                return Err(format!(
                    "{:?}/{} gave {}, expected {}",
                    configured, verbose, filter, expected
                ));
            }
        }
        Ok(())
    }

    #[test]
    fn init_logging_is_idempotent() {
        init_logging(false, true);
        init_logging(true, true);
    }
}
