use std::path::Path;

use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::SinkError;
use crate::metrics::RunSummary;

use super::config::SinksConfig;
use super::format::{format_text_line, json_line};

/// Appends both run records. Each sink is attempted independently; the
/// returned errors belong to the sinks that failed.
pub async fn write_sinks(config: &SinksConfig, summary: &RunSummary) -> Vec<SinkError> {
    let mut errors = Vec::new();

    if let Err(err) = append_line(&config.text_log, &format_text_line(summary)).await {
        errors.push(err);
    }

    match json_line(summary) {
        Ok(line) => {
            if let Err(err) = append_line(&config.json_log, &line).await {
                errors.push(err);
            }
        }
        Err(err) => errors.push(err),
    }

    errors
}

/// Appends `line` plus a newline, creating the file if needed.
///
/// # Errors
///
/// Returns an error when the file cannot be opened or written.
pub async fn append_line(path: &Path, line: &str) -> Result<(), SinkError> {
    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(|err| SinkError::Open {
            path: path.to_path_buf(),
            source: err,
        })?;

    let mut record = String::with_capacity(line.len().saturating_add(1));
    record.push_str(line);
    record.push('\n');

    file.write_all(record.as_bytes())
        .await
        .map_err(|err| SinkError::Append {
            path: path.to_path_buf(),
            source: err,
        })?;
    file.flush().await.map_err(|err| SinkError::Append {
        path: path.to_path_buf(),
        source: err,
    })?;

    debug!("Appended run record to {}", path.display());
    Ok(())
}
