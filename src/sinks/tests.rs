use super::*;
use crate::error::SinkError;
use crate::metrics::{IpDistribution, RunMetrics, RunSummary, build_summary};
use chrono::{TimeZone, Utc};
use tempfile::tempdir;

fn sample_summary() -> Result<RunSummary, SinkError> {
    let timestamp = Utc
        .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .ok_or(SinkError::TestExpectation {
            message: "ambiguous timestamp",
        })?;
    let mut metrics = RunMetrics::new(0);
    let mut distribution = IpDistribution::new();
    for (ip, elapsed) in [("2.2.2.2", 100), ("1.1.1.1", 150), ("1.1.1.1", 120)] {
        metrics.record_success(elapsed);
        distribution.record(ip);
    }
    metrics.record_failure();
    metrics.finish(3_370);
    Ok(build_summary(4, &metrics, distribution, timestamp))
}

fn empty_summary() -> Result<RunSummary, SinkError> {
    let timestamp = Utc
        .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .ok_or(SinkError::TestExpectation {
            message: "ambiguous timestamp",
        })?;
    let mut metrics = RunMetrics::new(0);
    metrics.finish(0);
    Ok(build_summary(0, &metrics, IpDistribution::new(), timestamp))
}

#[test]
fn text_line_matches_log_format() -> Result<(), SinkError> {
    let summary = sample_summary()?;
    let line = format_text_line(&summary);
    let expected = "2024-05-01T12:00:00.000Z: Requests=4, Success=3, Failed=1, AvgTime=123.3ms, Unique IPs=2, IPs=2.2.2.2,1.1.1.1";
    if line != expected {
        return Err(SinkError::from(format!("Unexpected line: {}", line)));
    }
    Ok(())
}

#[test]
fn text_line_for_empty_run() -> Result<(), SinkError> {
    let line = format_text_line(&empty_summary()?);
    let expected = "2024-05-01T12:00:00.000Z: Requests=0, Success=0, Failed=0, AvgTime=0.0ms, Unique IPs=0, IPs=";
    if line != expected {
        return Err(SinkError::from(format!("Unexpected line: {}", line)));
    }
    Ok(())
}

#[test]
fn json_line_has_expected_shape() -> Result<(), SinkError> {
    let summary = sample_summary()?;
    let line = json_line(&summary)?;

    if line.contains('\n') {
        return Err("JSON record must fit on one line".into());
    }
    if !line.contains(r#""distribution":{"2.2.2.2":1,"1.1.1.1":2}"#) {
        return Err(SinkError::from(format!(
            "Distribution not in first-seen order: {}",
            line
        )));
    }

    let value: serde_json::Value =
        serde_json::from_str(&line).map_err(|err| SinkError::SerializeJson { source: err })?;
    let checks = [
        (
            value["timestamp"] == "2024-05-01T12:00:00.000Z",
            "timestamp",
        ),
        (value["requests"]["total"] == 4, "requests.total"),
        (value["requests"]["success"] == 3, "requests.success"),
        (value["requests"]["failed"] == 1, "requests.failed"),
        (value["performance"]["totalTime"] == 3_370, "performance.totalTime"),
        (
            value["performance"]["avgResponseTime"].is_f64(),
            "performance.avgResponseTime",
        ),
        (value["ipData"]["uniqueCount"] == 2, "ipData.uniqueCount"),
        (
            value["ipData"]["ips"] == serde_json::json!(["2.2.2.2", "1.1.1.1"]),
            "ipData.ips",
        ),
    ];
    for (ok, field) in checks {
        if !ok {
            return Err(SinkError::from(format!("Unexpected {}: {}", field, line)));
        }
    }
    Ok(())
}

#[tokio::test]
async fn write_sinks_appends_one_record_per_run() -> Result<(), SinkError> {
    let dir = tempdir().map_err(|err| SinkError::from(format!("tempdir failed: {}", err)))?;
    let config = SinksConfig {
        text_log: dir.path().join("ip_rotations.log"),
        json_log: dir.path().join("ip_rotations_detailed.json"),
    };

    let summary = sample_summary()?;
    let empty = empty_summary()?;
    for run in [&summary, &empty] {
        let errors = write_sinks(&config, run).await;
        if !errors.is_empty() {
            return Err(SinkError::from(format!("Unexpected errors: {:?}", errors)));
        }
    }

    let text = std::fs::read_to_string(&config.text_log)
        .map_err(|err| SinkError::from(format!("read text log failed: {}", err)))?;
    let json = std::fs::read_to_string(&config.json_log)
        .map_err(|err| SinkError::from(format!("read json log failed: {}", err)))?;

    if text.lines().count() != 2 || json.lines().count() != 2 {
        return Err(SinkError::from(format!(
            "Expected two records each, got text={} json={}",
            text.lines().count(),
            json.lines().count()
        )));
    }
    for line in json.lines() {
        serde_json::from_str::<serde_json::Value>(line)
            .map_err(|err| SinkError::SerializeJson { source: err })?;
    }
    if !text.ends_with('\n') || !json.ends_with('\n') {
        return Err("Records must be newline terminated".into());
    }
    Ok(())
}

#[tokio::test]
async fn write_sinks_isolates_failures() -> Result<(), SinkError> {
    let dir = tempdir().map_err(|err| SinkError::from(format!("tempdir failed: {}", err)))?;
    let config = SinksConfig {
        text_log: dir.path().to_path_buf(),
        json_log: dir.path().join("detailed.json"),
    };

    let errors = write_sinks(&config, &sample_summary()?).await;
    if !matches!(errors.as_slice(), [SinkError::Open { .. }]) {
        return Err(SinkError::from(format!(
            "Expected a single open error, got {:?}",
            errors
        )));
    }

    let json = std::fs::read_to_string(&config.json_log)
        .map_err(|err| SinkError::from(format!("read json log failed: {}", err)))?;
    if json.lines().count() != 1 {
        return Err("JSON log should still receive its record".into());
    }
    Ok(())
}
