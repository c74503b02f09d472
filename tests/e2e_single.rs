
use std::fs;
use std::path::Path;
use std::process::Output;

use tempfile::tempdir;

use support_single::{run_iprotate, spawn_ip_server};

fn expect_success(output: &Output) -> Result<(String, String), String> {
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    if !output.status.success() {
        return Err(format!("stdout: {}\nstderr: {}", stdout, stderr));
    }
    Ok((stdout, stderr))
}

fn read_lines(path: &Path) -> Result<Vec<String>, String> {
    let content = fs::read_to_string(path)
        .map_err(|err| format!("read {} failed: {}", path.display(), err))?;
    Ok(content.lines().map(str::to_owned).collect())
}

#[test]
fn e2e_single_probe_reports_rotation() -> Result<(), String> {
    let (url, server) = spawn_ip_server(&["10.0.0.1", "10.0.0.2"])?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;

    let output = run_iprotate(
        dir.path(),
        ["3", "--url", url.as_str(), "--delay", "1ms", "--timeout", "2s"],
    )?;
    let (stdout, _stderr) = expect_success(&output)?;

    let expected = [
        "Testing API routing with 3 requests...",
        "Request 1: 10.0.0.1 (",
        "Request 2: 10.0.0.2 (",
        "Request 3: 10.0.0.1 (",
        "Successful requests: 3",
        "Failed requests: 0",
        "Unique IPs detected: 2",
        "IPs found: 10.0.0.1, 10.0.0.2",
        "10.0.0.1: 2 requests (66.7%) #############",
        "10.0.0.2: 1 requests (33.3%) ######",
    ];
    for needle in expected {
        if !stdout.contains(needle) {
            return Err(format!("Missing {:?} in stdout:\n{}", needle, stdout));
        }
    }
    if server.hits() != 3 {
        return Err(format!("Expected 3 requests, server saw {}", server.hits()));
    }

    let text = read_lines(&dir.path().join("ip_rotations.log"))?;
    let json = read_lines(&dir.path().join("ip_rotations_detailed.json"))?;
    if text.len() != 1 || json.len() != 1 {
        return Err(format!("Expected one record each: {:?} {:?}", text, json));
    }
    let record = text.first().map_or("", String::as_str);
    if !record.contains("Requests=3, Success=3, Failed=0")
        || !record.ends_with("Unique IPs=2, IPs=10.0.0.1,10.0.0.2")
    {
        return Err(format!("Unexpected text record: {}", record));
    }
    Ok(())
}

#[test]
fn e2e_single_zero_requests_still_logs() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let text_log = dir.path().join("custom.log");
    let json_log = dir.path().join("custom.json");
    let text_arg = text_log.to_string_lossy().into_owned();
    let json_arg = json_log.to_string_lossy().into_owned();

    let output = run_iprotate(
        dir.path(),
        [
            "0",
            "--url",
            "http://127.0.0.1:9/?format=json",
            "--log-file",
            text_arg.as_str(),
            "--json-log-file",
            json_arg.as_str(),
        ],
    )?;
    let (stdout, _stderr) = expect_success(&output)?;
    if !stdout.contains("Total requests: 0") || !stdout.contains("Average response time: 0.0ms") {
        return Err(format!("Unexpected stdout:\n{}", stdout));
    }

    let text = read_lines(&text_log)?;
    if text.len() != 1 || !text.iter().all(|line| line.ends_with("Unique IPs=0, IPs=")) {
        return Err(format!("Unexpected text log: {:?}", text));
    }
    let json = read_lines(&json_log)?;
    let record: serde_json::Value = json
        .first()
        .ok_or_else(|| "JSON log is empty".to_owned())
        .and_then(|line| {
            serde_json::from_str(line).map_err(|err| format!("bad JSON record: {}", err))
        })?;
    if record["requests"]["total"] != 0 || record["ipData"]["uniqueCount"] != 0 {
        return Err(format!("Unexpected JSON record: {}", record));
    }
    Ok(())
}

#[test]
fn e2e_single_failures_do_not_fail_the_run() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;

    let output = run_iprotate(
        dir.path(),
        [
            "2",
            "--url",
            "http://127.0.0.1:9/?format=json",
            "--delay",
            "1ms",
            "--timeout",
            "500ms",
        ],
    )?;
    let (stdout, stderr) = expect_success(&output)?;
    for index in 1..=2 {
        let needle = format!("Request {}: Failed - ", index);
        if !stderr.contains(&needle) {
            return Err(format!("Missing {:?} in stderr:\n{}", needle, stderr));
        }
    }
    if !stdout.contains("Failed requests: 2") || !stdout.contains("Unique IPs detected: 0") {
        return Err(format!("Unexpected stdout:\n{}", stdout));
    }
    Ok(())
}

#[test]
fn e2e_single_reads_config_file() -> Result<(), String> {
    let (url, server) = spawn_ip_server(&["192.0.2.7"])?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let config = format!(
        "requests = 2\nurl = \"{}\"\ndelay = \"1ms\"\nlog_file = \"from-config.log\"\n",
        url
    );
    fs::write(dir.path().join("iprotate.toml"), config)
        .map_err(|err| format!("write config failed: {}", err))?;

    let no_args: [&str; 0] = [];
    let output = run_iprotate(dir.path(), no_args)?;
    let (stdout, _stderr) = expect_success(&output)?;
    if !stdout.contains("Testing API routing with 2 requests...") {
        return Err(format!("Config request count ignored:\n{}", stdout));
    }
    if server.hits() != 2 {
        return Err(format!("Expected 2 requests, server saw {}", server.hits()));
    }
    if read_lines(&dir.path().join("from-config.log"))?.len() != 1 {
        return Err("Config log path ignored".to_owned());
    }
    Ok(())
}
