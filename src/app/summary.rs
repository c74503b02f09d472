use std::io::IsTerminal;

use chrono::{DateTime, Utc};
use crossterm::style::Stylize;

use iprotate::clock::format_timestamp;
use iprotate::metrics::{RequestOutcome, RunSummary, distribution_rows, format_x10};
use iprotate::probe::ProbeReporter;

const BAR_SYMBOL: &str = "#";

/// Prints the run report as it happens. Failures go to stderr.
pub(crate) struct ConsoleReporter {
    use_color: bool,
}

impl ConsoleReporter {
    pub(crate) fn new(no_color: bool) -> Self {
        Self {
            use_color: !no_color && std::io::stdout().is_terminal(),
        }
    }
}

impl ProbeReporter for ConsoleReporter {
    fn on_start(&mut self, request_count: u64, started_at: &DateTime<Utc>, target: &str) {
        for line in header_lines(request_count, started_at, target) {
            println!("{}", line);
        }
    }

    fn on_outcome(&mut self, outcome: &RequestOutcome) {
        let line = outcome_line(outcome);
        match (outcome.succeeded, self.use_color) {
            (true, true) => println!("{}", line.green()),
            (true, false) => println!("{}", line),
            (false, true) => eprintln!("{}", line.red()),
            (false, false) => eprintln!("{}", line),
        }
    }

    fn on_finish(&mut self, summary: &RunSummary) {
        for line in summary_lines(summary) {
            println!("{}", line);
        }
        for (label, bar) in distribution_lines(summary) {
            if self.use_color {
                println!("{}{}", label, bar.cyan());
            } else {
                println!("{}{}", label, bar);
            }
        }
    }
}

pub(crate) fn header_lines(
    request_count: u64,
    started_at: &DateTime<Utc>,
    target: &str,
) -> Vec<String> {
    vec![
        format!("Testing API routing with {} requests...", request_count),
        format!("Date: {}", format_timestamp(started_at)),
        format!("Target URL: {}", target),
        String::new(),
    ]
}

pub(crate) fn outcome_line(outcome: &RequestOutcome) -> String {
    match (&outcome.ip, outcome.succeeded) {
        (Some(ip), true) => format!(
            "Request {}: {} ({}ms)",
            outcome.display_index(),
            ip,
            outcome.elapsed_ms
        ),
        _ => format!(
            "Request {}: Failed - {}",
            outcome.display_index(),
            outcome.error_message.as_deref().unwrap_or("unknown error")
        ),
    }
}

pub(crate) fn summary_lines(summary: &RunSummary) -> Vec<String> {
    vec![
        String::new(),
        "Summary:".to_owned(),
        format!("Total requests: {}", summary.requests_total),
        format!("Successful requests: {}", summary.success_count),
        format!("Failed requests: {}", summary.fail_count),
        format!(
            "Average response time: {:.1}ms",
            summary.avg_response_time_ms
        ),
        format!("Unique IPs detected: {}", summary.unique_count()),
        format!("IPs found: {}", summary.unique_ips().join(", ")),
    ]
}

/// Distribution table rows split into the text label and the bar, so the bar
/// can be coloured on its own.
pub(crate) fn distribution_lines(summary: &RunSummary) -> Vec<(String, String)> {
    let mut lines = vec![(String::new(), String::new())];
    lines.push(("IP distribution:".to_owned(), String::new()));
    for row in distribution_rows(summary) {
        lines.push((
            format!(
                "{}: {} requests ({}%) ",
                row.ip,
                row.count,
                format_x10(row.percentage_x10)
            ),
            BAR_SYMBOL.repeat(row.bar_len),
        ));
    }
    lines
}
