use crate::error::AppResult;
use crate::metrics::RunReport;

pub(crate) fn summary_lines(report: &RunReport) -> Vec<String> {
    let summary = &report.summary;
    let mut lines = Vec::new();
    lines.push(format!("Total Requests: {}", summary.total_requests));
    lines.push(format!(
        "Successful: {} ({:.1}%)",
        summary.successful_requests, summary.success_rate_pct
    ));
    lines.push(format!("Failed: {}", summary.failed_requests));
    lines.push(format!("Timeouts: {}", summary.timeout_requests));
    lines.push(format!("Transport Errors: {}", summary.transport_errors));
    lines.push(format!("Unexpected Status: {}", summary.unexpected_status));
    lines.push(format!(
        "Duration: {:.2}s",
        summary.duration_ms as f64 / 1000.0
    ));
    lines.push(format!("Requests/s: {:.1}", summary.requests_per_second));
    lines.push(format!(
        "Avg Latency: {}",
        format_latency(summary.avg_latency_ms)
    ));
    lines.push(format!(
        "Median Latency: {}",
        format_latency(summary.median_latency_ms)
    ));
    lines.push(format!(
        "Min/Max Latency: {} / {}",
        format_latency(summary.min_latency_ms),
        format_latency(summary.max_latency_ms)
    ));
    lines.push(format!(
        "Latency Stddev: {}",
        format_latency(summary.stddev_latency_ms)
    ));

    if let Some(baseline) = report.baseline.as_ref() {
        lines.push(format!("Baseline Latency: {:.1}ms", baseline.latency_ms));
        match baseline.degradation_pct {
            Some(pct) => lines.push(format!("Degradation vs Baseline: {:+.1}%", pct)),
            None => lines.push("Degradation vs Baseline: n/a".to_owned()),
        }
    }

    lines
}

pub(crate) fn print_report(report: &RunReport) {
    for line in summary_lines(report) {
        println!("{}", line);
    }
}

pub(crate) fn report_json(report: &RunReport) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn format_latency(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_owned(), |ms| format!("{:.1}ms", ms))
}
