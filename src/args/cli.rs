use std::time::Duration;

use clap::Parser;

use super::parsers::{parse_duration_arg, parse_header, parse_positive_usize};
use super::types::{OutputFormat, PositiveUsize, ProbeMode};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent HTTP endpoint prober - fixed worker fleets, burst probes, and partial-failure-tolerant latency summaries for API load validation.",
    next_help_heading = "Advanced Options"
)]
pub struct ProbeArgs {
    /// Target URL to probe
    #[arg(long, short, help_heading = "Common Options")]
    pub url: Option<String>,

    /// Probe mode: a concurrent worker fleet, or one sequential burst stream
    #[arg(
        long,
        default_value = "concurrent",
        value_enum,
        help_heading = "Common Options"
    )]
    pub mode: ProbeMode,

    /// Number of simulated concurrent users
    #[arg(
        long,
        short = 'c',
        default_value = "5",
        value_parser = parse_positive_usize,
        help_heading = "Common Options"
    )]
    pub concurrency: PositiveUsize,

    /// Requests each worker issues sequentially (total requests in burst mode)
    #[arg(long, short = 'n', default_value = "3", help_heading = "Common Options")]
    pub requests: u64,

    /// HTTP status a request must return to count as a success
    #[arg(long = "status", default_value = "200", help_heading = "Common Options")]
    pub expected_status: u16,

    /// Per-request timeout (e.g. 10s, 500ms)
    #[arg(
        long = "request-timeout",
        default_value = "10s",
        value_parser = parse_duration_arg,
        help_heading = "Common Options"
    )]
    pub request_timeout: Duration,

    /// Delay between consecutive requests within one worker
    #[arg(
        long,
        default_value = "0s",
        value_parser = parse_duration_arg,
        help_heading = "Common Options"
    )]
    pub delay: Duration,

    /// HTTP headers in 'Key: Value' format (repeatable)
    #[arg(long, short = 'H', value_parser = parse_header, help_heading = "Common Options")]
    pub headers: Vec<(String, String)>,

    /// Bearer token attached as an Authorization header
    #[arg(long, env = "SURGEPROBE_BEARER", help_heading = "Common Options")]
    pub bearer: Option<String>,

    /// Measure a single unloaded request first and report latency degradation
    #[arg(long)]
    pub baseline: bool,

    /// Summary output format
    #[arg(long, default_value = "text", value_enum)]
    pub output_format: OutputFormat,

    /// Write the full run report (summary plus per-request outcomes) as JSON
    #[arg(long = "export-json")]
    pub export_json: Option<String>,

    /// Config file path (.toml or .json)
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable ANSI colors in log output
    #[arg(long)]
    pub no_color: bool,
}
