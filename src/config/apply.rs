use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{PositiveUsize, ProbeArgs, parse_header};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_positive_usize(value: usize, field: &str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}

fn parse_headers(headers: &[String]) -> AppResult<Vec<(String, String)>> {
    let mut parsed = Vec::with_capacity(headers.len());
    for header in headers {
        parsed.push(
            parse_header(header)
                .map_err(|err| AppError::config(ConfigError::InvalidHeader { source: err }))?,
        );
    }
    Ok(parsed)
}

/// Applies config-file values to CLI arguments; values the user set
/// explicitly on the command line always win.
///
/// # Errors
///
/// Returns an error when config values are invalid (zero concurrency,
/// malformed headers or durations).
pub fn apply_config(
    args: &mut ProbeArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = Some(url);
    }

    if !is_cli(matches, "mode")
        && let Some(mode) = config.mode
    {
        args.mode = mode;
    }

    if !is_cli(matches, "concurrency")
        && let Some(value) = config.concurrency
    {
        args.concurrency = ensure_positive_usize(value, "concurrency")?;
    }

    if !is_cli(matches, "requests")
        && let Some(value) = config.requests
    {
        args.requests = value;
    }

    if !is_cli(matches, "expected_status")
        && let Some(status) = config.expected_status
    {
        args.expected_status = status;
    }

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = timeout.resolve("timeout")?;
    }

    if !is_cli(matches, "delay")
        && let Some(delay) = config.delay.as_ref()
    {
        args.delay = delay.resolve("delay")?;
    }

    if !is_cli(matches, "headers")
        && let Some(headers) = config.headers.as_ref()
    {
        args.headers = parse_headers(headers)?;
    }

    if !is_cli(matches, "bearer")
        && let Some(bearer) = config.bearer.clone()
    {
        args.bearer = Some(bearer);
    }

    if !is_cli(matches, "baseline")
        && let Some(baseline) = config.baseline
    {
        args.baseline = baseline;
    }

    if !is_cli(matches, "output_format")
        && let Some(format) = config.output_format
    {
        args.output_format = format;
    }

    if !is_cli(matches, "export_json")
        && let Some(path) = config.export_json.clone()
    {
        args.export_json = Some(path);
    }

    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    Ok(())
}
