use std::time::Duration;

use clap::{CommandFactory, FromArgMatches};
use tempfile::tempdir;

use super::types::DurationValue;
use super::{apply_config, load_config_file};
use crate::args::{ProbeArgs, ProbeMode};
use crate::error::{AppError, ConfigError};

fn parsed_args(argv: &[&str]) -> Result<(ProbeArgs, clap::ArgMatches), String> {
    let cmd = ProbeArgs::command();
    let matches = cmd
        .try_get_matches_from(argv)
        .map_err(|err| format!("arg parse failed: {}", err))?;
    let args =
        ProbeArgs::from_arg_matches(&matches).map_err(|err| format!("args failed: {}", err))?;
    Ok((args, matches))
}

#[test]
fn parse_toml_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("surgeprobe.toml");
    let content = r#"
url = "http://localhost:3000/api/matches/6"
mode = "concurrent"
concurrency = 10
requests = 5
status = 200
timeout = "5s"
delay = "100ms"
headers = ["Accept: application/json"]
bearer = "token-123"
"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| format!("load failed: {}", err))?;
    if config.url.as_deref() != Some("http://localhost:3000/api/matches/6") {
        return Err("Unexpected url".to_owned());
    }
    if config.mode != Some(ProbeMode::Concurrent) {
        return Err("Unexpected mode".to_owned());
    }
    if config.concurrency != Some(10) || config.requests != Some(5) {
        return Err("Unexpected counts".to_owned());
    }
    if config.expected_status != Some(200) {
        return Err("Unexpected status".to_owned());
    }
    if config.bearer.as_deref() != Some("token-123") {
        return Err("Unexpected bearer".to_owned());
    }
    Ok(())
}

#[test]
fn parse_json_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("surgeprobe.json");
    let content = r#"{
  "url": "http://localhost:3000",
  "mode": "burst",
  "requests": 20,
  "timeout": 5
}"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| format!("load failed: {}", err))?;
    if config.mode != Some(ProbeMode::Burst) {
        return Err("Unexpected mode".to_owned());
    }
    if config.requests != Some(20) {
        return Err("Unexpected requests".to_owned());
    }
    let timeout = config
        .timeout
        .as_ref()
        .ok_or_else(|| "Expected timeout".to_owned())?
        .resolve("timeout")
        .map_err(|err| format!("resolve failed: {}", err))?;
    if timeout != Duration::from_secs(5) {
        return Err(format!("Unexpected timeout: {:?}", timeout));
    }
    Ok(())
}

#[test]
fn unsupported_extension_is_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("surgeprobe.yaml");
    std::fs::write(&path, "url: nope").map_err(|err| format!("write failed: {}", err))?;

    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::UnsupportedExtension { ext })) if ext == "yaml" => Ok(()),
        Err(other) => Err(format!("Unexpected error: {}", other)),
        Ok(_) => Err("Expected an extension error".to_owned()),
    }
}

#[test]
fn explicit_cli_flags_win_over_config_values() -> Result<(), String> {
    let (mut args, matches) = parsed_args(&["surgeprobe", "-c", "9"])?;
    let config = super::ConfigFile {
        url: Some("http://localhost:3000".to_owned()),
        concurrency: Some(2),
        requests: Some(50),
        ..Default::default()
    };

    apply_config(&mut args, &matches, &config).map_err(|err| format!("apply failed: {}", err))?;

    // Explicit -c 9 survives; url and requests fill from the file.
    if args.concurrency.get() != 9 {
        return Err(format!("CLI value lost: {}", args.concurrency.get()));
    }
    if args.url.as_deref() != Some("http://localhost:3000") {
        return Err("Config url not applied".to_owned());
    }
    if args.requests != 50 {
        return Err(format!("Config requests not applied: {}", args.requests));
    }
    Ok(())
}

#[test]
fn config_durations_and_headers_are_applied() -> Result<(), String> {
    let (mut args, matches) = parsed_args(&["surgeprobe"])?;
    let config = super::ConfigFile {
        url: Some("http://localhost:3000".to_owned()),
        timeout: Some(DurationValue::Text("3s".to_owned())),
        delay: Some(DurationValue::Text("50ms".to_owned())),
        headers: Some(vec!["Accept: application/json".to_owned()]),
        ..Default::default()
    };

    apply_config(&mut args, &matches, &config).map_err(|err| format!("apply failed: {}", err))?;

    if args.request_timeout != Duration::from_secs(3) {
        return Err(format!("Unexpected timeout: {:?}", args.request_timeout));
    }
    if args.delay != Duration::from_millis(50) {
        return Err(format!("Unexpected delay: {:?}", args.delay));
    }
    if args.headers
        != vec![("Accept".to_owned(), "application/json".to_owned())]
    {
        return Err(format!("Unexpected headers: {:?}", args.headers));
    }
    Ok(())
}

#[test]
fn zero_concurrency_in_config_names_the_field() -> Result<(), String> {
    let (mut args, matches) = parsed_args(&["surgeprobe"])?;
    let config = super::ConfigFile {
        concurrency: Some(0),
        ..Default::default()
    };

    match apply_config(&mut args, &matches, &config) {
        Err(AppError::Config(ConfigError::FieldMustBePositive { field, .. }))
            if field == "concurrency" =>
        {
            Ok(())
        }
        Err(other) => Err(format!("Unexpected error: {}", other)),
        Ok(()) => Err("Expected a config error".to_owned()),
    }
}

#[test]
fn malformed_config_header_is_rejected() -> Result<(), String> {
    let (mut args, matches) = parsed_args(&["surgeprobe"])?;
    let config = super::ConfigFile {
        headers: Some(vec!["no colon".to_owned()]),
        ..Default::default()
    };

    match apply_config(&mut args, &matches, &config) {
        Err(AppError::Config(ConfigError::InvalidHeader { .. })) => Ok(()),
        Err(other) => Err(format!("Unexpected error: {}", other)),
        Ok(()) => Err("Expected a header error".to_owned()),
    }
}
