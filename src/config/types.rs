use std::time::Duration;

use serde::Deserialize;

use crate::args::{OutputFormat, ProbeMode, parsers::parse_duration_arg};
use crate::error::{AppError, AppResult, ConfigError};

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub mode: Option<ProbeMode>,
    #[serde(alias = "workers")]
    pub concurrency: Option<usize>,
    #[serde(alias = "requests_per_worker")]
    pub requests: Option<u64>,
    #[serde(alias = "status")]
    pub expected_status: Option<u16>,
    pub timeout: Option<DurationValue>,
    pub delay: Option<DurationValue>,
    pub headers: Option<Vec<String>>,
    pub bearer: Option<String>,
    pub baseline: Option<bool>,
    pub output_format: Option<OutputFormat>,
    pub export_json: Option<String>,
    pub no_color: Option<bool>,
}

/// Duration fields accept either a bare number of seconds or a string with a
/// unit (`"500ms"`, `"2m"`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    /// Resolves the configured value into a [`Duration`].
    ///
    /// # Errors
    ///
    /// Returns an error when the string form is not a valid duration.
    pub fn resolve(&self, field: &str) -> AppResult<Duration> {
        match self {
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_duration_arg(text).map_err(|err| match err {
                AppError::Validation(source) => AppError::config(ConfigError::InvalidDuration {
                    field: field.to_owned(),
                    source,
                }),
                other => other,
            }),
        }
    }
}
