use std::time::Duration;

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue, USER_AGENT};

use crate::error::{AppError, AppResult, HttpError};

pub const DEFAULT_USER_AGENT: &str = concat!("surgeprobe/", env!("CARGO_PKG_VERSION"));

/// Builds the shared client for a run: per-request timeout plus default
/// headers (User-Agent, extra headers, optional bearer token).
///
/// # Errors
///
/// Returns an error when a header name or value is not representable, or
/// when the underlying client cannot be constructed.
pub fn build_client(
    timeout: Duration,
    headers: &[(String, String)],
    bearer: Option<&str>,
) -> AppResult<Client> {
    let mut default_headers = HeaderMap::new();
    default_headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));

    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|err| {
            AppError::http(HttpError::InvalidHeaderName {
                name: name.clone(),
                source: err,
            })
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|err| {
            AppError::http(HttpError::InvalidHeaderValue {
                name: name.clone(),
                source: err,
            })
        })?;
        default_headers.insert(header_name, header_value);
    }

    if let Some(token) = bearer {
        let header_value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|err| {
            AppError::http(HttpError::InvalidHeaderValue {
                name: AUTHORIZATION.as_str().to_owned(),
                source: err,
            })
        })?;
        default_headers.insert(AUTHORIZATION, header_value);
    }

    Client::builder()
        .timeout(timeout)
        .default_headers(default_headers)
        .build()
        .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))
}
