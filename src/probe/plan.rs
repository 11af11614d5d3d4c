use std::time::Duration;

use tracing::warn;
use url::Url;

use crate::args::{ProbeArgs, ProbeMode};
use crate::error::{AppError, AppResult, HttpError, ValidationError};

const SUPPORTED_SCHEMES: [&str; 2] = ["http", "https"];

/// Validated, immutable parameters for one run.
#[derive(Debug, Clone)]
pub struct ProbePlan {
    pub url: Url,
    pub mode: ProbeMode,
    pub concurrency: usize,
    /// Zero is a valid empty run; it produces no outcomes.
    pub requests_per_worker: u64,
    pub expected_status: u16,
    pub request_timeout: Duration,
    pub inter_request_delay: Duration,
    pub headers: Vec<(String, String)>,
    pub bearer: Option<String>,
    pub baseline: bool,
}

impl ProbePlan {
    /// Builds a validated plan from CLI arguments. In burst mode the fleet
    /// collapses to a single sequential stream and `--requests` is the total
    /// burst size.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is missing, malformed or not http(s),
    /// or when run parameters are out of range. No network I/O has happened
    /// at that point.
    pub fn from_args(args: &ProbeArgs) -> AppResult<Self> {
        let raw_url = args
            .url
            .as_deref()
            .ok_or_else(|| AppError::validation(ValidationError::MissingUrl))?;
        let url = parse_target_url(raw_url)?;

        let concurrency = match args.mode {
            ProbeMode::Concurrent => args.concurrency.get(),
            ProbeMode::Burst => {
                if args.concurrency.get() > 1 {
                    warn!("--concurrency is ignored in burst mode.");
                }
                1
            }
        };

        let plan = Self {
            url,
            mode: args.mode,
            concurrency,
            requests_per_worker: args.requests,
            expected_status: args.expected_status,
            request_timeout: args.request_timeout,
            inter_request_delay: args.delay,
            headers: args.headers.clone(),
            bearer: args.bearer.clone(),
            baseline: args.baseline,
        };
        plan.validate()?;
        Ok(plan)
    }

    /// Checks the run parameters; called again by [`super::run`] so a
    /// hand-built plan cannot reach the network invalid.
    ///
    /// # Errors
    ///
    /// Returns an error for zero concurrency, a zero timeout, or a target
    /// URL that is not absolute http(s).
    pub fn validate(&self) -> AppResult<()> {
        if self.concurrency == 0 {
            return Err(AppError::validation(ValidationError::ValueTooSmall {
                min: 1,
            }));
        }
        if self.request_timeout.is_zero() {
            return Err(AppError::validation(ValidationError::ZeroRequestTimeout));
        }
        check_target_url(&self.url)
    }

    /// Requests the whole run will issue.
    #[must_use]
    pub fn total_requests(&self) -> u64 {
        (self.concurrency as u64).saturating_mul(self.requests_per_worker)
    }
}

fn parse_target_url(raw: &str) -> AppResult<Url> {
    let url = Url::parse(raw).map_err(|err| {
        AppError::http(HttpError::InvalidUrl {
            url: raw.to_owned(),
            source: err,
        })
    })?;
    check_target_url(&url)?;
    Ok(url)
}

fn check_target_url(url: &Url) -> AppResult<()> {
    if !SUPPORTED_SCHEMES.contains(&url.scheme()) {
        return Err(AppError::validation(ValidationError::UnsupportedUrlScheme {
            scheme: url.scheme().to_owned(),
        }));
    }
    if url.host_str().is_none() {
        return Err(AppError::validation(ValidationError::UrlMissingHost));
    }
    Ok(())
}
