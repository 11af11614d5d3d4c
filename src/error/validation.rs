use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing URL (set --url or provide one in config).")]
    MissingUrl,
    #[error("Invalid header. Expected 'Key: Value', got '{value}'.")]
    InvalidHeaderFormat { value: String },
    #[error("Invalid number: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Unsupported URL scheme '{scheme}'. Use http or https.")]
    UnsupportedUrlScheme { scheme: String },
    #[error("URL must have a host.")]
    UrlMissingHost,
    #[error("Request timeout must be > 0.")]
    ZeroRequestTimeout,
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
}
