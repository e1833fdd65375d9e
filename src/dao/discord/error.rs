//! Error types raised by the Discord REST client.

use reqwest::StatusCode;
use thiserror::Error;

use crate::dao::upstream::UpstreamError;

/// Convenient result alias returning [`DiscordError`] failures.
pub type DiscordResult<T> = Result<T, DiscordError>;

/// Failures that can occur while calling the Discord REST API.
#[derive(Debug, Error)]
pub enum DiscordError {
    /// Required environment variable is missing.
    #[error("missing Discord environment variable `{var}`")]
    MissingEnvVar { var: &'static str },
    /// Building the HTTP client failed (invalid TLS setup, etc).
    #[error("failed to build Discord client")]
    ClientBuilder {
        #[source]
        source: reqwest::Error,
    },
    /// A request could not be sent.
    #[error("failed to send Discord request to `{path}`")]
    RequestSend {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    /// Discord answered with a non-success status.
    #[error("unexpected Discord response status {status} for `{path}`: {body}")]
    RequestStatus {
        path: String,
        status: StatusCode,
        body: String,
    },
    /// Response payload could not be parsed.
    #[error("failed to decode Discord response for `{path}`")]
    DecodeResponse {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

impl From<DiscordError> for UpstreamError {
    fn from(err: DiscordError) -> Self {
        UpstreamError::unavailable("discord", err)
    }
}
