//! Error types raised by the Spotify client.

use reqwest::StatusCode;
use thiserror::Error;

use crate::dao::upstream::UpstreamError;

/// Convenient result alias returning [`SpotifyError`] failures.
pub type SpotifyResult<T> = Result<T, SpotifyError>;

/// Failures that can occur while talking to Spotify.
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// Required environment variable is missing.
    #[error("missing Spotify environment variable `{var}`")]
    MissingEnvVar { var: &'static str },
    /// Building the HTTP client failed (invalid TLS setup, etc).
    #[error("failed to build Spotify client")]
    ClientBuilder {
        #[source]
        source: reqwest::Error,
    },
    /// A request could not be sent.
    #[error("failed to send Spotify request to `{path}`")]
    RequestSend {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    /// Spotify answered with a non-success status.
    #[error("unexpected Spotify response status {status} for `{path}`")]
    RequestStatus { path: String, status: StatusCode },
    /// Response payload could not be parsed.
    #[error("failed to decode Spotify response for `{path}`")]
    DecodeResponse {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

impl From<SpotifyError> for UpstreamError {
    fn from(err: SpotifyError) -> Self {
        UpstreamError::unavailable("spotify", err)
    }
}
