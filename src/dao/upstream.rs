use std::error::Error;
use thiserror::Error;

/// Result alias for calls to third-party services.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Error raised by outbound clients regardless of the service behind them.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{service} unavailable: {message}")]
    Unavailable {
        service: &'static str,
        message: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl UpstreamError {
    /// Construct an unavailable error from any client failure.
    pub fn unavailable(service: &'static str, source: impl Error + Send + Sync + 'static) -> Self {
        UpstreamError::Unavailable {
            service,
            message: source.to_string(),
            source: Box::new(source),
        }
    }
}
