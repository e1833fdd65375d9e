use super::error::{SpotifyError, SpotifyResult};

const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Runtime configuration describing how to reach the Spotify Web API.
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Token endpoint used for the client-credentials exchange.
    pub accounts_url: String,
    /// Base URL of the Web API, without trailing slash.
    pub api_url: String,
}

impl SpotifyConfig {
    /// Construct a configuration for the public Spotify endpoints.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            accounts_url: DEFAULT_ACCOUNTS_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Point the client at other endpoints (proxies, mocks).
    pub fn with_endpoints(
        mut self,
        accounts_url: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Self {
        self.accounts_url = accounts_url.into();
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Build a configuration by reading the expected environment variables.
    pub fn from_env() -> SpotifyResult<Self> {
        let client_id =
            std::env::var("SPOTIFY_CLIENT_ID").map_err(|_| SpotifyError::MissingEnvVar {
                var: "SPOTIFY_CLIENT_ID",
            })?;
        let client_secret =
            std::env::var("SPOTIFY_CLIENT_SECRET").map_err(|_| SpotifyError::MissingEnvVar {
                var: "SPOTIFY_CLIENT_SECRET",
            })?;

        Ok(Self::new(client_id, client_secret))
    }
}
