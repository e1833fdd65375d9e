use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use futures::future::BoxFuture;
use reqwest::{Client, StatusCode};
use tokio::sync::Mutex;
use tracing::debug;

use crate::dao::{
    catalog::{CatalogItem, CatalogSearch},
    upstream::UpstreamResult,
};

use super::{
    config::SpotifyConfig,
    error::{SpotifyError, SpotifyResult},
    models::{SearchResponse, TokenResponse},
};

/// Tokens are refreshed this long before Spotify says they expire.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
struct CachedToken {
    value: Arc<str>,
    expires_at: Instant,
}

/// Spotify Web API client authenticated with the client-credentials flow.
#[derive(Clone)]
pub struct SpotifyClient {
    client: Client,
    config: Arc<SpotifyConfig>,
    token: Arc<Mutex<Option<CachedToken>>>,
}

impl SpotifyClient {
    pub fn new(config: SpotifyConfig) -> SpotifyResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|source| SpotifyError::ClientBuilder { source })?;

        Ok(Self {
            client,
            config: Arc::new(config),
            token: Arc::new(Mutex::new(None)),
        })
    }

    /// Exchange the client credentials for a fresh access token.
    async fn authorize(&self) -> SpotifyResult<TokenResponse> {
        let path = self.config.accounts_url.clone();
        let response = self
            .client
            .post(&path)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|source| SpotifyError::RequestSend {
                path: path.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(SpotifyError::RequestStatus {
                path,
                status: response.status(),
            });
        }

        response
            .json::<TokenResponse>()
            .await
            .map_err(|source| SpotifyError::DecodeResponse { path, source })
    }

    /// Return a cached access token, refreshing it when missing or about to expire.
    async fn access_token(&self) -> SpotifyResult<Arc<str>> {
        let mut guard = self.token.lock().await;
        if let Some(cached) = guard
            .as_ref()
            .filter(|cached| cached.expires_at > Instant::now())
        {
            return Ok(cached.value.clone());
        }

        let fresh = self.authorize().await?;
        let lifetime = Duration::from_secs(fresh.expires_in).saturating_sub(TOKEN_EXPIRY_MARGIN);
        let cached = CachedToken {
            value: Arc::from(fresh.access_token),
            expires_at: Instant::now() + lifetime,
        };
        debug!(lifetime_secs = lifetime.as_secs(), "refreshed Spotify access token");
        let value = cached.value.clone();
        *guard = Some(cached);
        Ok(value)
    }

    async fn forget_token(&self) {
        self.token.lock().await.take();
    }

    async fn find_artists(&self, query: &str) -> SpotifyResult<Vec<CatalogItem>> {
        let token = self.access_token().await?;
        let path = format!("{}/search", self.config.api_url);
        let response = self
            .client
            .get(&path)
            .bearer_auth(token.as_ref())
            .query(&[("q", query), ("type", "artist")])
            .send()
            .await
            .map_err(|source| SpotifyError::RequestSend {
                path: path.clone(),
                source,
            })?;

        match response.status() {
            status if status.is_success() => response
                .json::<SearchResponse>()
                .await
                .map(SearchResponse::into_items)
                .map_err(|source| SpotifyError::DecodeResponse { path, source }),
            StatusCode::UNAUTHORIZED => {
                // revoked before its advertised expiry
                self.forget_token().await;
                Err(SpotifyError::RequestStatus {
                    path,
                    status: StatusCode::UNAUTHORIZED,
                })
            }
            other => Err(SpotifyError::RequestStatus {
                path,
                status: other,
            }),
        }
    }
}

impl CatalogSearch for SpotifyClient {
    fn search_artists(&self, query: String) -> BoxFuture<'static, UpstreamResult<Vec<CatalogItem>>> {
        let client = self.clone();
        Box::pin(async move { client.find_artists(&query).await.map_err(Into::into) })
    }
}
