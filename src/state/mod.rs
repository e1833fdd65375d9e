pub mod choice;
pub mod duel;
pub mod interaction;
pub mod sessions;

use std::sync::Arc;

use crate::{
    config::AppConfig,
    dao::{catalog::CatalogSearch, messaging::MessagingApi},
    services::signature::SignatureVerifier,
};

pub use self::sessions::{GameId, GameSession, SessionError, SessionRegistry};

pub type SharedState = Arc<AppState>;

/// Central application state: open games plus the collaborators handlers call out to.
pub struct AppState {
    config: AppConfig,
    sessions: SessionRegistry,
    verifier: SignatureVerifier,
    catalog: Arc<dyn CatalogSearch>,
    messaging: Arc<dyn MessagingApi>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(
        config: AppConfig,
        verifier: SignatureVerifier,
        catalog: Arc<dyn CatalogSearch>,
        messaging: Arc<dyn MessagingApi>,
    ) -> SharedState {
        Arc::new(Self {
            config,
            sessions: SessionRegistry::new(),
            verifier,
            catalog,
            messaging,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Games waiting for their second player.
    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    /// Verifier for inbound request signatures.
    pub fn verifier(&self) -> &SignatureVerifier {
        &self.verifier
    }

    pub fn catalog(&self) -> Arc<dyn CatalogSearch> {
        self.catalog.clone()
    }

    pub fn messaging(&self) -> Arc<dyn MessagingApi> {
        self.messaging.clone()
    }
}
