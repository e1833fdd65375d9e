//! Fakes for the outbound collaborators, shared by unit tests.

use std::sync::{Arc, Mutex};

use ed25519_dalek::SigningKey;
use futures::future::BoxFuture;

use crate::{
    config::AppConfig,
    dao::{
        catalog::{CatalogItem, CatalogSearch},
        messaging::MessagingApi,
        upstream::{UpstreamError, UpstreamResult},
    },
    dto::{
        commands::{CommandDefinition, RegisteredCommand},
        response::MessageEdit,
    },
    services::signature::SignatureVerifier,
    state::{AppState, SharedState},
};

fn fake_failure(service: &'static str) -> UpstreamError {
    UpstreamError::unavailable(service, std::io::Error::other("fake failure"))
}

/// Catalog returning canned results and recording every query.
pub struct FakeCatalog {
    items: Vec<CatalogItem>,
    fail: bool,
    queries: Arc<Mutex<Vec<String>>>,
}

impl FakeCatalog {
    pub fn with_items(items: Vec<CatalogItem>) -> Arc<Self> {
        Arc::new(Self {
            items,
            fail: false,
            queries: Arc::default(),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            items: Vec::new(),
            fail: true,
            queries: Arc::default(),
        })
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl CatalogSearch for FakeCatalog {
    fn search_artists(&self, query: String) -> BoxFuture<'static, UpstreamResult<Vec<CatalogItem>>> {
        self.queries.lock().unwrap().push(query);
        let outcome = if self.fail {
            Err(fake_failure("catalog"))
        } else {
            Ok(self.items.clone())
        };
        Box::pin(async move { outcome })
    }
}

/// Calls observed by [`FakeMessaging`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Delete {
        token: String,
        message_id: String,
    },
    Edit {
        token: String,
        message_id: String,
        edit: MessageEdit,
    },
    ListCommands {
        guild_id: String,
    },
    CreateCommand {
        guild_id: String,
        name: String,
    },
}

/// Messaging platform double recording calls; optionally fails every call.
pub struct FakeMessaging {
    registered: Vec<RegisteredCommand>,
    fail: bool,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl FakeMessaging {
    pub fn new() -> Arc<Self> {
        Self::with_registered(Vec::new())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            registered: Vec::new(),
            fail: true,
            calls: Arc::default(),
        })
    }

    pub fn with_registered(names: Vec<&str>) -> Arc<Self> {
        let registered = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| RegisteredCommand {
                id: index.to_string(),
                name: name.to_string(),
            })
            .collect();
        Arc::new(Self {
            registered,
            fail: false,
            calls: Arc::default(),
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record<T: Send + 'static>(
        &self,
        call: Call,
        value: T,
    ) -> BoxFuture<'static, UpstreamResult<T>> {
        self.calls.lock().unwrap().push(call);
        let outcome = if self.fail {
            Err(fake_failure("messaging"))
        } else {
            Ok(value)
        };
        Box::pin(async move { outcome })
    }
}

impl MessagingApi for FakeMessaging {
    fn delete_message(
        &self,
        token: String,
        message_id: String,
    ) -> BoxFuture<'static, UpstreamResult<()>> {
        self.record(Call::Delete { token, message_id }, ())
    }

    fn edit_message(
        &self,
        token: String,
        message_id: String,
        edit: MessageEdit,
    ) -> BoxFuture<'static, UpstreamResult<()>> {
        self.record(
            Call::Edit {
                token,
                message_id,
                edit,
            },
            (),
        )
    }

    fn list_guild_commands(
        &self,
        guild_id: String,
    ) -> BoxFuture<'static, UpstreamResult<Vec<RegisteredCommand>>> {
        self.record(Call::ListCommands { guild_id }, self.registered.clone())
    }

    fn create_guild_command(
        &self,
        guild_id: String,
        command: CommandDefinition,
    ) -> BoxFuture<'static, UpstreamResult<()>> {
        self.record(
            Call::CreateCommand {
                guild_id,
                name: command.name,
            },
            (),
        )
    }
}

/// Key the test verifier trusts.
pub fn signing_key() -> SigningKey {
    SigningKey::from_bytes(&[42u8; 32])
}

/// Application state wired to the given fakes and a single-emoji config.
pub fn state_with(catalog: Arc<FakeCatalog>, messaging: Arc<FakeMessaging>) -> SharedState {
    AppState::new(
        AppConfig::with_emojis(vec!["🎲".to_string()]),
        SignatureVerifier::new(signing_key().verifying_key()),
        catalog,
        messaging,
    )
}
