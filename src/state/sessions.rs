//! In-memory registry of games waiting for their second player.

use std::fmt;

use dashmap::{DashMap, mapref::entry::Entry};
use thiserror::Error;

use crate::state::duel::Player;

/// Opaque token correlating a challenge with its acceptance and resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A challenge waiting for the second player's choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub id: GameId,
    /// The player who issued the challenge, including their hidden choice.
    pub challenger: Player,
}

/// Errors raised by [`SessionRegistry`] mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A game with the same identifier is still open.
    #[error("game `{0}` already exists")]
    AlreadyExists(GameId),
}

/// Games in progress keyed by their identifier.
///
/// Entries live only in process memory and are lost on restart. Games that are
/// never completed stay in the registry.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: DashMap<GameId, GameSession>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new game, refusing to overwrite an open one.
    pub fn create(&self, session: GameSession) -> Result<(), SessionError> {
        match self.sessions.entry(session.id.clone()) {
            Entry::Occupied(entry) => Err(SessionError::AlreadyExists(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(session);
                Ok(())
            }
        }
    }

    /// Look up an open game without removing it.
    pub fn get(&self, id: &GameId) -> Option<GameSession> {
        self.sessions.get(id).map(|entry| entry.value().clone())
    }

    /// Atomically remove and return an open game.
    ///
    /// Only one caller can ever observe a given session; every other caller gets `None`.
    pub fn consume(&self, id: &GameId) -> Option<GameSession> {
        self.sessions.remove(id).map(|(_, session)| session)
    }

    /// Number of games waiting for a second player.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::state::choice::Choice;

    fn session(id: &str) -> GameSession {
        GameSession {
            id: GameId::new(id),
            challenger: Player::new("U1", Choice::Rock),
        }
    }

    #[test]
    fn consume_returns_created_session_once() {
        let registry = SessionRegistry::new();
        registry.create(session("g1")).unwrap();

        let id = GameId::new("g1");
        assert_eq!(registry.get(&id), Some(session("g1")));
        assert_eq!(registry.consume(&id), Some(session("g1")));
        assert_eq!(registry.consume(&id), None);
        assert!(registry.is_empty());
    }

    #[test]
    fn unknown_game_is_absent() {
        let registry = SessionRegistry::new();
        assert_eq!(registry.get(&GameId::new("missing")), None);
        assert_eq!(registry.consume(&GameId::new("missing")), None);
    }

    #[test]
    fn create_refuses_to_overwrite() {
        let registry = SessionRegistry::new();
        registry.create(session("g1")).unwrap();

        let mut duplicate = session("g1");
        duplicate.challenger = Player::new("U9", Choice::Paper);
        assert_eq!(
            registry.create(duplicate),
            Err(SessionError::AlreadyExists(GameId::new("g1")))
        );
        assert_eq!(
            registry.get(&GameId::new("g1")).map(|s| s.challenger.id),
            Some("U1".to_string())
        );
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_consume_resolves_once() {
        for round in 0..50 {
            let registry = Arc::new(SessionRegistry::new());
            let id = format!("g{round}");
            registry.create(session(&id)).unwrap();

            let handles: Vec<_> = (0..2)
                .map(|_| {
                    let registry = registry.clone();
                    let id = GameId::new(id.clone());
                    tokio::spawn(async move { registry.consume(&id) })
                })
                .collect();

            let mut winners = 0;
            for handle in handles {
                if handle.await.unwrap().is_some() {
                    winners += 1;
                }
            }
            assert_eq!(winners, 1);
        }
    }
}
