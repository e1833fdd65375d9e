use crate::{dto::health::HealthResponse, state::SharedState};

/// Report liveness together with the number of games still waiting for a second player.
pub fn health_status(state: &SharedState) -> HealthResponse {
    HealthResponse::ok(state.sessions().len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        state::{GameId, GameSession, choice::Choice, duel::Player},
        test_support::{FakeCatalog, FakeMessaging, state_with},
    };

    #[test]
    fn counts_open_games() {
        let state = state_with(FakeCatalog::with_items(vec![]), FakeMessaging::new());
        assert_eq!(health_status(&state).open_games, 0);

        state
            .sessions()
            .create(GameSession {
                id: GameId::new("g1"),
                challenger: Player::new("U1", Choice::Rock),
            })
            .unwrap();
        let status = health_status(&state);
        assert_eq!(status.status, "ok");
        assert_eq!(status.open_games, 1);
    }
}
