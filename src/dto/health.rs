use serde::Serialize;
use utoipa::ToSchema;

/// Simple health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status, always "ok" while the process serves requests.
    pub status: String,
    /// Challenges still waiting for a second player.
    pub open_games: usize,
}

impl HealthResponse {
    /// Create a health response indicating the system is operational.
    pub fn ok(open_games: usize) -> Self {
        Self {
            status: "ok".to_string(),
            open_games,
        }
    }
}
