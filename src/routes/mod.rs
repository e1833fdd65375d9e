use axum::Router;

use crate::state::SharedState;

pub mod docs;
pub mod health;
pub mod interactions;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    health::router()
        .merge(interactions::router(state.clone()))
        .merge(docs::router())
        .with_state(state)
}
