use axum::{
    Json, Router,
    body::{Body, to_bytes},
    extract::State,
    http::{HeaderMap, Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::post,
};
use axum_valid::Valid;
use tracing::warn;

use crate::{
    dto::{interaction::InteractionPayload, response::InteractionResponse},
    error::{AppError, ServiceError},
    services::{interaction_service, side_effects},
    state::{SharedState, interaction::Interaction},
};

const SIGNATURE_HEADER: &str = "x-signature-ed25519";
const TIMESTAMP_HEADER: &str = "x-signature-timestamp";
/// Interaction payloads are small; anything larger is rejected before verification.
const MAX_BODY_BYTES: usize = 256 * 1024;

/// Webhook endpoint receiving every interaction, guarded by signature verification.
pub fn router(state: SharedState) -> Router<SharedState> {
    Router::new()
        .route("/interactions", post(interactions))
        .route_layer(middleware::from_fn_with_state(state, require_signature))
}

/// Handle a verified interaction and answer it.
#[utoipa::path(
    post,
    path = "/interactions",
    tag = "interactions",
    request_body = InteractionPayload,
    params(
        ("X-Signature-Ed25519" = String, Header, description = "Hex encoded Ed25519 signature of timestamp + body"),
        ("X-Signature-Timestamp" = String, Header, description = "Timestamp included in the signed message"),
    ),
    responses(
        (status = 200, description = "Interaction reply", body = InteractionResponse),
        (status = 204, description = "Interaction ignored"),
        (status = 400, description = "Malformed interaction or missing command argument"),
        (status = 401, description = "Missing or invalid signature"),
        (status = 502, description = "Catalog search failed")
    )
)]
pub async fn interactions(
    State(state): State<SharedState>,
    Valid(Json(payload)): Valid<Json<InteractionPayload>>,
) -> Result<Response, AppError> {
    let interaction = Interaction::try_from(payload).map_err(ServiceError::from)?;
    let dispatch = interaction_service::handle(&state, interaction).await?;

    side_effects::spawn(state.messaging(), dispatch.side_effects);

    Ok(match dispatch.reply {
        Some(reply) => Json(reply).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str, ServiceError> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ServiceError::Unauthorized(format!("missing header `{name}`")))
}

/// Reject requests whose body was not signed with the application key.
async fn require_signature(
    State(state): State<SharedState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let (parts, body) = req.into_parts();
    let signature = header(&parts.headers, SIGNATURE_HEADER)?;
    let timestamp = header(&parts.headers, TIMESTAMP_HEADER)?;

    let bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|err| AppError::BadRequest(format!("unreadable body: {err}")))?;

    if let Err(err) = state.verifier().verify(signature, timestamp, &bytes) {
        warn!(error = %err, "rejecting interaction with bad signature");
        return Err(ServiceError::Unauthorized("invalid request signature".into()).into());
    }

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}
