use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the bot's HTTP surface.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::interactions::interactions,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::interaction::InteractionPayload,
            crate::dto::response::InteractionResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "interactions", description = "Signed webhook receiving platform interactions"),
    )
)]
pub struct ApiDoc;
