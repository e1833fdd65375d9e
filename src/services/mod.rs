/// Startup installation of slash commands.
pub mod command_registration;
/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Classification-driven handling of interactions.
pub mod interaction_service;
/// Deferred calls made after a reply is computed.
pub mod side_effects;
/// Inbound request signature verification.
pub mod signature;
