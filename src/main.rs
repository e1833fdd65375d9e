//! duel-bot binary entrypoint wiring the interactions webhook to Discord and Spotify.

use std::{env, net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use duel_bot::{
    config::AppConfig,
    dao::{
        discord::{DiscordClient, DiscordConfig},
        messaging::MessagingApi,
        spotify::{SpotifyClient, SpotifyConfig},
    },
    dto::commands::all_commands,
    routes,
    services::{command_registration::install_guild_commands, signature::SignatureVerifier},
    state::{AppState, SharedState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let discord_config = DiscordConfig::from_env().context("loading Discord configuration")?;
    let spotify_config = SpotifyConfig::from_env().context("loading Spotify configuration")?;

    let verifier = SignatureVerifier::from_hex(&discord_config.public_key)
        .context("parsing PUBLIC_KEY")?;
    let guild_id = discord_config.guild_id.clone();
    let discord: Arc<dyn MessagingApi> =
        Arc::new(DiscordClient::new(discord_config).context("building Discord client")?);
    let spotify = Arc::new(SpotifyClient::new(spotify_config).context("building Spotify client")?);

    let app_state = AppState::new(AppConfig::load(), verifier, spotify, discord.clone());

    match guild_id {
        Some(guild_id) => {
            tokio::spawn(register_commands(discord, guild_id));
        }
        None => info!("GUILD_ID not set; skipping command registration"),
    }

    let app = build_router(app_state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(3000);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(%addr, "starting server");

    let listener = TcpListener::bind(addr).await.context("binding server")?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum")?;

    Ok(())
}

/// Make sure the guild knows every command the bot answers to.
async fn register_commands(discord: Arc<dyn MessagingApi>, guild_id: String) {
    match install_guild_commands(discord.as_ref(), &guild_id, all_commands()).await {
        Ok(created) => info!(%guild_id, created = created.len(), "guild commands up to date"),
        Err(err) => warn!(%guild_id, error = %err, "failed to check guild commands"),
    }
}

/// Build the top-level router and attach cross-cutting middleware layers.
fn build_router(state: SharedState) -> Router<()> {
    routes::router(state).layer(TraceLayer::new_for_http())
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut term = signal(SignalKind::terminate()).expect("install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = term.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
