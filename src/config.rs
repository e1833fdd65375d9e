//! Application-level configuration loading, including the runtime emoji set.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use rand::seq::IndexedRandom;
use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "DUEL_BOT_CONFIG_PATH";
/// Fallback emoji returned when the configured set is empty.
const DEFAULT_EMOJI: &str = "✨";

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    emojis: Vec<String>,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to a baked-in emoji set.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let app_config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        count = app_config.emojis.len(),
                        "loaded emoji set from config"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Build a configuration from an explicit emoji set.
    pub fn with_emojis(emojis: Vec<String>) -> Self {
        Self { emojis }
    }

    /// Pick a random emoji from the configured set.
    pub fn random_emoji(&self) -> &str {
        self.emojis
            .choose(&mut rand::rng())
            .map(String::as_str)
            .unwrap_or(DEFAULT_EMOJI)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            emojis: default_emojis(),
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    emojis: Vec<String>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let emojis = value
            .emojis
            .into_iter()
            .map(|emoji| emoji.trim().to_string())
            .filter(|emoji| !emoji.is_empty())
            .collect();
        Self { emojis }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Built-in emoji set shipped with the binary.
fn default_emojis() -> Vec<String> {
    [
        "😭", "😄", "😌", "🤓", "😎", "😤", "🤖", "😶‍🌫️", "🌏", "📸", "💿", "👋", "🌊", "✨",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
