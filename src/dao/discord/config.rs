use super::error::{DiscordError, DiscordResult};

const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";

/// Runtime configuration describing the Discord application the bot acts as.
#[derive(Debug, Clone)]
pub struct DiscordConfig {
    pub application_id: String,
    pub bot_token: String,
    /// Hex encoded Ed25519 key used to verify inbound interactions.
    pub public_key: String,
    /// Guild where commands are installed at startup, if any.
    pub guild_id: Option<String>,
    pub api_base: String,
}

impl DiscordConfig {
    pub fn new(
        application_id: impl Into<String>,
        bot_token: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            application_id: application_id.into(),
            bot_token: bot_token.into(),
            public_key: public_key.into(),
            guild_id: None,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    pub fn with_guild(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = Some(guild_id.into());
        self
    }

    /// Build a configuration by reading the expected environment variables.
    pub fn from_env() -> DiscordResult<Self> {
        let required = |var: &'static str| {
            std::env::var(var).map_err(|_| DiscordError::MissingEnvVar { var })
        };

        let mut config = Self::new(
            required("APP_ID")?,
            required("DISCORD_TOKEN")?,
            required("PUBLIC_KEY")?,
        );

        if let Some(guild_id) = std::env::var("GUILD_ID")
            .ok()
            .filter(|value| !value.trim().is_empty())
        {
            config = config.with_guild(guild_id);
        }

        Ok(config)
    }
}
