use std::sync::Arc;

use futures::future::BoxFuture;
use reqwest::{Client, Method, RequestBuilder, Response, header};
use serde::de::DeserializeOwned;

use crate::{
    dao::{messaging::MessagingApi, upstream::UpstreamResult},
    dto::{
        commands::{CommandDefinition, RegisteredCommand},
        response::MessageEdit,
    },
};

use super::{
    config::DiscordConfig,
    error::{DiscordError, DiscordResult},
};

const USER_AGENT: &str = concat!(
    "DiscordBot (duel-bot, ",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// Thin client over the Discord REST endpoints used by the bot.
#[derive(Clone)]
pub struct DiscordClient {
    client: Client,
    config: Arc<DiscordConfig>,
}

impl DiscordClient {
    pub fn new(config: DiscordConfig) -> DiscordResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| DiscordError::ClientBuilder { source })?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.config.api_base, path);
        self.client
            .request(method, url)
            .header(
                header::AUTHORIZATION,
                format!("Bot {}", self.config.bot_token),
            )
            .header(header::CONTENT_TYPE, "application/json; charset=UTF-8")
    }

    /// Send the request and turn non-success statuses into errors.
    ///
    /// `label` names the endpoint in errors and must not contain interaction tokens.
    async fn send(&self, builder: RequestBuilder, label: &str) -> DiscordResult<Response> {
        let response = builder
            .send()
            .await
            .map_err(|source| DiscordError::RequestSend {
                path: label.to_string(),
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(DiscordError::RequestStatus {
                path: label.to_string(),
                status,
                body,
            })
        }
    }

    async fn send_json<T>(&self, builder: RequestBuilder, label: &str) -> DiscordResult<T>
    where
        T: DeserializeOwned,
    {
        self.send(builder, label)
            .await?
            .json::<T>()
            .await
            .map_err(|source| DiscordError::DecodeResponse {
                path: label.to_string(),
                source,
            })
    }

    fn webhook_message_path(&self, token: &str, message_id: &str) -> (String, String) {
        let app = &self.config.application_id;
        (
            format!("webhooks/{app}/{token}/messages/{message_id}"),
            format!("webhooks/{app}/<token>/messages/{message_id}"),
        )
    }

    fn guild_commands_path(&self, guild_id: &str) -> String {
        format!(
            "applications/{}/guilds/{guild_id}/commands",
            self.config.application_id
        )
    }
}

impl MessagingApi for DiscordClient {
    fn delete_message(
        &self,
        token: String,
        message_id: String,
    ) -> BoxFuture<'static, UpstreamResult<()>> {
        let discord = self.clone();
        Box::pin(async move {
            let (path, label) = discord.webhook_message_path(&token, &message_id);
            let builder = discord.request(Method::DELETE, &path);
            discord.send(builder, &label).await?;
            Ok(())
        })
    }

    fn edit_message(
        &self,
        token: String,
        message_id: String,
        edit: MessageEdit,
    ) -> BoxFuture<'static, UpstreamResult<()>> {
        let discord = self.clone();
        Box::pin(async move {
            let (path, label) = discord.webhook_message_path(&token, &message_id);
            let builder = discord.request(Method::PATCH, &path).json(&edit);
            discord.send(builder, &label).await?;
            Ok(())
        })
    }

    fn list_guild_commands(
        &self,
        guild_id: String,
    ) -> BoxFuture<'static, UpstreamResult<Vec<RegisteredCommand>>> {
        let discord = self.clone();
        Box::pin(async move {
            let path = discord.guild_commands_path(&guild_id);
            let builder = discord.request(Method::GET, &path);
            discord
                .send_json::<Vec<RegisteredCommand>>(builder, &path)
                .await
                .map_err(Into::into)
        })
    }

    fn create_guild_command(
        &self,
        guild_id: String,
        command: CommandDefinition,
    ) -> BoxFuture<'static, UpstreamResult<()>> {
        let discord = self.clone();
        Box::pin(async move {
            let path = discord.guild_commands_path(&guild_id);
            let builder = discord.request(Method::POST, &path).json(&command);
            discord.send(builder, &path).await?;
            Ok(())
        })
    }
}
