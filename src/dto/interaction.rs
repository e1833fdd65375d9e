//! Raw inbound webhook payload and its classification into [`Interaction`].

use serde::Deserialize;
use serde_json::Value;
use serde_with::{DisplayFromStr, serde_as};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

use crate::state::interaction::{ComponentAction, Interaction, InteractionContext, SlashCommand};

/// Interaction type of the endpoint health check sent by the platform.
pub const PING: u8 = 1;
/// Interaction type of a slash command invocation.
pub const APPLICATION_COMMAND: u8 = 2;
/// Interaction type of a button click or select menu pick.
pub const MESSAGE_COMPONENT: u8 = 3;

/// Interaction payload posted to the webhook endpoint.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct InteractionPayload {
    #[serde(default)]
    pub id: String,
    /// 1 = ping, 2 = application command, 3 = message component.
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub data: Option<InteractionData>,
    /// Present when invoked inside a guild.
    #[serde(default)]
    pub member: Option<MemberPayload>,
    /// Present when invoked in a direct message.
    #[serde(default)]
    pub user: Option<UserPayload>,
    /// Message the component is attached to.
    #[serde(default)]
    pub message: Option<MessageRef>,
    #[validate(length(min = 1))]
    pub token: String,
}

/// Command or component specific data.
#[serde_as]
#[derive(Debug, Deserialize, ToSchema)]
pub struct InteractionData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub options: Vec<CommandOptionPayload>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub custom_id: Option<ComponentAction>,
    #[serde(default)]
    pub values: Vec<String>,
}

/// A single named argument of a slash command.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CommandOptionPayload {
    pub name: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub value: Value,
}

impl CommandOptionPayload {
    /// Option value when it was sent as a string.
    fn value_str(&self) -> Option<&str> {
        match &self.value {
            Value::String(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MemberPayload {
    pub user: UserPayload,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UserPayload {
    pub id: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MessageRef {
    pub id: String,
}

/// Reasons a payload cannot be classified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("interaction type {0} is missing its data")]
    MissingData(u8),
    #[error("command interaction is missing its name")]
    MissingCommandName,
    #[error("component interaction is missing its custom id")]
    MissingCustomId,
    #[error("interaction has no invoking user")]
    MissingUser,
}

impl InteractionPayload {
    fn context(&self) -> Result<InteractionContext, PayloadError> {
        let user_id = self
            .member
            .as_ref()
            .map(|member| &member.user)
            .or(self.user.as_ref())
            .map(|user| user.id.clone())
            .ok_or(PayloadError::MissingUser)?;

        Ok(InteractionContext {
            interaction_id: self.id.clone(),
            user_id,
            token: self.token.clone(),
            message_id: self.message.as_ref().map(|message| message.id.clone()),
        })
    }
}

impl TryFrom<InteractionPayload> for Interaction {
    type Error = PayloadError;

    fn try_from(payload: InteractionPayload) -> Result<Self, Self::Error> {
        match payload.kind {
            PING => Ok(Interaction::Ping),
            APPLICATION_COMMAND => {
                let context = payload.context()?;
                let data = payload
                    .data
                    .ok_or(PayloadError::MissingData(APPLICATION_COMMAND))?;
                let name = data.name.as_deref().ok_or(PayloadError::MissingCommandName)?;
                let command = SlashCommand::from_parts(name, |key| {
                    data.options
                        .iter()
                        .find(|option| option.name == key)
                        .and_then(CommandOptionPayload::value_str)
                });
                Ok(Interaction::Command { context, command })
            }
            MESSAGE_COMPONENT => {
                let context = payload.context()?;
                let data = payload
                    .data
                    .ok_or(PayloadError::MissingData(MESSAGE_COMPONENT))?;
                let action = data.custom_id.ok_or(PayloadError::MissingCustomId)?;
                Ok(Interaction::Component {
                    context,
                    action,
                    values: data.values,
                })
            }
            other => Ok(Interaction::Unsupported(other)),
        }
    }
}
