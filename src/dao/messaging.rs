use futures::future::BoxFuture;

use crate::{
    dao::upstream::UpstreamResult,
    dto::{
        commands::{CommandDefinition, RegisteredCommand},
        response::MessageEdit,
    },
};

/// Abstraction over the messaging platform's REST API.
///
/// Messages are addressed by the interaction token that produced them and their id.
pub trait MessagingApi: Send + Sync {
    fn delete_message(
        &self,
        token: String,
        message_id: String,
    ) -> BoxFuture<'static, UpstreamResult<()>>;
    fn edit_message(
        &self,
        token: String,
        message_id: String,
        edit: MessageEdit,
    ) -> BoxFuture<'static, UpstreamResult<()>>;
    fn list_guild_commands(
        &self,
        guild_id: String,
    ) -> BoxFuture<'static, UpstreamResult<Vec<RegisteredCommand>>>;
    fn create_guild_command(
        &self,
        guild_id: String,
        command: CommandDefinition,
    ) -> BoxFuture<'static, UpstreamResult<()>>;
}
