use std::collections::HashSet;

use tracing::{info, warn};

use crate::{
    dao::{messaging::MessagingApi, upstream::UpstreamResult},
    dto::commands::CommandDefinition,
};

/// Create every command missing from the guild, matching on name.
///
/// Returns the names of the commands that were created. Existing commands are left untouched.
pub async fn install_guild_commands(
    messaging: &dyn MessagingApi,
    guild_id: &str,
    commands: Vec<CommandDefinition>,
) -> UpstreamResult<Vec<String>> {
    let installed: HashSet<String> = messaging
        .list_guild_commands(guild_id.to_string())
        .await?
        .into_iter()
        .map(|command| command.name)
        .collect();

    let mut created = Vec::new();
    for command in commands {
        if installed.contains(&command.name) {
            info!(command = %command.name, "command already installed");
            continue;
        }

        let name = command.name.clone();
        match messaging
            .create_guild_command(guild_id.to_string(), command)
            .await
        {
            Ok(()) => {
                info!(command = %name, "installed command");
                created.push(name);
            }
            Err(err) => warn!(command = %name, error = %err, "failed to install command"),
        }
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dto::commands::all_commands,
        test_support::{Call, FakeMessaging},
    };

    #[tokio::test]
    async fn installs_only_missing_commands() {
        let messaging = FakeMessaging::with_registered(vec!["test"]);

        let created = install_guild_commands(messaging.as_ref(), "G1", all_commands())
            .await
            .unwrap();

        assert_eq!(created, vec!["challenge".to_string(), "artist".to_string()]);
        assert_eq!(
            messaging.calls(),
            vec![
                Call::ListCommands {
                    guild_id: "G1".into()
                },
                Call::CreateCommand {
                    guild_id: "G1".into(),
                    name: "challenge".into()
                },
                Call::CreateCommand {
                    guild_id: "G1".into(),
                    name: "artist".into()
                },
            ]
        );
    }

    #[tokio::test]
    async fn nothing_to_do_when_all_present() {
        let messaging = FakeMessaging::with_registered(vec!["artist", "challenge", "test"]);
        let created = install_guild_commands(messaging.as_ref(), "G1", all_commands())
            .await
            .unwrap();
        assert!(created.is_empty());
        assert_eq!(messaging.calls().len(), 1);
    }

    #[tokio::test]
    async fn listing_failure_is_returned() {
        let messaging = FakeMessaging::failing();
        let result = install_guild_commands(messaging.as_ref(), "G1", all_commands()).await;
        assert!(result.is_err());
    }
}
