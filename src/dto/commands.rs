//! Slash command definitions installed on the platform at startup.

use serde::{Deserialize, Serialize};

use crate::state::{choice::Choice, interaction::SlashCommand};

/// Chat input (slash) command type.
const CHAT_INPUT: u8 = 1;
/// String option type.
const STRING_OPTION: u8 = 3;

/// Command definition as sent to the command creation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOptionDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandOptionDefinition {
    #[serde(rename = "type")]
    pub kind: u8,
    pub name: String,
    pub description: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<OptionChoice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionChoice {
    pub name: String,
    pub value: String,
}

/// Command already known to the platform, as listed by the commands endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisteredCommand {
    pub id: String,
    pub name: String,
}

impl CommandDefinition {
    fn chat_input(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            kind: CHAT_INPUT,
            options: Vec::new(),
        }
    }

    fn with_option(mut self, option: CommandOptionDefinition) -> Self {
        self.options.push(option);
        self
    }
}

impl CommandOptionDefinition {
    fn required_string(name: &str, description: &str) -> Self {
        Self {
            kind: STRING_OPTION,
            name: name.to_string(),
            description: description.to_string(),
            required: true,
            choices: Vec::new(),
        }
    }
}

/// Every command the bot answers to.
pub fn all_commands() -> Vec<CommandDefinition> {
    vec![test_command(), challenge_command(), artist_command()]
}

pub fn test_command() -> CommandDefinition {
    CommandDefinition::chat_input(SlashCommand::TEST, "Basic guild command")
}

/// Challenge command whose `object` option lists the whole catalog.
pub fn challenge_command() -> CommandDefinition {
    let mut object = CommandOptionDefinition::required_string("object", "Pick your object");
    object.choices = Choice::ALL
        .into_iter()
        .map(|choice| OptionChoice {
            name: choice.label().to_string(),
            value: choice.name().to_string(),
        })
        .collect();

    CommandDefinition::chat_input(
        SlashCommand::CHALLENGE,
        "Challenge to a match of rock paper scissors",
    )
    .with_option(object)
}

pub fn artist_command() -> CommandDefinition {
    CommandDefinition::chat_input(SlashCommand::ARTIST, "Look up an artist on Spotify")
        .with_option(CommandOptionDefinition::required_string(
            "name",
            "Name of the artist",
        ))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn command_names_are_unique() {
        let commands = all_commands();
        let mut names: Vec<_> = commands.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), commands.len());
    }

    #[test]
    fn challenge_offers_every_object() {
        let command = challenge_command();
        let values: Vec<_> = command.options[0]
            .choices
            .iter()
            .map(|choice| choice.value.clone())
            .collect();
        assert_eq!(values.len(), Choice::ALL.len());
        for choice in Choice::ALL {
            assert!(values.contains(&choice.name().to_string()));
        }
    }

    #[test]
    fn artist_wire_shape() {
        assert_eq!(
            serde_json::to_value(artist_command()).unwrap(),
            json!({
                "name": "artist",
                "description": "Look up an artist on Spotify",
                "type": 1,
                "options": [{
                    "type": 3,
                    "name": "name",
                    "description": "Name of the artist",
                    "required": true
                }]
            })
        );
    }

    #[test]
    fn test_command_has_no_options_field() {
        let value = serde_json::to_value(test_command()).unwrap();
        assert!(value.get("options").is_none());
    }
}
