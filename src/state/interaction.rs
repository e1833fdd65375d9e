//! Closed set of inbound interaction events after they have been classified.

use std::{convert::Infallible, fmt, str::FromStr};

use crate::state::sessions::GameId;

const ACCEPT_PREFIX: &str = "challenge-accept_";
const SELECT_PREFIX: &str = "select-choice_";

/// One classified inbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// Liveness probe sent by the platform when the endpoint is configured.
    Ping,
    /// Slash command invocation.
    Command {
        context: InteractionContext,
        command: SlashCommand,
    },
    /// Activation of a button or select menu attached to an earlier message.
    Component {
        context: InteractionContext,
        action: ComponentAction,
        /// Values picked in a select menu, empty for buttons.
        values: Vec<String>,
    },
    /// Interaction type the bot does not handle (autocomplete, modal submit, ...).
    Unsupported(u8),
}

/// Addressing details shared by command and component events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionContext {
    /// Identifier of this interaction, unique per event.
    pub interaction_id: String,
    /// User who triggered the event.
    pub user_id: String,
    /// Token used to follow up on or edit the interaction's messages.
    pub token: String,
    /// Message the component was attached to, when there is one.
    pub message_id: Option<String>,
}

/// Slash commands the bot knows, with their raw arguments.
///
/// Arguments stay optional here; the dispatcher decides which are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Test,
    Challenge { object: Option<String> },
    Artist { name: Option<String> },
    Unknown(String),
}

impl SlashCommand {
    pub const TEST: &'static str = "test";
    pub const CHALLENGE: &'static str = "challenge";
    pub const ARTIST: &'static str = "artist";

    /// Build a command from its name and a lookup over its string options.
    pub fn from_parts<'a>(name: &str, option: impl Fn(&str) -> Option<&'a str>) -> Self {
        match name {
            Self::TEST => SlashCommand::Test,
            Self::CHALLENGE => SlashCommand::Challenge {
                object: option("object").map(str::to_owned),
            },
            Self::ARTIST => SlashCommand::Artist {
                name: option("name").map(str::to_owned),
            },
            other => SlashCommand::Unknown(other.to_string()),
        }
    }
}

/// Action encoded in a component's custom id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentAction {
    /// Second player accepts the challenge identified by the game id.
    AcceptChallenge(GameId),
    /// Second player picked an object for the given game.
    SelectChoice(GameId),
    /// Custom id this bot never issued.
    Unrecognized(String),
}

impl FromStr for ComponentAction {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let action = if let Some(id) = s.strip_prefix(ACCEPT_PREFIX) {
            ComponentAction::AcceptChallenge(GameId::new(id))
        } else if let Some(id) = s.strip_prefix(SELECT_PREFIX) {
            ComponentAction::SelectChoice(GameId::new(id))
        } else {
            ComponentAction::Unrecognized(s.to_string())
        };
        Ok(action)
    }
}

impl fmt::Display for ComponentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentAction::AcceptChallenge(id) => write!(f, "{ACCEPT_PREFIX}{id}"),
            ComponentAction::SelectChoice(id) => write!(f, "{SELECT_PREFIX}{id}"),
            ComponentAction::Unrecognized(raw) => f.write_str(raw),
        }
    }
}
