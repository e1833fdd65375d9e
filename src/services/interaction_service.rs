//! Routing of classified interactions to the game and the catalog search.

use tracing::{debug, info, warn};

use crate::{
    dto::response::{
        ActionRow, Button, Component, InteractionResponse, MessageData, MessageEdit, SelectOption,
        StringSelect,
    },
    error::ServiceError,
    services::side_effects::SideEffect,
    state::{
        GameId, GameSession, SharedState,
        choice::{Choice, shuffled_options},
        duel::{Player, compute_result},
        interaction::{ComponentAction, Interaction, InteractionContext, SlashCommand},
    },
};

/// What the webhook should answer, plus calls to make once the answer is out.
#[derive(Debug, Default, PartialEq)]
pub struct Dispatch {
    /// Immediate reply; `None` when the event is ignored.
    pub reply: Option<InteractionResponse>,
    pub side_effects: Vec<SideEffect>,
}

impl Dispatch {
    fn ignore() -> Self {
        Self::default()
    }

    fn reply(response: InteractionResponse) -> Self {
        Self {
            reply: Some(response),
            side_effects: Vec::new(),
        }
    }

    fn then(mut self, effect: Option<SideEffect>) -> Self {
        self.side_effects.extend(effect);
        self
    }
}

/// Handle one inbound interaction.
pub async fn handle(state: &SharedState, interaction: Interaction) -> Result<Dispatch, ServiceError> {
    match interaction {
        Interaction::Ping => Ok(Dispatch::reply(InteractionResponse::pong())),
        Interaction::Command { context, command } => handle_command(state, context, command).await,
        Interaction::Component {
            context,
            action,
            values,
        } => handle_component(state, context, action, values),
        Interaction::Unsupported(kind) => {
            warn!(kind, "ignoring unsupported interaction type");
            Ok(Dispatch::ignore())
        }
    }
}

async fn handle_command(
    state: &SharedState,
    context: InteractionContext,
    command: SlashCommand,
) -> Result<Dispatch, ServiceError> {
    match command {
        SlashCommand::Test => {
            let content = format!("hello world {}", state.config().random_emoji());
            Ok(Dispatch::reply(InteractionResponse::message(
                MessageData::text(content),
            )))
        }
        SlashCommand::Challenge { object } => start_challenge(state, context, object),
        SlashCommand::Artist { name } => lookup_artist(state, name).await,
        SlashCommand::Unknown(name) => {
            warn!(command = %name, "ignoring unknown command");
            Ok(Dispatch::ignore())
        }
    }
}

/// Open a game for the invoking user and post the public challenge.
fn start_challenge(
    state: &SharedState,
    context: InteractionContext,
    object: Option<String>,
) -> Result<Dispatch, ServiceError> {
    let object = object.ok_or_else(|| ServiceError::InvalidInput("object is required".into()))?;
    let choice = object
        .parse::<Choice>()
        .map_err(|err| ServiceError::InvalidInput(err.to_string()))?;

    let game_id = GameId::new(context.interaction_id);
    state.sessions().create(GameSession {
        id: game_id.clone(),
        challenger: Player::new(context.user_id.clone(), choice),
    })?;
    info!(game_id = %game_id, challenger = %context.user_id, "challenge opened");

    let accept = Button::primary(ComponentAction::AcceptChallenge(game_id).to_string(), "Accept");
    let data = MessageData::text(format!(
        "Rock papers scissors challenge from <@{}>",
        context.user_id
    ))
    .with_row(ActionRow::single(Component::Button(accept)));

    Ok(Dispatch::reply(InteractionResponse::message(data)))
}

/// Reply with the catalog link of the best matching artist, or nothing.
async fn lookup_artist(state: &SharedState, name: Option<String>) -> Result<Dispatch, ServiceError> {
    let name = name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| ServiceError::InvalidInput("artist name is required".into()))?;

    let items = state.catalog().search_artists(name.clone()).await?;
    let content = items
        .into_iter()
        .next()
        .map(|item| item.external_url)
        .unwrap_or_default();
    debug!(query = %name, found = !content.is_empty(), "artist lookup finished");

    Ok(Dispatch::reply(InteractionResponse::message(
        MessageData::text(content),
    )))
}

fn handle_component(
    state: &SharedState,
    context: InteractionContext,
    action: ComponentAction,
    values: Vec<String>,
) -> Result<Dispatch, ServiceError> {
    match action {
        ComponentAction::AcceptChallenge(game_id) => Ok(accept_challenge(context, game_id)),
        ComponentAction::SelectChoice(game_id) => select_choice(state, context, game_id, values),
        ComponentAction::Unrecognized(custom_id) => {
            debug!(%custom_id, "ignoring unrecognized component");
            Ok(Dispatch::ignore())
        }
    }
}

/// Show the acceptor a private menu of objects and drop the prompt they clicked.
fn accept_challenge(context: InteractionContext, game_id: GameId) -> Dispatch {
    let options = shuffled_options()
        .into_iter()
        .map(SelectOption::from)
        .collect();
    let select = StringSelect::new(ComponentAction::SelectChoice(game_id).to_string(), options);
    let data = MessageData::text("What is your object of choice?")
        .ephemeral()
        .with_row(ActionRow::single(Component::StringSelect(select)));

    let cleanup = context
        .message_id
        .map(|message_id| SideEffect::DeleteMessage {
            token: context.token,
            message_id,
        });

    Dispatch::reply(InteractionResponse::message(data)).then(cleanup)
}

/// Resolve the game with the responder's pick, exactly once.
fn select_choice(
    state: &SharedState,
    context: InteractionContext,
    game_id: GameId,
    values: Vec<String>,
) -> Result<Dispatch, ServiceError> {
    let choice = match parse_selection(values) {
        Ok(choice) => choice,
        // a stale game is ignored whatever was picked
        Err(_) if state.sessions().get(&game_id).is_none() => {
            debug!(game_id = %game_id, "ignoring selection for unknown or finished game");
            return Ok(Dispatch::ignore());
        }
        Err(err) => return Err(err),
    };

    let Some(session) = state.sessions().consume(&game_id) else {
        debug!(game_id = %game_id, "ignoring selection for unknown or finished game");
        return Ok(Dispatch::ignore());
    };

    let responder = Player::new(context.user_id, choice);
    let result = compute_result(&session.challenger, &responder);
    info!(
        game_id = %game_id,
        winner = result.winner_id.as_deref().unwrap_or("none"),
        "game resolved"
    );

    let patch = context.message_id.map(|message_id| SideEffect::EditMessage {
        token: context.token,
        message_id,
        edit: MessageEdit::text_only(format!(
            "Nice choice {}",
            state.config().random_emoji()
        )),
    });

    Ok(Dispatch::reply(InteractionResponse::message(MessageData::text(result.text))).then(patch))
}

fn parse_selection(values: Vec<String>) -> Result<Choice, ServiceError> {
    let value = values
        .into_iter()
        .next()
        .ok_or_else(|| ServiceError::InvalidInput("no object selected".into()))?;
    value
        .parse::<Choice>()
        .map_err(|err| ServiceError::InvalidInput(err.to_string()))
}
