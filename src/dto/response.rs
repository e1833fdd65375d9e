//! Outbound interaction responses, message components and message edits.

use serde::{Serialize, Serializer};
use utoipa::ToSchema;

use crate::state::choice::Choice;

/// Message flag hiding a reply from everyone but the invoking user.
pub const EPHEMERAL: u64 = 1 << 6;

/// Interaction callback kinds the bot sends back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Pong = 1,
    ChannelMessageWithSource = 4,
}

impl Serialize for ResponseKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// Message component kinds used by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    ActionRow = 1,
    Button = 2,
    StringSelect = 3,
}

impl Serialize for ComponentKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// Immediate reply to an interaction.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    #[schema(value_type = u8)]
    pub kind: ResponseKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MessageData>,
}

impl InteractionResponse {
    pub fn pong() -> Self {
        Self {
            kind: ResponseKind::Pong,
            data: None,
        }
    }

    /// Reply with a new message in the channel the interaction came from.
    pub fn message(data: MessageData) -> Self {
        Self {
            kind: ResponseKind::ChannelMessageWithSource,
            data: Some(data),
        }
    }
}

/// Content of a reply message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct MessageData {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<ActionRow>,
}

impl MessageData {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn ephemeral(mut self) -> Self {
        self.flags = Some(self.flags.unwrap_or_default() | EPHEMERAL);
        self
    }

    pub fn with_row(mut self, row: ActionRow) -> Self {
        self.components.push(row);
        self
    }

    pub fn is_ephemeral(&self) -> bool {
        self.flags.is_some_and(|flags| flags & EPHEMERAL != 0)
    }
}

/// Horizontal container holding interactive components.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ActionRow {
    #[serde(rename = "type")]
    #[schema(value_type = u8)]
    pub kind: ComponentKind,
    pub components: Vec<Component>,
}

impl ActionRow {
    /// Row holding a single component.
    pub fn single(component: Component) -> Self {
        Self {
            kind: ComponentKind::ActionRow,
            components: vec![component],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum Component {
    Button(Button),
    StringSelect(StringSelect),
}

/// Primary button style.
pub const BUTTON_PRIMARY: u8 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Button {
    #[serde(rename = "type")]
    #[schema(value_type = u8)]
    pub kind: ComponentKind,
    pub custom_id: String,
    pub label: String,
    pub style: u8,
}

impl Button {
    pub fn primary(custom_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: ComponentKind::Button,
            custom_id: custom_id.into(),
            label: label.into(),
            style: BUTTON_PRIMARY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StringSelect {
    #[serde(rename = "type")]
    #[schema(value_type = u8)]
    pub kind: ComponentKind,
    pub custom_id: String,
    pub options: Vec<SelectOption>,
}

impl StringSelect {
    pub fn new(custom_id: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            kind: ComponentKind::StringSelect,
            custom_id: custom_id.into(),
            options,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    pub description: String,
}

impl From<Choice> for SelectOption {
    fn from(choice: Choice) -> Self {
        Self {
            label: choice.label().to_string(),
            value: choice.name().to_string(),
            description: choice.description().to_string(),
        }
    }
}

/// Body of a PATCH against a previously sent message.
///
/// `components` is always serialized so an empty list strips the message's controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageEdit {
    pub content: String,
    pub components: Vec<ActionRow>,
}

impl MessageEdit {
    /// Replace the content and drop every interactive component.
    pub fn text_only(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            components: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn pong_has_no_data() {
        let value = serde_json::to_value(InteractionResponse::pong()).unwrap();
        assert_eq!(value, json!({ "type": 1 }));
    }

    #[test]
    fn plain_message_omits_flags_and_components() {
        let value =
            serde_json::to_value(InteractionResponse::message(MessageData::text(""))).unwrap();
        assert_eq!(value, json!({ "type": 4, "data": { "content": "" } }));
    }

    #[test]
    fn select_menu_wire_shape() {
        let data = MessageData::text("pick")
            .ephemeral()
            .with_row(ActionRow::single(Component::StringSelect(
                StringSelect::new("select-choice_g1", vec![Choice::Rock.into()]),
            )));
        let value = serde_json::to_value(InteractionResponse::message(data)).unwrap();

        assert_eq!(
            value,
            json!({
                "type": 4,
                "data": {
                    "content": "pick",
                    "flags": 64,
                    "components": [{
                        "type": 1,
                        "components": [{
                            "type": 3,
                            "custom_id": "select-choice_g1",
                            "options": [{
                                "label": "Rock",
                                "value": "rock",
                                "description": "sedimentary, igneous, or perhaps even metamorphic"
                            }]
                        }]
                    }]
                }
            })
        );
    }

    #[test]
    fn button_wire_shape() {
        let value = serde_json::to_value(Component::Button(Button::primary(
            "challenge-accept_g1",
            "Accept",
        )))
        .unwrap();
        assert_eq!(
            value,
            json!({ "type": 2, "custom_id": "challenge-accept_g1", "label": "Accept", "style": 1 })
        );
    }

    #[test]
    fn edit_always_sends_components() {
        let value = serde_json::to_value(MessageEdit::text_only("done")).unwrap();
        assert_eq!(value, json!({ "content": "done", "components": [] }));
    }
}
