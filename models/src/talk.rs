//! Agent-to-agent chat: chats ("talks"), their participants and messages.

use crate::filter::{FieldKind, Filterable};
use crate::identity::{Identity, Owner, WebhookConvert, impl_resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatType {
    /// Open channel every agent of the customer may read.
    #[default]
    Talk,
    Direct,
    Group,
}

impl ChatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatType::Talk => "talk",
            ChatType::Direct => "direct",
            ChatType::Group => "group",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(flatten)]
    pub identity: Identity,
    #[serde(flatten)]
    pub owner: Owner,

    pub chat_id: Uuid,

    #[serde(default)]
    pub tm_joined: Option<DateTime<Utc>>,
}

/// Participant rows carry no internal fields, the public view is the row itself.
impl WebhookConvert for Participant {
    type Message = Participant;

    fn convert_webhook_message(self) -> Participant {
        self
    }
}

/// Participant requested when creating a chat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantInput {
    pub owner_type: String,
    pub owner_id: Uuid,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    #[serde(flatten)]
    pub identity: Identity,

    #[serde(rename = "type", default)]
    pub kind: ChatType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,

    #[serde(default)]
    pub member_count: i32,
    #[serde(default)]
    pub participants: Vec<Participant>,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl Chat {
    pub fn has_agent(&self, agent_id: Uuid) -> bool {
        self.participants.iter().any(|p| p.owner.is_agent(agent_id))
    }
}

impl_resource!(Chat, "chat");

/// Chat rows carry no internal fields, the public view is the row itself.
impl WebhookConvert for Chat {
    type Message = Chat;

    fn convert_webhook_message(self) -> Chat {
        self
    }
}

impl Filterable for Chat {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("type", FieldKind::String),
        ("owner_type", FieldKind::String),
        ("owner_id", FieldKind::Uuid),
        ("deleted", FieldKind::Bool),
    ];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    Normal,
    System,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub file_id: Uuid,
    #[serde(default)]
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub emoji: String,
    #[serde(flatten)]
    pub owner: Owner,
    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub reactions: Vec<Reaction>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(flatten)]
    pub identity: Identity,
    #[serde(flatten)]
    pub owner: Owner,

    pub chat_id: Uuid,
    #[serde(default)]
    pub parent_id: Option<Uuid>,

    #[serde(rename = "type", default)]
    pub kind: MessageType,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub medias: Vec<Media>,
    #[serde(default)]
    pub metadata: Metadata,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Message, "chat message");

/// Message rows carry no internal fields, the public view is the row itself.
impl WebhookConvert for Message {
    type Message = Message;

    fn convert_webhook_message(self) -> Message {
        self
    }
}

impl Filterable for Message {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("chat_id", FieldKind::Uuid),
        ("owner_type", FieldKind::String),
        ("owner_id", FieldKind::Uuid),
        ("parent_id", FieldKind::Uuid),
        ("deleted", FieldKind::Bool),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_has_agent() {
        let agent_id = Uuid::new_v4();
        let chat = Chat {
            identity: Identity::new(Uuid::new_v4(), Uuid::new_v4()),
            kind: ChatType::Group,
            participants: vec![Participant {
                owner: Owner::agent(agent_id),
                ..Default::default()
            }],
            ..Default::default()
        };

        assert!(chat.has_agent(agent_id));
        assert!(!chat.has_agent(Uuid::new_v4()));
    }

    #[test]
    fn test_message_wire_format() {
        let json = serde_json::json!({
            "id": "0f5fd2d6-f0a6-11ef-8a4e-d7a7f1b5a5d6",
            "customer_id": "5f621078-8e5f-11ee-97b2-cfe7337b701c",
            "owner_type": "agent",
            "owner_id": "d152e69e-105b-11ee-b395-eb18426de979",
            "chat_id": "1a7f4c9e-f0a6-11ef-9c3b-2f6b0c9d7e11",
            "type": "normal",
            "text": "hello",
            "metadata": {"reactions": [{"emoji": "👍", "owner_type": "agent", "owner_id": "d152e69e-105b-11ee-b395-eb18426de979"}]},
        });

        let msg: Message = serde_json::from_value(json).unwrap();
        assert_eq!(msg.parent_id, None);
        assert_eq!(msg.metadata.reactions.len(), 1);
        assert_eq!(msg.metadata.reactions[0].emoji, "👍");
        assert!(msg.owner.is_agent(msg.metadata.reactions[0].owner.owner_id));
    }
}
