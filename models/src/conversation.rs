use crate::address::Address;
use crate::filter::{FieldKind, Filterable};
use crate::identity::{Identity, Owner, WebhookConvert, impl_resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationType {
    #[default]
    Message,
    Line,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(flatten)]
    pub identity: Identity,
    #[serde(flatten)]
    pub owner: Owner,

    #[serde(default)]
    pub account_id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,

    #[serde(rename = "type", default)]
    pub kind: ConversationType,
    #[serde(default)]
    pub dialog_id: String,

    #[serde(rename = "self", default)]
    pub self_address: Address,
    #[serde(default)]
    pub peer: Address,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Conversation, "conversation");

/// Conversation rows carry no internal fields, the public view is the row itself.
impl WebhookConvert for Conversation {
    type Message = Conversation;

    fn convert_webhook_message(self) -> Conversation {
        self
    }
}

impl Filterable for Conversation {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("owner_type", FieldKind::String),
        ("owner_id", FieldKind::Uuid),
        ("account_id", FieldKind::Uuid),
        ("type", FieldKind::String),
        ("dialog_id", FieldKind::String),
        ("deleted", FieldKind::Bool),
    ];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageDirection {
    #[default]
    Outgoing,
    Incoming,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    #[default]
    Progressing,
    Done,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(flatten)]
    pub identity: Identity,

    pub conversation_id: Uuid,
    #[serde(default)]
    pub direction: MessageDirection,
    #[serde(default)]
    pub status: MessageStatus,

    #[serde(default)]
    pub reference_type: String,
    #[serde(default)]
    pub reference_id: Uuid,
    #[serde(default)]
    pub transaction_id: String,

    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub medias: Vec<Media>,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Message, "conversation message");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageWebhookMessage {
    #[serde(flatten)]
    pub identity: Identity,
    pub conversation_id: Uuid,
    pub direction: MessageDirection,
    pub status: MessageStatus,
    pub reference_type: String,
    pub reference_id: Uuid,
    pub text: String,
    pub medias: Vec<Media>,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl WebhookConvert for Message {
    type Message = MessageWebhookMessage;

    fn convert_webhook_message(self) -> MessageWebhookMessage {
        MessageWebhookMessage {
            identity: self.identity,
            conversation_id: self.conversation_id,
            direction: self.direction,
            status: self.status,
            reference_type: self.reference_type,
            reference_id: self.reference_id,
            text: self.text,
            medias: self.medias,
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

impl Filterable for Message {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("conversation_id", FieldKind::Uuid),
        ("direction", FieldKind::String),
        ("status", FieldKind::String),
        ("deleted", FieldKind::Bool),
    ];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Line,
    Sms,
}

/// Messaging channel credentials (e.g. a LINE bot) a customer receives conversations on.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(flatten)]
    pub identity: Identity,

    #[serde(rename = "type", default)]
    pub kind: AccountType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,

    #[serde(default)]
    pub secret: String,
    #[serde(default)]
    pub token: String,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Account, "conversation account");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountWebhookMessage {
    #[serde(flatten)]
    pub identity: Identity,
    #[serde(rename = "type")]
    pub kind: AccountType,
    pub name: String,
    pub detail: String,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl WebhookConvert for Account {
    type Message = AccountWebhookMessage;

    fn convert_webhook_message(self) -> AccountWebhookMessage {
        AccountWebhookMessage {
            identity: self.identity,
            kind: self.kind,
            name: self.name,
            detail: self.detail,
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

impl Filterable for Account {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("type", FieldKind::String),
        ("name", FieldKind::String),
        ("deleted", FieldKind::Bool),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_secrets_are_dropped() {
        let account = Account {
            identity: Identity::new(Uuid::new_v4(), Uuid::new_v4()),
            kind: AccountType::Line,
            name: "line bot".into(),
            secret: "0d3f6e3c0a".into(),
            token: "Bearer abc".into(),
            ..Default::default()
        };

        let json = serde_json::to_value(account.convert_webhook_message()).unwrap();
        assert!(json.get("secret").is_none());
        assert!(json.get("token").is_none());
        assert_eq!(json["name"], "line bot");
        assert_eq!(json["type"], "line");
    }

    #[test]
    fn test_conversation_self_address() {
        let json = serde_json::json!({
            "id": "e1a4bcea-0a07-11f0-97c0-d3a2e0e0d1a4",
            "customer_id": "5f621078-8e5f-11ee-97b2-cfe7337b701c",
            "self": {"type": "line", "target": "U1234"},
            "peer": {"type": "line", "target": "U5678"},
        });
        let conversation: Conversation = serde_json::from_value(json).unwrap();
        assert_eq!(conversation.self_address.target, "U1234");
        assert_eq!(conversation.peer.target, "U5678");
    }
}
