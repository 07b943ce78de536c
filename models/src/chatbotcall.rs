use crate::filter::{FieldKind, Filterable};
use crate::identity::{Identity, WebhookConvert, impl_resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatbotcallStatus {
    #[default]
    #[serde(rename = "")]
    None,
    Initiating,
    Progressing,
    End,
}

/// A chatbot attached to a call or conversation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Chatbotcall {
    #[serde(flatten)]
    pub identity: Identity,

    pub chatbot_id: Uuid,

    #[serde(default)]
    pub activeflow_id: Uuid,
    #[serde(default)]
    pub reference_type: String,
    #[serde(default)]
    pub reference_id: Uuid,

    /// Conference the chatbot and the peer are bridged in.
    #[serde(default)]
    pub confbridge_id: Uuid,
    #[serde(default)]
    pub transcribe_id: Uuid,

    #[serde(default)]
    pub status: ChatbotcallStatus,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub language: String,

    #[serde(default)]
    pub tm_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Chatbotcall, "chatbotcall");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatbotcallWebhookMessage {
    #[serde(flatten)]
    pub identity: Identity,
    pub chatbot_id: Uuid,
    pub activeflow_id: Uuid,
    pub reference_type: String,
    pub reference_id: Uuid,
    pub status: ChatbotcallStatus,
    pub gender: String,
    pub language: String,
    pub tm_end: Option<DateTime<Utc>>,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl WebhookConvert for Chatbotcall {
    type Message = ChatbotcallWebhookMessage;

    fn convert_webhook_message(self) -> ChatbotcallWebhookMessage {
        ChatbotcallWebhookMessage {
            identity: self.identity,
            chatbot_id: self.chatbot_id,
            activeflow_id: self.activeflow_id,
            reference_type: self.reference_type,
            reference_id: self.reference_id,
            status: self.status,
            gender: self.gender,
            language: self.language,
            tm_end: self.tm_end,
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

impl Filterable for Chatbotcall {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("chatbot_id", FieldKind::Uuid),
        ("reference_id", FieldKind::Uuid),
        ("status", FieldKind::String),
        ("deleted", FieldKind::Bool),
    ];
}
