use crate::filter::{FieldKind, Filterable};
use crate::identity::{Identity, WebhookConvert, impl_resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineType {
    #[default]
    #[serde(rename = "")]
    None,
    Openai,
    Dialogflow,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Chatbot {
    #[serde(flatten)]
    pub identity: Identity,

    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,

    #[serde(default)]
    pub engine_type: EngineType,
    #[serde(default)]
    pub engine_model: String,
    #[serde(default)]
    pub init_prompt: String,
    /// Provider credential, never leaves the backend boundary.
    #[serde(default)]
    pub credential_base64: String,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Chatbot, "chatbot");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatbotWebhookMessage {
    #[serde(flatten)]
    pub identity: Identity,
    pub name: String,
    pub detail: String,
    pub engine_type: EngineType,
    pub engine_model: String,
    pub init_prompt: String,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl WebhookConvert for Chatbot {
    type Message = ChatbotWebhookMessage;

    fn convert_webhook_message(self) -> ChatbotWebhookMessage {
        ChatbotWebhookMessage {
            identity: self.identity,
            name: self.name,
            detail: self.detail,
            engine_type: self.engine_type,
            engine_model: self.engine_model,
            init_prompt: self.init_prompt,
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

impl Filterable for Chatbot {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("name", FieldKind::String),
        ("engine_type", FieldKind::String),
        ("deleted", FieldKind::Bool),
    ];
}
