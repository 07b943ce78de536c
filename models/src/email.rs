use crate::address::Address;
use crate::filter::{FieldKind, Filterable};
use crate::identity::{Identity, WebhookConvert, impl_resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailStatus {
    #[default]
    #[serde(rename = "")]
    None,
    Initiated,
    Processed,
    Delivered,
    Open,
    Bounce,
    Dropped,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub reference_type: String,
    pub reference_id: Uuid,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Email {
    #[serde(flatten)]
    pub identity: Identity,

    #[serde(default)]
    pub activeflow_id: Uuid,
    #[serde(default)]
    pub provider_type: String,
    #[serde(default)]
    pub provider_reference_id: String,

    #[serde(default)]
    pub source: Address,
    #[serde(default)]
    pub destinations: Vec<Address>,

    #[serde(default)]
    pub status: EmailStatus,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub attachments: Vec<Attachment>,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Email, "email");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmailWebhookMessage {
    #[serde(flatten)]
    pub identity: Identity,
    pub activeflow_id: Uuid,
    pub source: Address,
    pub destinations: Vec<Address>,
    pub status: EmailStatus,
    pub subject: String,
    pub content: String,
    pub attachments: Vec<Attachment>,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl WebhookConvert for Email {
    type Message = EmailWebhookMessage;

    fn convert_webhook_message(self) -> EmailWebhookMessage {
        EmailWebhookMessage {
            identity: self.identity,
            activeflow_id: self.activeflow_id,
            source: self.source,
            destinations: self.destinations,
            status: self.status,
            subject: self.subject,
            content: self.content,
            attachments: self.attachments,
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

impl Filterable for Email {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("activeflow_id", FieldKind::Uuid),
        ("status", FieldKind::String),
        ("deleted", FieldKind::Bool),
    ];
}
