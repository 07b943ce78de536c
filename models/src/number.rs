use crate::filter::{FieldKind, Filterable};
use crate::identity::{Identity, WebhookConvert, impl_resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberStatus {
    #[default]
    Active,
    Deleted,
}

/// A purchased phone number and the flows it triggers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Number {
    #[serde(flatten)]
    pub identity: Identity,

    pub number: String,
    #[serde(default)]
    pub call_flow_id: Uuid,
    #[serde(default)]
    pub message_flow_id: Uuid,

    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,

    #[serde(default)]
    pub provider_name: String,
    #[serde(default)]
    pub provider_reference_id: String,

    #[serde(default)]
    pub status: NumberStatus,
    #[serde(default)]
    pub t38_enabled: bool,
    #[serde(default)]
    pub emergency_enabled: bool,

    #[serde(default)]
    pub tm_purchase: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_renew: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Number, "number");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumberWebhookMessage {
    #[serde(flatten)]
    pub identity: Identity,
    pub number: String,
    pub call_flow_id: Uuid,
    pub message_flow_id: Uuid,
    pub name: String,
    pub detail: String,
    pub status: NumberStatus,
    pub t38_enabled: bool,
    pub emergency_enabled: bool,
    pub tm_purchase: Option<DateTime<Utc>>,
    pub tm_renew: Option<DateTime<Utc>>,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl WebhookConvert for Number {
    type Message = NumberWebhookMessage;

    fn convert_webhook_message(self) -> NumberWebhookMessage {
        NumberWebhookMessage {
            identity: self.identity,
            number: self.number,
            call_flow_id: self.call_flow_id,
            message_flow_id: self.message_flow_id,
            name: self.name,
            detail: self.detail,
            status: self.status,
            t38_enabled: self.t38_enabled,
            emergency_enabled: self.emergency_enabled,
            tm_purchase: self.tm_purchase,
            tm_renew: self.tm_renew,
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

impl Filterable for Number {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("number", FieldKind::String),
        ("call_flow_id", FieldKind::Uuid),
        ("message_flow_id", FieldKind::Uuid),
        ("status", FieldKind::String),
        ("deleted", FieldKind::Bool),
    ];
}
