use crate::filter::{FieldKind, Filterable};
use crate::identity::{Identity, WebhookConvert, impl_resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One step of a flow. The option payload is interpreted by the flow manager only.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(default)]
    pub id: Uuid,
    #[serde(default)]
    pub next_id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub option: serde_json::Value,
}

impl Action {
    pub fn new(kind: impl Into<String>) -> Self {
        Action {
            kind: kind.into(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowType {
    #[default]
    Flow,
    Conference,
    Queue,
    Campaign,
    Transfer,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    #[serde(flatten)]
    pub identity: Identity,

    #[serde(rename = "type", default)]
    pub kind: FlowType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,

    #[serde(default)]
    pub persist: bool,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default)]
    pub on_complete_flow_id: Uuid,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Flow, "flow");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowWebhookMessage {
    #[serde(flatten)]
    pub identity: Identity,
    #[serde(rename = "type")]
    pub kind: FlowType,
    pub name: String,
    pub detail: String,
    pub actions: Vec<Action>,
    pub on_complete_flow_id: Uuid,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl WebhookConvert for Flow {
    type Message = FlowWebhookMessage;

    fn convert_webhook_message(self) -> FlowWebhookMessage {
        FlowWebhookMessage {
            identity: self.identity,
            kind: self.kind,
            name: self.name,
            detail: self.detail,
            actions: self.actions,
            on_complete_flow_id: self.on_complete_flow_id,
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

impl Filterable for Flow {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("type", FieldKind::String),
        ("name", FieldKind::String),
        ("persist", FieldKind::Bool),
        ("deleted", FieldKind::Bool),
    ];
}
