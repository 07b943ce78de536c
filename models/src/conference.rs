use crate::filter::{FieldKind, Filterable};
use crate::identity::{Identity, WebhookConvert, impl_resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConferenceType {
    #[default]
    Conference,
    Connect,
    Queue,
}

impl ConferenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConferenceType::Conference => "conference",
            ConferenceType::Connect => "connect",
            ConferenceType::Queue => "queue",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConferenceStatus {
    #[default]
    Starting,
    Progressing,
    Terminating,
    Terminated,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Conference {
    #[serde(flatten)]
    pub identity: Identity,

    #[serde(default)]
    pub confbridge_id: Uuid,

    #[serde(rename = "type", default)]
    pub kind: ConferenceType,
    #[serde(default)]
    pub status: ConferenceStatus,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub timeout: i32,

    #[serde(default)]
    pub pre_flow_id: Uuid,
    #[serde(default)]
    pub post_flow_id: Uuid,

    #[serde(default)]
    pub call_ids: Vec<Uuid>,
    #[serde(default)]
    pub recording_id: Uuid,
    #[serde(default)]
    pub recording_ids: Vec<Uuid>,
    #[serde(default)]
    pub transcribe_id: Uuid,
    #[serde(default)]
    pub transcribe_ids: Vec<Uuid>,

    #[serde(default)]
    pub tm_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Conference, "conference");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConferenceWebhookMessage {
    #[serde(flatten)]
    pub identity: Identity,
    #[serde(rename = "type")]
    pub kind: ConferenceType,
    pub status: ConferenceStatus,
    pub name: String,
    pub detail: String,
    pub data: serde_json::Map<String, serde_json::Value>,
    pub timeout: i32,
    pub pre_flow_id: Uuid,
    pub post_flow_id: Uuid,
    pub call_ids: Vec<Uuid>,
    pub recording_id: Uuid,
    pub recording_ids: Vec<Uuid>,
    pub transcribe_id: Uuid,
    pub transcribe_ids: Vec<Uuid>,
    pub tm_end: Option<DateTime<Utc>>,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl WebhookConvert for Conference {
    type Message = ConferenceWebhookMessage;

    fn convert_webhook_message(self) -> ConferenceWebhookMessage {
        ConferenceWebhookMessage {
            identity: self.identity,
            kind: self.kind,
            status: self.status,
            name: self.name,
            detail: self.detail,
            data: self.data,
            timeout: self.timeout,
            pre_flow_id: self.pre_flow_id,
            post_flow_id: self.post_flow_id,
            call_ids: self.call_ids,
            recording_id: self.recording_id,
            recording_ids: self.recording_ids,
            transcribe_id: self.transcribe_id,
            transcribe_ids: self.transcribe_ids,
            tm_end: self.tm_end,
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

impl Filterable for Conference {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("type", FieldKind::String),
        ("status", FieldKind::String),
        ("name", FieldKind::String),
        ("deleted", FieldKind::Bool),
    ];
}
