use crate::address::Address;
use crate::filter::{FieldKind, Filterable};
use crate::identity::{Identity, WebhookConvert, impl_resource};
use crate::queue::RoutingMethod;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueuecallStatus {
    #[default]
    #[serde(rename = "")]
    None,
    Initiating,
    Waiting,
    Connecting,
    Kicking,
    Service,
    Done,
    Abandoned,
}

/// A call waiting in, or served from, a queue.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Queuecall {
    #[serde(flatten)]
    pub identity: Identity,

    pub queue_id: Uuid,

    #[serde(default)]
    pub reference_type: String,
    #[serde(default)]
    pub reference_id: Uuid,
    #[serde(default)]
    pub reference_activeflow_id: Uuid,

    #[serde(default)]
    pub forward_action_id: Uuid,
    #[serde(default)]
    pub confbridge_id: Uuid,

    #[serde(default)]
    pub source: Address,
    #[serde(default)]
    pub routing_method: RoutingMethod,
    #[serde(default)]
    pub tag_ids: Vec<Uuid>,

    #[serde(default)]
    pub status: QueuecallStatus,
    #[serde(default)]
    pub service_agent_id: Uuid,

    #[serde(default)]
    pub timeout_wait: i32,
    #[serde(default)]
    pub timeout_service: i32,
    #[serde(default)]
    pub duration_waiting: i32,
    #[serde(default)]
    pub duration_service: i32,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_service: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Queuecall, "queuecall");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueuecallWebhookMessage {
    #[serde(flatten)]
    pub identity: Identity,
    pub queue_id: Uuid,
    pub reference_type: String,
    pub reference_id: Uuid,
    pub source: Address,
    pub routing_method: RoutingMethod,
    pub tag_ids: Vec<Uuid>,
    pub status: QueuecallStatus,
    pub service_agent_id: Uuid,
    pub timeout_wait: i32,
    pub timeout_service: i32,
    pub duration_waiting: i32,
    pub duration_service: i32,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_service: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_end: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl WebhookConvert for Queuecall {
    type Message = QueuecallWebhookMessage;

    fn convert_webhook_message(self) -> QueuecallWebhookMessage {
        QueuecallWebhookMessage {
            identity: self.identity,
            queue_id: self.queue_id,
            reference_type: self.reference_type,
            reference_id: self.reference_id,
            source: self.source,
            routing_method: self.routing_method,
            tag_ids: self.tag_ids,
            status: self.status,
            service_agent_id: self.service_agent_id,
            timeout_wait: self.timeout_wait,
            timeout_service: self.timeout_service,
            duration_waiting: self.duration_waiting,
            duration_service: self.duration_service,
            tm_create: self.tm_create,
            tm_service: self.tm_service,
            tm_update: self.tm_update,
            tm_end: self.tm_end,
            tm_delete: self.tm_delete,
        }
    }
}

impl Filterable for Queuecall {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("queue_id", FieldKind::Uuid),
        ("reference_id", FieldKind::Uuid),
        ("status", FieldKind::String),
        ("service_agent_id", FieldKind::Uuid),
        ("deleted", FieldKind::Bool),
    ];
}
