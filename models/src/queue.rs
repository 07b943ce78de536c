use crate::filter::{FieldKind, Filterable};
use crate::flow::Action;
use crate::identity::{Identity, WebhookConvert, impl_resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingMethod {
    #[default]
    #[serde(rename = "")]
    None,
    Random,
}

/// Waiting line that hands calls to available agents carrying matching tags.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Queue {
    #[serde(flatten)]
    pub identity: Identity,

    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,

    #[serde(default)]
    pub routing_method: RoutingMethod,
    #[serde(default)]
    pub tag_ids: Vec<Uuid>,

    #[serde(default)]
    pub execute: String,

    #[serde(default)]
    pub wait_flow_id: Uuid,
    #[serde(default)]
    pub wait_actions: Vec<Action>,
    #[serde(default)]
    pub wait_timeout: i32,
    #[serde(default)]
    pub service_timeout: i32,

    #[serde(default)]
    pub wait_queuecall_ids: Vec<Uuid>,
    #[serde(default)]
    pub service_queuecall_ids: Vec<Uuid>,

    #[serde(default)]
    pub total_incoming_count: i64,
    #[serde(default)]
    pub total_serviced_count: i64,
    #[serde(default)]
    pub total_abandoned_count: i64,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Queue, "queue");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueueWebhookMessage {
    #[serde(flatten)]
    pub identity: Identity,
    pub name: String,
    pub detail: String,
    pub routing_method: RoutingMethod,
    pub tag_ids: Vec<Uuid>,
    pub wait_actions: Vec<Action>,
    pub wait_timeout: i32,
    pub service_timeout: i32,
    pub wait_queuecall_ids: Vec<Uuid>,
    pub service_queuecall_ids: Vec<Uuid>,
    pub total_incoming_count: i64,
    pub total_serviced_count: i64,
    pub total_abandoned_count: i64,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl WebhookConvert for Queue {
    type Message = QueueWebhookMessage;

    fn convert_webhook_message(self) -> QueueWebhookMessage {
        QueueWebhookMessage {
            identity: self.identity,
            name: self.name,
            detail: self.detail,
            routing_method: self.routing_method,
            tag_ids: self.tag_ids,
            wait_actions: self.wait_actions,
            wait_timeout: self.wait_timeout,
            service_timeout: self.service_timeout,
            wait_queuecall_ids: self.wait_queuecall_ids,
            service_queuecall_ids: self.service_queuecall_ids,
            total_incoming_count: self.total_incoming_count,
            total_serviced_count: self.total_serviced_count,
            total_abandoned_count: self.total_abandoned_count,
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

impl Filterable for Queue {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("name", FieldKind::String),
        ("routing_method", FieldKind::String),
        ("tag_ids", FieldKind::Uuid),
        ("deleted", FieldKind::Bool),
    ];
}
