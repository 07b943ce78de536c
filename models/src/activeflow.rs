use crate::filter::{FieldKind, Filterable};
use crate::flow::Action;
use crate::identity::{Identity, WebhookConvert, impl_resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveflowStatus {
    #[default]
    #[serde(rename = "")]
    None,
    Running,
    Ended,
}

/// What started an activeflow. Activeflows created through the API have none.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceType {
    #[default]
    None,
    Call,
    Message,
    Conversation,
    Campaign,
    Transcribe,
    Recording,
    Api,
}

/// Running instance of a flow.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Activeflow {
    #[serde(flatten)]
    pub identity: Identity,

    pub flow_id: Uuid,
    #[serde(default)]
    pub status: ActiveflowStatus,

    #[serde(default)]
    pub reference_type: ReferenceType,
    #[serde(default)]
    pub reference_id: Uuid,

    #[serde(default)]
    pub current_stack_id: Uuid,
    #[serde(default)]
    pub current_action: Action,
    #[serde(default)]
    pub forward_stack_id: Uuid,
    #[serde(default)]
    pub forward_action_id: Uuid,

    #[serde(default)]
    pub execute_count: u64,
    #[serde(default)]
    pub executed_actions: Vec<Action>,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Activeflow, "activeflow");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActiveflowWebhookMessage {
    #[serde(flatten)]
    pub identity: Identity,
    pub flow_id: Uuid,
    pub status: ActiveflowStatus,
    pub reference_type: ReferenceType,
    pub reference_id: Uuid,
    pub current_action: Action,
    pub forward_action_id: Uuid,
    pub executed_actions: Vec<Action>,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl WebhookConvert for Activeflow {
    type Message = ActiveflowWebhookMessage;

    fn convert_webhook_message(self) -> ActiveflowWebhookMessage {
        ActiveflowWebhookMessage {
            identity: self.identity,
            flow_id: self.flow_id,
            status: self.status,
            reference_type: self.reference_type,
            reference_id: self.reference_id,
            current_action: self.current_action,
            forward_action_id: self.forward_action_id,
            executed_actions: self.executed_actions,
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

impl Filterable for Activeflow {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("flow_id", FieldKind::Uuid),
        ("status", FieldKind::String),
        ("reference_type", FieldKind::String),
        ("reference_id", FieldKind::Uuid),
        ("deleted", FieldKind::Bool),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_drops_stack_position() {
        let json = serde_json::json!({
            "id": "6f4b1f0c-8e5f-11ee-8b8e-3b0a4a1b7e11",
            "customer_id": "5f621078-8e5f-11ee-97b2-cfe7337b701c",
            "flow_id": "7a1f9c3e-8e5f-11ee-a3c1-0b6f1d5a2f44",
            "status": "running",
            "current_stack_id": "8c2d0e4f-8e5f-11ee-bf12-4f7e2a6b3c55",
            "current_action": {"type": "answer"},
            "execute_count": 3
        });
        let activeflow: Activeflow = serde_json::from_value(json).unwrap();
        assert_eq!(activeflow.reference_type, ReferenceType::None);

        let msg = serde_json::to_value(activeflow.convert_webhook_message()).unwrap();
        assert_eq!(msg["status"], "running");
        assert_eq!(msg["reference_type"], "none");
        assert_eq!(msg["current_action"]["type"], "answer");
        assert!(msg.get("current_stack_id").is_none());
        assert!(msg.get("execute_count").is_none());
    }
}
