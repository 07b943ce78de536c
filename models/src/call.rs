use crate::address::Address;
use crate::filter::{FieldKind, Filterable};
use crate::identity::{Identity, Owner, WebhookConvert, impl_resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallType {
    #[default]
    Flow,
    Conference,
    Sip,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallStatus {
    #[default]
    Dialing,
    Ringing,
    Progressing,
    Terminating,
    Canceling,
    Hangup,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    #[serde(rename = "")]
    None,
    Incoming,
    Outgoing,
}

/// Media direction for mute, silence and talk operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaDirection {
    #[default]
    Both,
    In,
    Out,
}

impl MediaDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaDirection::Both => "both",
            MediaDirection::In => "in",
            MediaDirection::Out => "out",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Call {
    #[serde(flatten)]
    pub identity: Identity,
    #[serde(flatten)]
    pub owner: Owner,

    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub bridge_id: String,

    #[serde(default)]
    pub flow_id: Uuid,
    #[serde(default)]
    pub activeflow_id: Uuid,
    #[serde(rename = "type", default)]
    pub kind: CallType,

    #[serde(default)]
    pub master_call_id: Uuid,
    #[serde(default)]
    pub chained_call_ids: Vec<Uuid>,
    #[serde(default)]
    pub recording_id: Uuid,
    #[serde(default)]
    pub recording_ids: Vec<Uuid>,
    #[serde(default)]
    pub groupcall_id: Uuid,

    #[serde(default)]
    pub source: Address,
    #[serde(default)]
    pub destination: Address,

    #[serde(default)]
    pub status: CallStatus,
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub mute_direction: String,
    #[serde(default)]
    pub hangup_by: String,
    #[serde(default)]
    pub hangup_reason: String,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Call, "call");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallWebhookMessage {
    #[serde(flatten)]
    pub identity: Identity,
    #[serde(flatten)]
    pub owner: Owner,
    pub flow_id: Uuid,
    pub activeflow_id: Uuid,
    #[serde(rename = "type")]
    pub kind: CallType,
    pub master_call_id: Uuid,
    pub chained_call_ids: Vec<Uuid>,
    pub recording_id: Uuid,
    pub recording_ids: Vec<Uuid>,
    pub groupcall_id: Uuid,
    pub source: Address,
    pub destination: Address,
    pub status: CallStatus,
    pub direction: Direction,
    pub mute_direction: String,
    pub hangup_by: String,
    pub hangup_reason: String,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl WebhookConvert for Call {
    type Message = CallWebhookMessage;

    fn convert_webhook_message(self) -> CallWebhookMessage {
        CallWebhookMessage {
            identity: self.identity,
            owner: self.owner,
            flow_id: self.flow_id,
            activeflow_id: self.activeflow_id,
            kind: self.kind,
            master_call_id: self.master_call_id,
            chained_call_ids: self.chained_call_ids,
            recording_id: self.recording_id,
            recording_ids: self.recording_ids,
            groupcall_id: self.groupcall_id,
            source: self.source,
            destination: self.destination,
            status: self.status,
            direction: self.direction,
            mute_direction: self.mute_direction,
            hangup_by: self.hangup_by,
            hangup_reason: self.hangup_reason,
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

impl Filterable for Call {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("owner_type", FieldKind::String),
        ("owner_id", FieldKind::Uuid),
        ("flow_id", FieldKind::Uuid),
        ("activeflow_id", FieldKind::Uuid),
        ("type", FieldKind::String),
        ("status", FieldKind::String),
        ("direction", FieldKind::String),
        ("groupcall_id", FieldKind::Uuid),
        ("deleted", FieldKind::Bool),
    ];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupcallStatus {
    #[default]
    Progressing,
    Hangingup,
    Hangup,
}

/// Several outgoing calls dialed together, e.g. ringing every address of an agent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Groupcall {
    #[serde(flatten)]
    pub identity: Identity,
    #[serde(flatten)]
    pub owner: Owner,

    #[serde(default)]
    pub status: GroupcallStatus,
    #[serde(default)]
    pub flow_id: Uuid,
    #[serde(default)]
    pub source: Address,
    #[serde(default)]
    pub destinations: Vec<Address>,
    #[serde(default)]
    pub ring_method: String,
    #[serde(default)]
    pub answer_method: String,
    #[serde(default)]
    pub answer_call_id: Uuid,
    #[serde(default)]
    pub call_ids: Vec<Uuid>,
    #[serde(default)]
    pub call_count: i32,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Groupcall, "groupcall");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupcallWebhookMessage {
    #[serde(flatten)]
    pub identity: Identity,
    #[serde(flatten)]
    pub owner: Owner,
    pub status: GroupcallStatus,
    pub flow_id: Uuid,
    pub source: Address,
    pub destinations: Vec<Address>,
    pub ring_method: String,
    pub answer_method: String,
    pub answer_call_id: Uuid,
    pub call_ids: Vec<Uuid>,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl WebhookConvert for Groupcall {
    type Message = GroupcallWebhookMessage;

    fn convert_webhook_message(self) -> GroupcallWebhookMessage {
        GroupcallWebhookMessage {
            identity: self.identity,
            owner: self.owner,
            status: self.status,
            flow_id: self.flow_id,
            source: self.source,
            destinations: self.destinations,
            ring_method: self.ring_method,
            answer_method: self.answer_method,
            answer_call_id: self.answer_call_id,
            call_ids: self.call_ids,
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

impl Filterable for Groupcall {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("owner_type", FieldKind::String),
        ("owner_id", FieldKind::Uuid),
        ("status", FieldKind::String),
        ("deleted", FieldKind::Bool),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::AddressType;

    #[test]
    fn test_convert_drops_internal_fields() {
        let mut data = serde_json::Map::new();
        data.insert("sip_header".into(), serde_json::json!("x"));

        let call = Call {
            identity: Identity::new(Uuid::new_v4(), Uuid::new_v4()),
            owner: Owner::agent(Uuid::new_v4()),
            channel_id: "asterisk-call-5765dd4d69-xrtc6-1613722525.123".into(),
            bridge_id: "bridge-1".into(),
            source: Address::new(AddressType::Tel, "+821100000001"),
            destination: Address::new(AddressType::Tel, "+821100000002"),
            data,
            status: CallStatus::Progressing,
            ..Default::default()
        };

        let msg = call.clone().convert_webhook_message();
        assert_eq!(msg.identity, call.identity);
        assert_eq!(msg.owner, call.owner);
        assert_eq!(msg.source, call.source);
        assert_eq!(msg.destination, call.destination);

        let json = serde_json::to_value(&msg).unwrap();
        assert!(json.get("channel_id").is_none());
        assert!(json.get("bridge_id").is_none());
        assert!(json.get("data").is_none());
        assert_eq!(json["owner_type"], "agent");
        assert_eq!(json["status"], "progressing");
    }
}
