use crate::filter::{FieldKind, Filterable};
use crate::flow::Action;
use crate::identity::{Identity, WebhookConvert, impl_resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignType {
    #[default]
    Call,
    Flow,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    #[default]
    Stop,
    Stopping,
    Run,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndHandle {
    #[default]
    Stop,
    Continue,
}

/// Outbound dialing campaign.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    #[serde(flatten)]
    pub identity: Identity,

    #[serde(rename = "type", default)]
    pub kind: CampaignType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,

    #[serde(default)]
    pub status: CampaignStatus,
    #[serde(default)]
    pub service_level: i32,
    #[serde(default)]
    pub end_handle: EndHandle,

    #[serde(default)]
    pub flow_id: Uuid,
    #[serde(default)]
    pub actions: Vec<Action>,

    #[serde(default)]
    pub outplan_id: Uuid,
    #[serde(default)]
    pub outdial_id: Uuid,
    #[serde(default)]
    pub queue_id: Uuid,
    #[serde(default)]
    pub next_campaign_id: Uuid,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Campaign, "campaign");

/// Campaign rows carry no internal fields, the public view is the row itself.
impl WebhookConvert for Campaign {
    type Message = Campaign;

    fn convert_webhook_message(self) -> Campaign {
        self
    }
}

impl Filterable for Campaign {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("type", FieldKind::String),
        ("name", FieldKind::String),
        ("status", FieldKind::String),
        ("outplan_id", FieldKind::Uuid),
        ("outdial_id", FieldKind::Uuid),
        ("queue_id", FieldKind::Uuid),
        ("deleted", FieldKind::Bool),
    ];
}
