use crate::filter::{FieldKind, Filterable};
use crate::identity::{Identity, WebhookConvert, impl_resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeakingStatus {
    #[default]
    Initiating,
    Active,
    Stopped,
}

/// Streaming text-to-speech session injected into a call or conference.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Speaking {
    #[serde(flatten)]
    pub identity: Identity,

    pub reference_type: String,
    pub reference_id: Uuid,

    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub voice_id: String,
    #[serde(default)]
    pub direction: String,
    #[serde(default)]
    pub status: SpeakingStatus,

    /// Streaming pod serving the session; follow-up requests go to it directly.
    #[serde(default)]
    pub pod_id: String,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Speaking, "speaking");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeakingWebhookMessage {
    #[serde(flatten)]
    pub identity: Identity,
    pub reference_type: String,
    pub reference_id: Uuid,
    pub language: String,
    pub provider: String,
    pub voice_id: String,
    pub direction: String,
    pub status: SpeakingStatus,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl WebhookConvert for Speaking {
    type Message = SpeakingWebhookMessage;

    fn convert_webhook_message(self) -> SpeakingWebhookMessage {
        SpeakingWebhookMessage {
            identity: self.identity,
            reference_type: self.reference_type,
            reference_id: self.reference_id,
            language: self.language,
            provider: self.provider,
            voice_id: self.voice_id,
            direction: self.direction,
            status: self.status,
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

impl Filterable for Speaking {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("reference_type", FieldKind::String),
        ("reference_id", FieldKind::Uuid),
        ("status", FieldKind::String),
        ("deleted", FieldKind::Bool),
    ];
}
