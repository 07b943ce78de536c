use crate::filter::{FieldKind, Filterable};
use crate::identity::{Resource, WebhookConvert};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    #[default]
    Sip,
}

/// Carrier trunk shared by every customer. Only platform admins manage providers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: Uuid,

    #[serde(rename = "type", default)]
    pub kind: ProviderType,
    #[serde(default)]
    pub hostname: String,

    /// Prepended to the destination number before dialing.
    #[serde(default)]
    pub tech_prefix: String,
    #[serde(default)]
    pub tech_postfix: String,
    /// Extra SIP headers added to every outgoing INVITE.
    #[serde(default)]
    pub tech_headers: BTreeMap<String, String>,

    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl Resource for Provider {
    const KIND: &'static str = "provider";

    fn id(&self) -> Uuid {
        self.id
    }

    /// Providers are platform wide.
    fn customer_id(&self) -> Uuid {
        Uuid::nil()
    }

    fn tm_delete(&self) -> Option<DateTime<Utc>> {
        self.tm_delete
    }
}

impl WebhookConvert for Provider {
    type Message = Provider;

    fn convert_webhook_message(self) -> Provider {
        self
    }
}

impl Filterable for Provider {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("type", FieldKind::String),
        ("hostname", FieldKind::String),
        ("name", FieldKind::String),
        ("deleted", FieldKind::Bool),
    ];
}

/// Writable fields of a provider, sent on create and update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderFields {
    #[serde(rename = "type")]
    pub kind: ProviderType,
    pub hostname: String,
    pub tech_prefix: String,
    pub tech_postfix: String,
    pub tech_headers: BTreeMap<String, String>,
    pub name: String,
    pub detail: String,
}
