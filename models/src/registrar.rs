use crate::filter::{FieldKind, Filterable};
use crate::identity::{Identity, WebhookConvert, impl_resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// SIP extension a phone registers with.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    #[serde(flatten)]
    pub identity: Identity,

    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,

    pub extension: String,
    #[serde(default)]
    pub domain_name: String,
    #[serde(default)]
    pub realm: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Extension, "extension");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtensionWebhookMessage {
    #[serde(flatten)]
    pub identity: Identity,
    pub name: String,
    pub detail: String,
    pub extension: String,
    pub domain_name: String,
    pub username: String,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl WebhookConvert for Extension {
    type Message = ExtensionWebhookMessage;

    fn convert_webhook_message(self) -> ExtensionWebhookMessage {
        ExtensionWebhookMessage {
            identity: self.identity,
            name: self.name,
            detail: self.detail,
            extension: self.extension,
            domain_name: self.domain_name,
            username: self.username,
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

impl Filterable for Extension {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("extension", FieldKind::String),
        ("username", FieldKind::String),
        ("domain_name", FieldKind::String),
        ("deleted", FieldKind::Bool),
    ];
}
