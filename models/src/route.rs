use crate::filter::{FieldKind, Filterable};
use crate::identity::{Identity, WebhookConvert, impl_resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outbound dialing rule choosing a provider for a destination prefix.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    #[serde(flatten)]
    pub identity: Identity,

    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,

    pub provider_id: Uuid,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub target: String,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Route, "route");

/// Route rows carry no internal fields, the public view is the row itself.
impl WebhookConvert for Route {
    type Message = Route;

    fn convert_webhook_message(self) -> Route {
        self
    }
}

impl Filterable for Route {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("provider_id", FieldKind::Uuid),
        ("target", FieldKind::String),
        ("deleted", FieldKind::Bool),
    ];
}
