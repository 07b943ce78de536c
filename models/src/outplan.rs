use crate::address::Address;
use crate::filter::{FieldKind, Filterable};
use crate::identity::{Identity, WebhookConvert, impl_resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dialing rules of a campaign: caller id, timeouts and retry budget.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outplan {
    #[serde(flatten)]
    pub identity: Identity,

    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,

    #[serde(default)]
    pub source: Option<Address>,
    /// Milliseconds to wait for an answer.
    #[serde(default)]
    pub dial_timeout: i32,
    /// Milliseconds between two attempts on the same target.
    #[serde(default)]
    pub try_interval: i32,

    #[serde(default)]
    pub max_try_count_0: i32,
    #[serde(default)]
    pub max_try_count_1: i32,
    #[serde(default)]
    pub max_try_count_2: i32,
    #[serde(default)]
    pub max_try_count_3: i32,
    #[serde(default)]
    pub max_try_count_4: i32,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Outplan, "outplan");

/// Outplan rows carry no internal fields, the public view is the row itself.
impl WebhookConvert for Outplan {
    type Message = Outplan;

    fn convert_webhook_message(self) -> Outplan {
        self
    }
}

impl Filterable for Outplan {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("name", FieldKind::String),
        ("deleted", FieldKind::Bool),
    ];
}
