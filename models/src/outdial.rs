use crate::address::Address;
use crate::filter::{FieldKind, Filterable};
use crate::identity::{Identity, WebhookConvert, impl_resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Dial list of a campaign.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outdial {
    #[serde(flatten)]
    pub identity: Identity,

    #[serde(default)]
    pub campaign_id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,
    /// Opaque payload handed to the flow of each dialed target.
    #[serde(default)]
    pub data: String,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Outdial, "outdial");

/// Outdial rows carry no internal fields, the public view is the row itself.
impl WebhookConvert for Outdial {
    type Message = Outdial;

    fn convert_webhook_message(self) -> Outdial {
        self
    }
}

impl Filterable for Outdial {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("campaign_id", FieldKind::Uuid),
        ("name", FieldKind::String),
        ("deleted", FieldKind::Bool),
    ];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetStatus {
    #[default]
    Idle,
    Progressing,
    Done,
}

/// One entry of an outdial with up to five alternative destinations.
///
/// Targets carry no customer id of their own, access is decided on the parent outdial.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OutdialTarget {
    pub id: Uuid,
    pub outdial_id: Uuid,

    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub status: TargetStatus,

    #[serde(default)]
    pub destination_0: Option<Address>,
    #[serde(default)]
    pub destination_1: Option<Address>,
    #[serde(default)]
    pub destination_2: Option<Address>,
    #[serde(default)]
    pub destination_3: Option<Address>,
    #[serde(default)]
    pub destination_4: Option<Address>,

    #[serde(default)]
    pub try_count_0: i32,
    #[serde(default)]
    pub try_count_1: i32,
    #[serde(default)]
    pub try_count_2: i32,
    #[serde(default)]
    pub try_count_3: i32,
    #[serde(default)]
    pub try_count_4: i32,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl WebhookConvert for OutdialTarget {
    type Message = OutdialTarget;

    fn convert_webhook_message(self) -> OutdialTarget {
        self
    }
}

/// Destinations of a new outdial target, in dialing order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetDestinations {
    pub destination_0: Option<Address>,
    pub destination_1: Option<Address>,
    pub destination_2: Option<Address>,
    pub destination_3: Option<Address>,
    pub destination_4: Option<Address>,
}
