use crate::address::Address;
use crate::filter::{FieldKind, Filterable};
use crate::identity::{Identity, WebhookConvert, impl_resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr};
use uuid::Uuid;

/// Role flags of an agent. Any set bit in common with a required mask grants access.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(u32);

impl Permission {
    pub const NONE: Permission = Permission(0x0000);

    pub const PROJECT_SUPER_ADMIN: Permission = Permission(0x0001);
    pub const PROJECT_ALL: Permission = Permission(0x000F);

    pub const CUSTOMER_AGENT: Permission = Permission(0x0010);
    pub const CUSTOMER_MANAGER: Permission = Permission(0x0020);
    pub const CUSTOMER_ADMIN: Permission = Permission(0x0040);
    pub const CUSTOMER_ALL: Permission = Permission(0x00F0);

    pub const ALL: Permission = Permission(0xFFFF);

    pub const fn from_bits(bits: u32) -> Self {
        Permission(bits)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// True if any bit of `other` is set.
    pub const fn intersects(&self, other: Permission) -> bool {
        self.0 & other.0 != 0
    }

    /// True if every bit of `other` is set.
    pub const fn contains(&self, other: Permission) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Permission {
    type Output = Permission;

    fn bitor(self, rhs: Self) -> Self::Output {
        Permission(self.0 | rhs.0)
    }
}

impl BitAnd for Permission {
    type Output = Permission;

    fn bitand(self, rhs: Self) -> Self::Output {
        Permission(self.0 & rhs.0)
    }
}

impl fmt::Debug for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Permission({:#06x})", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RingMethod {
    #[default]
    RingAll,
    Linear,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    #[serde(rename = "")]
    None,
    Available,
    Away,
    Busy,
    Offline,
    Ringing,
}

/// An employee of a customer. Also the authenticated principal of every request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    #[serde(flatten)]
    pub identity: Identity,

    pub username: String,
    #[serde(default)]
    pub password_hash: String,

    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,

    #[serde(default)]
    pub ring_method: RingMethod,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub permission: Permission,
    #[serde(default)]
    pub tag_ids: Vec<Uuid>,
    #[serde(default)]
    pub addresses: Vec<Address>,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl Agent {
    pub fn id(&self) -> Uuid {
        self.identity.id
    }

    pub fn customer_id(&self) -> Uuid {
        self.identity.customer_id
    }
}

impl_resource!(Agent, "agent");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentWebhookMessage {
    #[serde(flatten)]
    pub identity: Identity,
    pub username: String,
    pub name: String,
    pub detail: String,
    pub ring_method: RingMethod,
    pub status: Status,
    pub permission: Permission,
    pub tag_ids: Vec<Uuid>,
    pub addresses: Vec<Address>,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl WebhookConvert for Agent {
    type Message = AgentWebhookMessage;

    fn convert_webhook_message(self) -> AgentWebhookMessage {
        AgentWebhookMessage {
            identity: self.identity,
            username: self.username,
            name: self.name,
            detail: self.detail,
            ring_method: self.ring_method,
            status: self.status,
            permission: self.permission,
            tag_ids: self.tag_ids,
            addresses: self.addresses,
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

impl Filterable for Agent {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("username", FieldKind::String),
        ("name", FieldKind::String),
        ("ring_method", FieldKind::String),
        ("status", FieldKind::String),
        ("permission", FieldKind::Integer),
        ("tag_ids", FieldKind::Uuid),
        ("deleted", FieldKind::Bool),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_ops() {
        let mask = Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER;
        assert_eq!(mask.bits(), 0x0060);
        assert!(Permission::CUSTOMER_ADMIN.intersects(mask));
        assert!(!Permission::CUSTOMER_AGENT.intersects(mask));
        assert!(!Permission::NONE.intersects(mask));

        assert!(Permission::CUSTOMER_ALL.contains(mask));
        assert!(Permission::PROJECT_ALL.contains(Permission::PROJECT_SUPER_ADMIN));
        assert_eq!(mask & Permission::CUSTOMER_ADMIN, Permission::CUSTOMER_ADMIN);
        assert!(Permission::NONE.is_empty());
    }

    #[test]
    fn test_convert_drops_password_hash() {
        let agent = Agent {
            identity: Identity::new(Uuid::new_v4(), Uuid::new_v4()),
            username: "test@voipbin.net".into(),
            password_hash: "$2a$10$hash".into(),
            permission: Permission::CUSTOMER_ADMIN,
            ..Default::default()
        };

        let msg = agent.clone().convert_webhook_message();
        assert_eq!(msg.identity, agent.identity);
        assert_eq!(msg.permission, Permission::CUSTOMER_ADMIN);

        let json = serde_json::to_value(&msg).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["permission"], 0x0040);
        assert_eq!(json["id"], agent.identity.id.to_string());
    }
}
