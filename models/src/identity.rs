use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id and owning tenant shared by every customer-scoped entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub customer_id: Uuid,
}

impl Identity {
    pub fn new(id: Uuid, customer_id: Uuid) -> Self {
        Identity { id, customer_id }
    }
}

/// Narrower ownership inside a tenant, e.g. a call placed by one agent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub owner_type: String,
    #[serde(default)]
    pub owner_id: Uuid,
}

pub const OWNER_TYPE_AGENT: &str = "agent";

impl Owner {
    pub fn agent(agent_id: Uuid) -> Self {
        Owner {
            owner_type: OWNER_TYPE_AGENT.into(),
            owner_id: agent_id,
        }
    }

    pub fn is_agent(&self, agent_id: Uuid) -> bool {
        self.owner_type == OWNER_TYPE_AGENT && self.owner_id == agent_id
    }
}

/// A backend entity that belongs to exactly one customer.
pub trait Resource {
    /// Name used in not-found errors and logs.
    const KIND: &'static str;

    fn id(&self) -> Uuid;

    fn customer_id(&self) -> Uuid;

    /// `Some` once the backend soft-deleted the row.
    fn tm_delete(&self) -> Option<DateTime<Utc>>;

    fn is_deleted(&self) -> bool {
        self.tm_delete().is_some()
    }
}

/// Projection of a backend DTO into the shape returned to API callers and webhooks.
pub trait WebhookConvert {
    type Message: Serialize;

    fn convert_webhook_message(self) -> Self::Message;
}

/// Implements [`Resource`] for a struct with `identity` and `tm_delete` fields.
macro_rules! impl_resource {
    ($ty:ty, $kind:literal) => {
        impl $crate::identity::Resource for $ty {
            const KIND: &'static str = $kind;

            fn id(&self) -> ::uuid::Uuid {
                self.identity.id
            }

            fn customer_id(&self) -> ::uuid::Uuid {
                self.identity.customer_id
            }

            fn tm_delete(&self) -> Option<::chrono::DateTime<::chrono::Utc>> {
                self.tm_delete
            }
        }
    };
}

pub(crate) use impl_resource;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_flattens() {
        #[derive(Serialize, Deserialize)]
        struct Row {
            #[serde(flatten)]
            identity: Identity,
            name: String,
        }

        let id = Uuid::new_v4();
        let customer_id = Uuid::new_v4();
        let json = serde_json::json!({"id": id, "customer_id": customer_id, "name": "row"});
        let row: Row = serde_json::from_value(json).unwrap();
        assert_eq!(row.identity, Identity::new(id, customer_id));
        assert_eq!(row.name, "row");
    }

    #[test]
    fn test_owner_is_agent() {
        let agent_id = Uuid::new_v4();
        let owner = Owner::agent(agent_id);
        assert!(owner.is_agent(agent_id));
        assert!(!owner.is_agent(Uuid::new_v4()));

        let other = Owner {
            owner_type: "customer".into(),
            owner_id: agent_id,
        };
        assert!(!other.is_agent(agent_id));
    }
}
