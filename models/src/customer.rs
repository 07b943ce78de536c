use crate::filter::{FieldKind, Filterable};
use crate::identity::{Identity, Resource, WebhookConvert, impl_resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebhookMethod {
    #[default]
    #[serde(rename = "")]
    None,
    Post,
    Get,
    Put,
    Delete,
}

/// A tenant. Its own id is the customer id every other entity refers to.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,

    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,

    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub webhook_method: WebhookMethod,
    #[serde(default)]
    pub webhook_uri: String,

    #[serde(default)]
    pub billing_account_id: Uuid,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl Resource for Customer {
    const KIND: &'static str = "customer";

    fn id(&self) -> Uuid {
        self.id
    }

    fn customer_id(&self) -> Uuid {
        self.id
    }

    fn tm_delete(&self) -> Option<DateTime<Utc>> {
        self.tm_delete
    }
}

/// Customer rows carry no internal fields, the public view is the row itself.
impl WebhookConvert for Customer {
    type Message = Customer;

    fn convert_webhook_message(self) -> Customer {
        self
    }
}

impl Filterable for Customer {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("name", FieldKind::String),
        ("email", FieldKind::String),
        ("phone_number", FieldKind::String),
        ("billing_account_id", FieldKind::Uuid),
        ("deleted", FieldKind::Bool),
    ];
}

/// API token of a customer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Accesskey {
    #[serde(flatten)]
    pub identity: Identity,

    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,

    #[serde(default)]
    pub token: String,

    #[serde(default)]
    pub tm_expire: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl Accesskey {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        matches!(self.tm_expire, Some(expire) if expire <= now)
    }
}

impl_resource!(Accesskey, "accesskey");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccesskeyWebhookMessage {
    #[serde(flatten)]
    pub identity: Identity,
    pub name: String,
    pub detail: String,
    /// Only present in the response that created the key.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub token: Option<String>,
    pub tm_expire: Option<DateTime<Utc>>,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl WebhookConvert for Accesskey {
    type Message = AccesskeyWebhookMessage;

    fn convert_webhook_message(self) -> AccesskeyWebhookMessage {
        AccesskeyWebhookMessage {
            identity: self.identity,
            name: self.name,
            detail: self.detail,
            token: None,
            tm_expire: self.tm_expire,
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

impl Filterable for Accesskey {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("name", FieldKind::String),
        ("token", FieldKind::String),
        ("deleted", FieldKind::Bool),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_customer_owns_itself() {
        let customer = Customer {
            id: Uuid::new_v4(),
            ..Default::default()
        };
        assert_eq!(customer.customer_id(), customer.id);
        assert!(!customer.is_deleted());
    }

    #[test]
    fn test_accesskey_expiry_and_redaction() {
        let now = Utc::now();
        let mut key = Accesskey {
            identity: Identity::new(Uuid::new_v4(), Uuid::new_v4()),
            token: "a8f7e2c1".into(),
            tm_expire: Some(now + Duration::days(1)),
            ..Default::default()
        };
        assert!(!key.is_expired(now));

        key.tm_expire = Some(now - Duration::seconds(1));
        assert!(key.is_expired(now));

        key.tm_expire = None;
        assert!(!key.is_expired(now));

        let json = serde_json::to_value(key.convert_webhook_message()).unwrap();
        assert!(json.get("token").is_none());
    }
}
