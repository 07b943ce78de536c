use crate::filter::{FieldKind, Filterable};
use crate::identity::{Identity, WebhookConvert, impl_resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub id: Uuid,
    #[serde(default)]
    pub customer_id: Uuid,
    #[serde(default)]
    pub contact_id: Uuid,

    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub number_e164: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub is_primary: bool,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub id: Uuid,
    #[serde(default)]
    pub customer_id: Uuid,
    #[serde(default)]
    pub contact_id: Uuid,

    #[serde(default)]
    pub address: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub is_primary: bool,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
}

/// Input for a phone number attached while creating a contact.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumberCreate {
    pub number: String,
    #[serde(default)]
    pub number_e164: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub is_primary: bool,
}

/// Input for an email address attached while creating a contact.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailCreate {
    pub address: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub is_primary: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(flatten)]
    pub identity: Identity,

    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub job_title: String,

    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub external_id: String,
    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub phone_numbers: Vec<PhoneNumber>,
    #[serde(default)]
    pub emails: Vec<Email>,
    #[serde(default)]
    pub tag_ids: Vec<Uuid>,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Contact, "contact");

/// Contact rows carry no internal fields, the public view is the row itself.
impl WebhookConvert for Contact {
    type Message = Contact;

    fn convert_webhook_message(self) -> Contact {
        self
    }
}

impl Filterable for Contact {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("first_name", FieldKind::String),
        ("last_name", FieldKind::String),
        ("display_name", FieldKind::String),
        ("company", FieldKind::String),
        ("source", FieldKind::String),
        ("external_id", FieldKind::String),
        ("tag_ids", FieldKind::Uuid),
        ("deleted", FieldKind::Bool),
    ];
}

/// Partial update of a contact. `None` keeps the current value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumberUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_e164: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_primary: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_primary: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_omits_unset_fields() {
        let update = ContactUpdate {
            first_name: Some("John".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"first_name": "John"}));
    }
}
