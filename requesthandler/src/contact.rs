use crate::{QueueName, RequestHandler, RequestMethod, Result};
use models::contact::{
    Contact, ContactUpdate, EmailCreate, EmailUpdate, PhoneNumberCreate, PhoneNumberUpdate,
};
use models::filter::Filters;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

const RESOURCE: &str = "contact/contacts";

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactCreate {
    pub customer_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub company: String,
    pub job_title: String,
    pub source: String,
    pub external_id: String,
    pub notes: String,
    pub phone_numbers: Vec<PhoneNumberCreate>,
    pub emails: Vec<EmailCreate>,
    pub tag_ids: Vec<Uuid>,
}

/// Exactly one of the two keys is used for a lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactLookup {
    PhoneE164(String),
    Email(String),
}

impl RequestHandler {
    pub async fn contact_v1_contact_create(&self, req: &ContactCreate) -> Result<Contact> {
        self.request(
            QueueName::Contact.as_str(),
            "/v1/contacts",
            RequestMethod::Post,
            RESOURCE,
            Some(serde_json::to_value(req)?),
        )
        .await
    }

    pub async fn contact_v1_contact_get(&self, contact_id: Uuid) -> Result<Contact> {
        self.request(
            QueueName::Contact.as_str(),
            &format!("/v1/contacts/{contact_id}"),
            RequestMethod::Get,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn contact_v1_contact_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Contact>> {
        self.request_list(
            QueueName::Contact,
            "/v1/contacts",
            RESOURCE,
            token,
            size,
            filters,
        )
        .await
    }

    pub async fn contact_v1_contact_update(
        &self,
        contact_id: Uuid,
        update: &ContactUpdate,
    ) -> Result<Contact> {
        self.request(
            QueueName::Contact.as_str(),
            &format!("/v1/contacts/{contact_id}"),
            RequestMethod::Put,
            RESOURCE,
            Some(serde_json::to_value(update)?),
        )
        .await
    }

    pub async fn contact_v1_contact_delete(&self, contact_id: Uuid) -> Result<Contact> {
        self.request(
            QueueName::Contact.as_str(),
            &format!("/v1/contacts/{contact_id}"),
            RequestMethod::Delete,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn contact_v1_contact_lookup(
        &self,
        customer_id: Uuid,
        lookup: &ContactLookup,
    ) -> Result<Contact> {
        let (key, value) = match lookup {
            ContactLookup::PhoneE164(v) => ("phone_e164", v),
            ContactLookup::Email(v) => ("email", v),
        };
        let value: String = url::form_urlencoded::byte_serialize(value.as_bytes()).collect();
        self.request(
            QueueName::Contact.as_str(),
            &format!("/v1/contacts/lookup?customer_id={customer_id}&{key}={value}"),
            RequestMethod::Get,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn contact_v1_phone_number_create(
        &self,
        contact_id: Uuid,
        phone: &PhoneNumberCreate,
    ) -> Result<Contact> {
        self.request(
            QueueName::Contact.as_str(),
            &format!("/v1/contacts/{contact_id}/phone-numbers"),
            RequestMethod::Post,
            RESOURCE,
            Some(serde_json::to_value(phone)?),
        )
        .await
    }

    pub async fn contact_v1_phone_number_update(
        &self,
        contact_id: Uuid,
        phone_number_id: Uuid,
        update: &PhoneNumberUpdate,
    ) -> Result<Contact> {
        self.request(
            QueueName::Contact.as_str(),
            &format!("/v1/contacts/{contact_id}/phone-numbers/{phone_number_id}"),
            RequestMethod::Put,
            RESOURCE,
            Some(serde_json::to_value(update)?),
        )
        .await
    }

    pub async fn contact_v1_phone_number_delete(
        &self,
        contact_id: Uuid,
        phone_number_id: Uuid,
    ) -> Result<Contact> {
        self.request(
            QueueName::Contact.as_str(),
            &format!("/v1/contacts/{contact_id}/phone-numbers/{phone_number_id}"),
            RequestMethod::Delete,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn contact_v1_email_create(&self, contact_id: Uuid, email: &EmailCreate) -> Result<Contact> {
        self.request(
            QueueName::Contact.as_str(),
            &format!("/v1/contacts/{contact_id}/emails"),
            RequestMethod::Post,
            RESOURCE,
            Some(serde_json::to_value(email)?),
        )
        .await
    }

    pub async fn contact_v1_email_update(
        &self,
        contact_id: Uuid,
        email_id: Uuid,
        update: &EmailUpdate,
    ) -> Result<Contact> {
        self.request(
            QueueName::Contact.as_str(),
            &format!("/v1/contacts/{contact_id}/emails/{email_id}"),
            RequestMethod::Put,
            RESOURCE,
            Some(serde_json::to_value(update)?),
        )
        .await
    }

    pub async fn contact_v1_email_delete(&self, contact_id: Uuid, email_id: Uuid) -> Result<Contact> {
        self.request(
            QueueName::Contact.as_str(),
            &format!("/v1/contacts/{contact_id}/emails/{email_id}"),
            RequestMethod::Delete,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn contact_v1_tag_add(&self, contact_id: Uuid, tag_id: Uuid) -> Result<Contact> {
        self.request(
            QueueName::Contact.as_str(),
            &format!("/v1/contacts/{contact_id}/tags"),
            RequestMethod::Post,
            RESOURCE,
            Some(json!({ "tag_id": tag_id })),
        )
        .await
    }

    pub async fn contact_v1_tag_remove(&self, contact_id: Uuid, tag_id: Uuid) -> Result<Contact> {
        self.request(
            QueueName::Contact.as_str(),
            &format!("/v1/contacts/{contact_id}/tags/{tag_id}"),
            RequestMethod::Delete,
            RESOURCE,
            None,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::{MockSock, json_response};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_lookup_escapes_value() {
        let customer_id = Uuid::parse_str("8e2f6a3a-0b8e-11f0-9a3e-0f2f2f4c6b77").unwrap();

        let mock = Arc::new(MockSock::new());
        mock.expect(
            QueueName::Contact.as_str(),
            RequestMethod::Get,
            &format!("/v1/contacts/lookup?customer_id={customer_id}&phone_e164=%2B821100000001"),
            json_response(&Contact::default()),
        );

        let handler = RequestHandler::new(mock.clone(), "api-manager");
        handler
            .contact_v1_contact_lookup(customer_id, &ContactLookup::PhoneE164("+821100000001".into()))
            .await
            .unwrap();
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_partial_update_body() {
        let contact_id = Uuid::parse_str("9a0e8b1c-0b8e-11f0-bb54-a7cf03b0f4a1").unwrap();
        let update = ContactUpdate {
            company: Some("voipbin".into()),
            ..Default::default()
        };

        let mock = Arc::new(MockSock::new());
        mock.expect_with_body(
            QueueName::Contact.as_str(),
            RequestMethod::Put,
            &format!("/v1/contacts/{contact_id}"),
            json!({"company": "voipbin"}),
            json_response(&Contact::default()),
        );

        let handler = RequestHandler::new(mock.clone(), "api-manager");
        handler
            .contact_v1_contact_update(contact_id, &update)
            .await
            .unwrap();
        mock.assert_done();
    }
}
