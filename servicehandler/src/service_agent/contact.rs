use crate::contact::ContactScope;
use crate::{RawFilters, Result, ServiceHandler};
use models::agent::Agent;
use models::contact::{
    Contact, ContactUpdate, EmailCreate, EmailUpdate, PhoneNumberCreate, PhoneNumberUpdate,
};
use requesthandler::contact::{ContactCreate, ContactLookup};
use uuid::Uuid;

impl ServiceHandler {
    pub async fn service_agent_contact_create(&self, a: &Agent, req: ContactCreate) -> Result<Contact> {
        self.contact_create_scoped(a, req, ContactScope::ServiceAgent).await
    }

    pub async fn service_agent_contact_get(&self, a: &Agent, contact_id: Uuid) -> Result<Contact> {
        self.contact_get_scoped(a, contact_id, ContactScope::ServiceAgent)
            .await
    }

    pub async fn service_agent_contact_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<Contact>> {
        self.contact_list_scoped(a, size, token, filters, ContactScope::ServiceAgent)
            .await
    }

    pub async fn service_agent_contact_update(
        &self,
        a: &Agent,
        contact_id: Uuid,
        update: &ContactUpdate,
    ) -> Result<Contact> {
        self.contact_update_scoped(a, contact_id, update, ContactScope::ServiceAgent)
            .await
    }

    pub async fn service_agent_contact_delete(&self, a: &Agent, contact_id: Uuid) -> Result<Contact> {
        self.contact_delete_scoped(a, contact_id, ContactScope::ServiceAgent)
            .await
    }

    pub async fn service_agent_contact_lookup(&self, a: &Agent, lookup: &ContactLookup) -> Result<Contact> {
        self.contact_lookup_scoped(a, lookup, ContactScope::ServiceAgent)
            .await
    }

    pub async fn service_agent_contact_phone_number_create(
        &self,
        a: &Agent,
        contact_id: Uuid,
        phone: &PhoneNumberCreate,
    ) -> Result<Contact> {
        self.contact_phone_number_create_scoped(a, contact_id, phone, ContactScope::ServiceAgent)
            .await
    }

    pub async fn service_agent_contact_phone_number_update(
        &self,
        a: &Agent,
        contact_id: Uuid,
        phone_number_id: Uuid,
        update: &PhoneNumberUpdate,
    ) -> Result<Contact> {
        self.contact_phone_number_update_scoped(
            a,
            contact_id,
            phone_number_id,
            update,
            ContactScope::ServiceAgent,
        )
        .await
    }

    pub async fn service_agent_contact_phone_number_delete(
        &self,
        a: &Agent,
        contact_id: Uuid,
        phone_number_id: Uuid,
    ) -> Result<Contact> {
        self.contact_phone_number_delete_scoped(a, contact_id, phone_number_id, ContactScope::ServiceAgent)
            .await
    }

    pub async fn service_agent_contact_email_create(
        &self,
        a: &Agent,
        contact_id: Uuid,
        email: &EmailCreate,
    ) -> Result<Contact> {
        self.contact_email_create_scoped(a, contact_id, email, ContactScope::ServiceAgent)
            .await
    }

    pub async fn service_agent_contact_email_update(
        &self,
        a: &Agent,
        contact_id: Uuid,
        email_id: Uuid,
        update: &EmailUpdate,
    ) -> Result<Contact> {
        self.contact_email_update_scoped(a, contact_id, email_id, update, ContactScope::ServiceAgent)
            .await
    }

    pub async fn service_agent_contact_email_delete(
        &self,
        a: &Agent,
        contact_id: Uuid,
        email_id: Uuid,
    ) -> Result<Contact> {
        self.contact_email_delete_scoped(a, contact_id, email_id, ContactScope::ServiceAgent)
            .await
    }

    pub async fn service_agent_contact_tag_add(&self, a: &Agent, contact_id: Uuid, tag_id: Uuid) -> Result<Contact> {
        self.contact_tag_add_scoped(a, contact_id, tag_id, ContactScope::ServiceAgent)
            .await
    }

    pub async fn service_agent_contact_tag_remove(
        &self,
        a: &Agent,
        contact_id: Uuid,
        tag_id: Uuid,
    ) -> Result<Contact> {
        self.contact_tag_remove_scoped(a, contact_id, tag_id, ContactScope::ServiceAgent)
            .await
    }
}
