use crate::permission::{self, MANAGER_MASK};
use crate::{RawFilters, Result, ServiceError, ServiceHandler, convert_list, customer_filters, fetch};
use models::agent::{Agent, Permission};
use models::contact::{
    Contact, ContactUpdate, EmailCreate, EmailUpdate, PhoneNumberCreate, PhoneNumberUpdate,
};
use models::WebhookConvert;
use requesthandler::contact::{ContactCreate, ContactLookup};
use uuid::Uuid;

/// Who is asking. Contacts are reachable from the management API and from the agent
/// self-service API, which admits every role of the customer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ContactScope {
    Manager,
    ServiceAgent,
}

impl ContactScope {
    fn mask(self) -> Permission {
        match self {
            ContactScope::Manager => MANAGER_MASK,
            ContactScope::ServiceAgent => Permission::ALL,
        }
    }

    fn ensure(self, a: &Agent, customer_id: Uuid) -> Result<()> {
        let denied = match self {
            ContactScope::Manager => ServiceError::NoPermission,
            ContactScope::ServiceAgent => ServiceError::AgentNoPermission,
        };
        permission::ensure(a, customer_id, self.mask(), denied)
    }
}

impl ServiceHandler {
    async fn contact_get_authorized(&self, a: &Agent, contact_id: Uuid, scope: ContactScope) -> Result<Contact> {
        let res = fetch(self.req.contact_v1_contact_get(contact_id)).await?;
        scope.ensure(a, res.identity.customer_id)?;
        Ok(res)
    }

    pub(crate) async fn contact_create_scoped(
        &self,
        a: &Agent,
        mut req: ContactCreate,
        scope: ContactScope,
    ) -> Result<Contact> {
        scope.ensure(a, a.customer_id())?;

        req.customer_id = a.customer_id();
        let res = self.req.contact_v1_contact_create(&req).await?;
        Ok(res.convert_webhook_message())
    }

    pub(crate) async fn contact_get_scoped(&self, a: &Agent, contact_id: Uuid, scope: ContactScope) -> Result<Contact> {
        let res = self.contact_get_authorized(a, contact_id, scope).await?;
        Ok(res.convert_webhook_message())
    }

    pub(crate) async fn contact_list_scoped(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
        scope: ContactScope,
    ) -> Result<Vec<Contact>> {
        scope.ensure(a, a.customer_id())?;

        let filters = customer_filters::<Contact>(a, filters)?;
        let res = self
            .req
            .contact_v1_contact_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub(crate) async fn contact_update_scoped(
        &self,
        a: &Agent,
        contact_id: Uuid,
        update: &ContactUpdate,
        scope: ContactScope,
    ) -> Result<Contact> {
        self.contact_get_authorized(a, contact_id, scope).await?;

        let res = self.req.contact_v1_contact_update(contact_id, update).await?;
        Ok(res.convert_webhook_message())
    }

    pub(crate) async fn contact_delete_scoped(&self, a: &Agent, contact_id: Uuid, scope: ContactScope) -> Result<Contact> {
        self.contact_get_authorized(a, contact_id, scope).await?;

        let res = self.req.contact_v1_contact_delete(contact_id).await?;
        Ok(res.convert_webhook_message())
    }

    /// Finds the caller's contact by E.164 phone number or email address.
    pub(crate) async fn contact_lookup_scoped(
        &self,
        a: &Agent,
        lookup: &ContactLookup,
        scope: ContactScope,
    ) -> Result<Contact> {
        scope.ensure(a, a.customer_id())?;

        let res = fetch(self.req.contact_v1_contact_lookup(a.customer_id(), lookup)).await?;
        scope.ensure(a, res.identity.customer_id)?;
        Ok(res.convert_webhook_message())
    }

    pub(crate) async fn contact_phone_number_create_scoped(
        &self,
        a: &Agent,
        contact_id: Uuid,
        phone: &PhoneNumberCreate,
        scope: ContactScope,
    ) -> Result<Contact> {
        self.contact_get_authorized(a, contact_id, scope).await?;

        let res = self.req.contact_v1_phone_number_create(contact_id, phone).await?;
        Ok(res.convert_webhook_message())
    }

    pub(crate) async fn contact_phone_number_update_scoped(
        &self,
        a: &Agent,
        contact_id: Uuid,
        phone_number_id: Uuid,
        update: &PhoneNumberUpdate,
        scope: ContactScope,
    ) -> Result<Contact> {
        self.contact_get_authorized(a, contact_id, scope).await?;

        let res = self
            .req
            .contact_v1_phone_number_update(contact_id, phone_number_id, update)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub(crate) async fn contact_phone_number_delete_scoped(
        &self,
        a: &Agent,
        contact_id: Uuid,
        phone_number_id: Uuid,
        scope: ContactScope,
    ) -> Result<Contact> {
        self.contact_get_authorized(a, contact_id, scope).await?;

        let res = self
            .req
            .contact_v1_phone_number_delete(contact_id, phone_number_id)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub(crate) async fn contact_email_create_scoped(
        &self,
        a: &Agent,
        contact_id: Uuid,
        email: &EmailCreate,
        scope: ContactScope,
    ) -> Result<Contact> {
        self.contact_get_authorized(a, contact_id, scope).await?;

        let res = self.req.contact_v1_email_create(contact_id, email).await?;
        Ok(res.convert_webhook_message())
    }

    pub(crate) async fn contact_email_update_scoped(
        &self,
        a: &Agent,
        contact_id: Uuid,
        email_id: Uuid,
        update: &EmailUpdate,
        scope: ContactScope,
    ) -> Result<Contact> {
        self.contact_get_authorized(a, contact_id, scope).await?;

        let res = self
            .req
            .contact_v1_email_update(contact_id, email_id, update)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub(crate) async fn contact_email_delete_scoped(
        &self,
        a: &Agent,
        contact_id: Uuid,
        email_id: Uuid,
        scope: ContactScope,
    ) -> Result<Contact> {
        self.contact_get_authorized(a, contact_id, scope).await?;

        let res = self.req.contact_v1_email_delete(contact_id, email_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub(crate) async fn contact_tag_add_scoped(
        &self,
        a: &Agent,
        contact_id: Uuid,
        tag_id: Uuid,
        scope: ContactScope,
    ) -> Result<Contact> {
        self.contact_get_authorized(a, contact_id, scope).await?;

        let res = self.req.contact_v1_tag_add(contact_id, tag_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub(crate) async fn contact_tag_remove_scoped(
        &self,
        a: &Agent,
        contact_id: Uuid,
        tag_id: Uuid,
        scope: ContactScope,
    ) -> Result<Contact> {
        self.contact_get_authorized(a, contact_id, scope).await?;

        let res = self.req.contact_v1_tag_remove(contact_id, tag_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn contact_create(&self, a: &Agent, req: ContactCreate) -> Result<Contact> {
        self.contact_create_scoped(a, req, ContactScope::Manager).await
    }

    pub async fn contact_get(&self, a: &Agent, contact_id: Uuid) -> Result<Contact> {
        self.contact_get_scoped(a, contact_id, ContactScope::Manager).await
    }

    pub async fn contact_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<Contact>> {
        self.contact_list_scoped(a, size, token, filters, ContactScope::Manager)
            .await
    }

    /// Applies the fields set in `update`, leaving the others untouched.
    pub async fn contact_update(&self, a: &Agent, contact_id: Uuid, update: &ContactUpdate) -> Result<Contact> {
        self.contact_update_scoped(a, contact_id, update, ContactScope::Manager)
            .await
    }

    pub async fn contact_delete(&self, a: &Agent, contact_id: Uuid) -> Result<Contact> {
        self.contact_delete_scoped(a, contact_id, ContactScope::Manager).await
    }

    pub async fn contact_lookup(&self, a: &Agent, lookup: &ContactLookup) -> Result<Contact> {
        self.contact_lookup_scoped(a, lookup, ContactScope::Manager).await
    }

    pub async fn contact_phone_number_create(
        &self,
        a: &Agent,
        contact_id: Uuid,
        phone: &PhoneNumberCreate,
    ) -> Result<Contact> {
        self.contact_phone_number_create_scoped(a, contact_id, phone, ContactScope::Manager)
            .await
    }

    pub async fn contact_phone_number_update(
        &self,
        a: &Agent,
        contact_id: Uuid,
        phone_number_id: Uuid,
        update: &PhoneNumberUpdate,
    ) -> Result<Contact> {
        self.contact_phone_number_update_scoped(a, contact_id, phone_number_id, update, ContactScope::Manager)
            .await
    }

    pub async fn contact_phone_number_delete(
        &self,
        a: &Agent,
        contact_id: Uuid,
        phone_number_id: Uuid,
    ) -> Result<Contact> {
        self.contact_phone_number_delete_scoped(a, contact_id, phone_number_id, ContactScope::Manager)
            .await
    }

    pub async fn contact_email_create(&self, a: &Agent, contact_id: Uuid, email: &EmailCreate) -> Result<Contact> {
        self.contact_email_create_scoped(a, contact_id, email, ContactScope::Manager)
            .await
    }

    pub async fn contact_email_update(
        &self,
        a: &Agent,
        contact_id: Uuid,
        email_id: Uuid,
        update: &EmailUpdate,
    ) -> Result<Contact> {
        self.contact_email_update_scoped(a, contact_id, email_id, update, ContactScope::Manager)
            .await
    }

    pub async fn contact_email_delete(&self, a: &Agent, contact_id: Uuid, email_id: Uuid) -> Result<Contact> {
        self.contact_email_delete_scoped(a, contact_id, email_id, ContactScope::Manager)
            .await
    }

    pub async fn contact_tag_add(&self, a: &Agent, contact_id: Uuid, tag_id: Uuid) -> Result<Contact> {
        self.contact_tag_add_scoped(a, contact_id, tag_id, ContactScope::Manager)
            .await
    }

    pub async fn contact_tag_remove(&self, a: &Agent, contact_id: Uuid, tag_id: Uuid) -> Result<Contact> {
        self.contact_tag_remove_scoped(a, contact_id, tag_id, ContactScope::Manager)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::ServiceError;
    use crate::testing;
    use models::agent::Permission;
    use models::contact::{Contact, ContactUpdate};
    use models::Identity;
    use requesthandler::contact::ContactLookup;
    use requesthandler::testutils::json_response;
    use requesthandler::{QueueName, RequestMethod};
    use serde_json::json;
    use uuid::Uuid;

    fn contact(customer_id: Uuid) -> Contact {
        Contact {
            identity: Identity::new(Uuid::new_v4(), customer_id),
            first_name: "Jane".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_contact_update_sends_only_set_fields() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_MANAGER);
        let c = contact(customer_id);
        mock.expect(
            QueueName::Contact.as_str(),
            RequestMethod::Get,
            &format!("/v1/contacts/{}", c.identity.id),
            json_response(&c),
        );
        mock.expect_with_body(
            QueueName::Contact.as_str(),
            RequestMethod::Put,
            &format!("/v1/contacts/{}", c.identity.id),
            json!({"company": "voipbin"}),
            json_response(&c),
        );

        let update = ContactUpdate {
            company: Some("voipbin".into()),
            ..Default::default()
        };
        handler.contact_update(&a, c.identity.id, &update).await.unwrap();
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_contact_lookup_other_customer() {
        let (handler, mock) = testing::handler();
        let a = testing::agent(Uuid::new_v4(), Permission::CUSTOMER_ADMIN);
        let c = contact(Uuid::new_v4());
        mock.expect(
            QueueName::Contact.as_str(),
            RequestMethod::Get,
            &format!("/v1/contacts/lookup?customer_id={}&email=jane%40example.com", a.customer_id()),
            json_response(&c),
        );

        let err = handler
            .contact_lookup(&a, &ContactLookup::Email("jane@example.com".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NoPermission));
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_contact_get_plain_agent_denied() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_AGENT);
        let c = contact(customer_id);
        mock.expect(
            QueueName::Contact.as_str(),
            RequestMethod::Get,
            &format!("/v1/contacts/{}", c.identity.id),
            json_response(&c),
        );

        let err = handler.contact_get(&a, c.identity.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NoPermission));
        mock.assert_done();
    }
}
