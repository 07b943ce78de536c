use crate::permission::{MANAGER_MASK, ensure_permission};
use crate::{RawFilters, Result, ServiceError, ServiceHandler, convert_list, customer_filters, fetch_authorized};
use models::address::Address;
use models::agent::Agent;
use models::email::{Attachment, Email, EmailWebhookMessage};
use models::WebhookConvert;
use uuid::Uuid;

impl ServiceHandler {
    async fn email_get_authorized(&self, a: &Agent, email_id: Uuid) -> Result<Email> {
        fetch_authorized(a, MANAGER_MASK, self.req.email_v1_email_get(email_id)).await
    }

    /// Sends an email on behalf of the caller's customer.
    pub async fn email_send(
        &self,
        a: &Agent,
        destinations: &[Address],
        subject: &str,
        content: &str,
        attachments: &[Attachment],
    ) -> Result<EmailWebhookMessage> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;
        if destinations.is_empty() {
            return Err(ServiceError::InvalidArgument("no destination given".into()));
        }

        let res = self
            .req
            .email_v1_email_send(a.customer_id(), destinations, subject, content, attachments)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn email_get(&self, a: &Agent, email_id: Uuid) -> Result<EmailWebhookMessage> {
        let res = self.email_get_authorized(a, email_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn email_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<EmailWebhookMessage>> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let filters = customer_filters::<Email>(a, filters)?;
        let res = self
            .req
            .email_v1_email_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn email_delete(&self, a: &Agent, email_id: Uuid) -> Result<EmailWebhookMessage> {
        self.email_get_authorized(a, email_id).await?;

        let res = self.req.email_v1_email_delete(email_id).await?;
        Ok(res.convert_webhook_message())
    }
}

#[cfg(test)]
mod tests {
    use crate::ServiceError;
    use crate::testing;
    use models::address::{Address, AddressType};
    use models::agent::Permission;
    use models::email::Email;
    use models::Identity;
    use requesthandler::testutils::json_response;
    use requesthandler::{QueueName, RequestMethod};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_email_send() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_MANAGER);
        let email = Email {
            identity: Identity::new(Uuid::new_v4(), customer_id),
            provider_reference_id: "sg-3f9a".into(),
            subject: "hello".into(),
            ..Default::default()
        };
        mock.expect(
            QueueName::Email.as_str(),
            RequestMethod::Post,
            "/v1/emails",
            json_response(&email),
        );

        let destinations = vec![Address::new(AddressType::Email, "jane@example.com")];
        let res = handler
            .email_send(&a, &destinations, "hello", "world", &[])
            .await
            .unwrap();
        assert_eq!(res.identity, email.identity);
        let json = serde_json::to_value(&res).unwrap();
        assert!(json.get("provider_reference_id").is_none());
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_email_send_without_destination() {
        let (handler, mock) = testing::handler();
        let a = testing::agent(Uuid::new_v4(), Permission::CUSTOMER_ADMIN);

        let err = handler.email_send(&a, &[], "hello", "world", &[]).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidArgument(_)));
        assert!(mock.calls().is_empty());
    }
}
