use crate::permission::{MANAGER_MASK, ensure_permission, ensure_super_admin};
use crate::{RawFilters, Result, ServiceHandler, convert_list, customer_filters, fetch_authorized};
use chrono::{DateTime, Utc};
use models::agent::Agent;
use models::number::{Number, NumberWebhookMessage};
use models::WebhookConvert;
use uuid::Uuid;

impl ServiceHandler {
    async fn number_get_authorized(&self, a: &Agent, number_id: Uuid) -> Result<Number> {
        fetch_authorized(a, MANAGER_MASK, self.req.number_v1_number_get(number_id)).await
    }

    /// Checks both flows of a number. A nil id means "no flow" and is always fine.
    async fn number_ensure_flows(&self, a: &Agent, call_flow_id: Uuid, message_flow_id: Uuid) -> Result<()> {
        for flow_id in [call_flow_id, message_flow_id] {
            if !flow_id.is_nil() {
                self.flow_ensure_owned(a, flow_id).await?;
            }
        }
        Ok(())
    }

    /// Purchases a number for the caller's customer.
    pub async fn number_create(
        &self,
        a: &Agent,
        number: &str,
        call_flow_id: Uuid,
        message_flow_id: Uuid,
        name: &str,
        detail: &str,
    ) -> Result<NumberWebhookMessage> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;
        self.number_ensure_flows(a, call_flow_id, message_flow_id).await?;

        let res = self
            .req
            .number_v1_number_create(a.customer_id(), number, call_flow_id, message_flow_id, name, detail)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn number_get(&self, a: &Agent, number_id: Uuid) -> Result<NumberWebhookMessage> {
        let res = self.number_get_authorized(a, number_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn number_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<NumberWebhookMessage>> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let filters = customer_filters::<Number>(a, filters)?;
        let res = self
            .req
            .number_v1_number_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn number_update(
        &self,
        a: &Agent,
        number_id: Uuid,
        call_flow_id: Uuid,
        message_flow_id: Uuid,
        name: &str,
        detail: &str,
    ) -> Result<NumberWebhookMessage> {
        self.number_get_authorized(a, number_id).await?;
        self.number_ensure_flows(a, call_flow_id, message_flow_id).await?;

        let res = self
            .req
            .number_v1_number_update(number_id, call_flow_id, message_flow_id, name, detail)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn number_delete(&self, a: &Agent, number_id: Uuid) -> Result<NumberWebhookMessage> {
        self.number_get_authorized(a, number_id).await?;

        let res = self.req.number_v1_number_delete(number_id).await?;
        Ok(res.convert_webhook_message())
    }

    /// Renews every number due before `tm_renew`, across all customers.
    pub async fn number_renew(&self, a: &Agent, tm_renew: DateTime<Utc>) -> Result<Vec<NumberWebhookMessage>> {
        ensure_super_admin(a)?;

        let res = self.req.number_v1_number_renew_by_tm_renew(tm_renew).await?;
        tracing::info!(count = res.len(), %tm_renew, "renewed numbers");
        Ok(convert_list(res))
    }
}

#[cfg(test)]
mod tests {
    use crate::ServiceError;
    use crate::testing;
    use models::agent::Permission;
    use models::flow::Flow;
    use models::number::Number;
    use models::Identity;
    use requesthandler::testutils::json_response;
    use requesthandler::{QueueName, RequestMethod};
    use serde_json::json;
    use uuid::Uuid;

    fn number(customer_id: Uuid) -> Number {
        Number {
            identity: Identity::new(Uuid::new_v4(), customer_id),
            number: "+821100000001".into(),
            provider_name: "telnyx".into(),
            provider_reference_id: "1748688147379652251".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_number_update() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_MANAGER);
        let num = number(customer_id);
        let flow = Flow {
            identity: Identity::new(Uuid::new_v4(), customer_id),
            ..Default::default()
        };
        mock.expect(
            QueueName::Number.as_str(),
            RequestMethod::Get,
            &format!("/v1/numbers/{}", num.identity.id),
            json_response(&num),
        );
        mock.expect(
            QueueName::Flow.as_str(),
            RequestMethod::Get,
            &format!("/v1/flows/{}", flow.identity.id),
            json_response(&flow),
        );
        mock.expect(
            QueueName::Number.as_str(),
            RequestMethod::Put,
            &format!("/v1/numbers/{}", num.identity.id),
            json_response(&num),
        );

        let res = handler
            .number_update(&a, num.identity.id, flow.identity.id, Uuid::nil(), "main", "")
            .await
            .unwrap();
        assert_eq!(res.number, num.number);
        let json = serde_json::to_value(&res).unwrap();
        assert!(json.get("provider_reference_id").is_none());
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_number_update_foreign_flow() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_ADMIN);
        let num = number(customer_id);
        let flow = Flow {
            identity: Identity::new(Uuid::new_v4(), Uuid::new_v4()),
            ..Default::default()
        };
        mock.expect(
            QueueName::Number.as_str(),
            RequestMethod::Get,
            &format!("/v1/numbers/{}", num.identity.id),
            json_response(&num),
        );
        mock.expect(
            QueueName::Flow.as_str(),
            RequestMethod::Get,
            &format!("/v1/flows/{}", flow.identity.id),
            json_response(&flow),
        );

        let err = handler
            .number_update(&a, num.identity.id, Uuid::nil(), flow.identity.id, "main", "")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidArgument(_)));
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_number_renew() {
        let (handler, mock) = testing::handler();
        let a = testing::agent(Uuid::new_v4(), Permission::PROJECT_SUPER_ADMIN);
        let renewed = vec![number(Uuid::new_v4()), number(Uuid::new_v4())];
        mock.expect_with_body(
            QueueName::Number.as_str(),
            RequestMethod::Post,
            "/v1/numbers/renew",
            json!({"tm_renew": testing::now()}),
            json_response(&renewed),
        );

        let res = handler.number_renew(&a, testing::now()).await.unwrap();
        assert_eq!(res.len(), 2);
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_number_renew_requires_super_admin() {
        let (handler, mock) = testing::handler();
        let a = testing::agent(Uuid::new_v4(), Permission::CUSTOMER_ALL);

        let err = handler.number_renew(&a, testing::now()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NoPermission));
        assert!(mock.calls().is_empty());
    }
}
