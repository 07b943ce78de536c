use crate::permission::{MANAGER_MASK, ensure_permission};
use crate::{RawFilters, Result, ServiceHandler, convert_list, customer_filters, fetch_authorized};
use models::agent::Agent;
use models::ai::{Ai, AiFields, AiWebhookMessage};
use models::WebhookConvert;
use uuid::Uuid;

impl ServiceHandler {
    async fn ai_get_authorized(&self, a: &Agent, ai_id: Uuid) -> Result<Ai> {
        fetch_authorized(a, MANAGER_MASK, self.req.ai_v1_ai_get(ai_id)).await
    }

    pub async fn ai_create(&self, a: &Agent, fields: &AiFields) -> Result<AiWebhookMessage> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let res = self.req.ai_v1_ai_create(a.customer_id(), fields).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn ai_get(&self, a: &Agent, ai_id: Uuid) -> Result<AiWebhookMessage> {
        let res = self.ai_get_authorized(a, ai_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn ai_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<AiWebhookMessage>> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let filters = customer_filters::<Ai>(a, filters)?;
        let res = self
            .req
            .ai_v1_ai_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn ai_update(&self, a: &Agent, ai_id: Uuid, fields: &AiFields) -> Result<AiWebhookMessage> {
        self.ai_get_authorized(a, ai_id).await?;

        let res = self.req.ai_v1_ai_update(ai_id, fields).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn ai_delete(&self, a: &Agent, ai_id: Uuid) -> Result<AiWebhookMessage> {
        self.ai_get_authorized(a, ai_id).await?;

        let res = self.req.ai_v1_ai_delete(ai_id).await?;
        Ok(res.convert_webhook_message())
    }
}

#[cfg(test)]
mod tests {
    use crate::testing;
    use models::agent::Permission;
    use models::ai::{Ai, AiFields};
    use models::Identity;
    use requesthandler::testutils::json_response;
    use requesthandler::{QueueName, RequestMethod};
    use uuid::Uuid;

    fn fields() -> AiFields {
        AiFields {
            name: "support bot".into(),
            engine_type: "openai".into(),
            engine_model: "gpt-4o".into(),
            engine_key: "sk-secret".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_ai_create_sends_key_and_hides_it() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_ADMIN);
        let ai = Ai {
            identity: Identity::new(Uuid::new_v4(), customer_id),
            fields: fields(),
            ..Default::default()
        };
        mock.expect(
            QueueName::Ai.as_str(),
            RequestMethod::Post,
            "/v1/ais",
            json_response(&ai),
        );

        let res = handler.ai_create(&a, &fields()).await.unwrap();
        let json = serde_json::to_value(&res).unwrap();
        assert!(json.get("engine_key").is_none());
        assert_eq!(json["engine_model"], "gpt-4o");

        let calls = mock.calls();
        let body = calls[0].1.data.as_ref().unwrap();
        assert_eq!(body["customer_id"], customer_id.to_string());
        assert_eq!(body["engine_key"], "sk-secret");
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_ai_update_other_customer() {
        let (handler, mock) = testing::handler();
        let a = testing::agent(Uuid::new_v4(), Permission::CUSTOMER_ADMIN);
        let ai = Ai {
            identity: Identity::new(Uuid::new_v4(), Uuid::new_v4()),
            ..Default::default()
        };
        mock.expect(
            QueueName::Ai.as_str(),
            RequestMethod::Get,
            &format!("/v1/ais/{}", ai.identity.id),
            json_response(&ai),
        );

        let err = handler.ai_update(&a, ai.identity.id, &fields()).await.unwrap_err();
        assert!(err.is_forbidden());
        assert_eq!(mock.calls().len(), 1);
        mock.assert_done();
    }
}
