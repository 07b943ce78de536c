use crate::permission::{MANAGER_MASK, ensure_permission};
use crate::{RawFilters, Result, ServiceHandler, convert_list, customer_filters, fetch_authorized};
use models::agent::Agent;
use models::chatbot::{Chatbot, ChatbotWebhookMessage};
use models::WebhookConvert;
use requesthandler::chatbot::ChatbotFields;
use uuid::Uuid;

impl ServiceHandler {
    async fn chatbot_get_authorized(&self, a: &Agent, chatbot_id: Uuid) -> Result<Chatbot> {
        fetch_authorized(a, MANAGER_MASK, self.req.chatbot_v1_chatbot_get(chatbot_id)).await
    }

    pub async fn chatbot_create(&self, a: &Agent, fields: &ChatbotFields) -> Result<ChatbotWebhookMessage> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let res = self.req.chatbot_v1_chatbot_create(a.customer_id(), fields).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn chatbot_get(&self, a: &Agent, chatbot_id: Uuid) -> Result<ChatbotWebhookMessage> {
        let res = self.chatbot_get_authorized(a, chatbot_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn chatbot_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<ChatbotWebhookMessage>> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let filters = customer_filters::<Chatbot>(a, filters)?;
        let res = self
            .req
            .chatbot_v1_chatbot_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn chatbot_delete(&self, a: &Agent, chatbot_id: Uuid) -> Result<ChatbotWebhookMessage> {
        self.chatbot_get_authorized(a, chatbot_id).await?;

        let res = self.req.chatbot_v1_chatbot_delete(chatbot_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn chatbot_update(
        &self,
        a: &Agent,
        chatbot_id: Uuid,
        fields: &ChatbotFields,
    ) -> Result<ChatbotWebhookMessage> {
        self.chatbot_get_authorized(a, chatbot_id).await?;

        let res = self.req.chatbot_v1_chatbot_update(chatbot_id, fields).await?;
        Ok(res.convert_webhook_message())
    }
}

#[cfg(test)]
mod tests {
    use crate::testing;
    use models::agent::Permission;
    use models::chatbot::Chatbot;
    use models::Identity;
    use requesthandler::chatbot::ChatbotFields;
    use requesthandler::testutils::json_response;
    use requesthandler::{QueueName, RequestMethod};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_chatbot_create_hides_credential() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_ADMIN);
        let chatbot = Chatbot {
            identity: Identity::new(Uuid::new_v4(), customer_id),
            name: "support".into(),
            credential_base64: "c2VjcmV0".into(),
            ..Default::default()
        };
        mock.expect(
            QueueName::Chatbot.as_str(),
            RequestMethod::Post,
            "/v1/chatbots",
            json_response(&chatbot),
        );

        let fields = ChatbotFields {
            name: "support".into(),
            credential_base64: "c2VjcmV0".into(),
            ..Default::default()
        };
        let res = handler.chatbot_create(&a, &fields).await.unwrap();
        let json = serde_json::to_value(&res).unwrap();
        assert!(json.get("credential_base64").is_none());
        assert_eq!(json["name"], "support");

        let calls = mock.calls();
        assert_eq!(calls[0].1.data.as_ref().unwrap()["customer_id"], customer_id.to_string());
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_chatbot_create_plain_agent_denied() {
        let (handler, mock) = testing::handler();
        let a = testing::agent(Uuid::new_v4(), Permission::CUSTOMER_AGENT);

        let err = handler
            .chatbot_create(&a, &ChatbotFields::default())
            .await
            .unwrap_err();
        assert!(err.is_forbidden());
        assert!(mock.calls().is_empty());
    }
}
