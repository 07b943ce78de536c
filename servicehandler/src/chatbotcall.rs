use crate::permission::{MANAGER_MASK, ensure_permission};
use crate::{RawFilters, Result, ServiceHandler, convert_list, customer_filters, fetch_authorized};
use models::agent::Agent;
use models::chatbotcall::{Chatbotcall, ChatbotcallWebhookMessage};
use models::WebhookConvert;
use uuid::Uuid;

impl ServiceHandler {
    async fn chatbotcall_get_authorized(&self, a: &Agent, chatbotcall_id: Uuid) -> Result<Chatbotcall> {
        fetch_authorized(a, MANAGER_MASK, self.req.chatbot_v1_chatbotcall_get(chatbotcall_id)).await
    }

    pub async fn chatbotcall_get(&self, a: &Agent, chatbotcall_id: Uuid) -> Result<ChatbotcallWebhookMessage> {
        let res = self.chatbotcall_get_authorized(a, chatbotcall_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn chatbotcall_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<ChatbotcallWebhookMessage>> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let filters = customer_filters::<Chatbotcall>(a, filters)?;
        let res = self
            .req
            .chatbot_v1_chatbotcall_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn chatbotcall_delete(
        &self,
        a: &Agent,
        chatbotcall_id: Uuid,
    ) -> Result<ChatbotcallWebhookMessage> {
        self.chatbotcall_get_authorized(a, chatbotcall_id).await?;

        let res = self.req.chatbot_v1_chatbotcall_delete(chatbotcall_id).await?;
        Ok(res.convert_webhook_message())
    }
}

#[cfg(test)]
mod tests {
    use crate::testing;
    use models::agent::Permission;
    use models::chatbotcall::{Chatbotcall, ChatbotcallStatus};
    use models::Identity;
    use requesthandler::testutils::json_response;
    use requesthandler::{QueueName, RequestMethod};
    use serde_json::json;
    use std::collections::HashMap;
    use uuid::Uuid;

    fn chatbotcall(customer_id: Uuid) -> Chatbotcall {
        Chatbotcall {
            identity: Identity::new(Uuid::new_v4(), customer_id),
            chatbot_id: Uuid::new_v4(),
            confbridge_id: Uuid::new_v4(),
            transcribe_id: Uuid::new_v4(),
            status: ChatbotcallStatus::Progressing,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_chatbotcall_get_hides_media_ids() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_ADMIN);
        let cc = chatbotcall(customer_id);
        mock.expect(
            QueueName::Chatbot.as_str(),
            RequestMethod::Get,
            &format!("/v1/chatbotcalls/{}", cc.identity.id),
            json_response(&cc),
        );

        let res = handler.chatbotcall_get(&a, cc.identity.id).await.unwrap();
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["status"], "progressing");
        assert!(json.get("confbridge_id").is_none());
        assert!(json.get("transcribe_id").is_none());
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_chatbotcall_delete_other_customer() {
        let (handler, mock) = testing::handler();
        let a = testing::agent(Uuid::new_v4(), Permission::CUSTOMER_ADMIN);
        let cc = chatbotcall(Uuid::new_v4());
        mock.expect(
            QueueName::Chatbot.as_str(),
            RequestMethod::Get,
            &format!("/v1/chatbotcalls/{}", cc.identity.id),
            json_response(&cc),
        );

        let err = handler.chatbotcall_delete(&a, cc.identity.id).await.unwrap_err();
        assert!(err.is_forbidden());
        assert_eq!(mock.calls().len(), 1);
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_chatbotcall_list() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_MANAGER);
        mock.expect_with_body(
            QueueName::Chatbot.as_str(),
            RequestMethod::Get,
            &format!("/v1/chatbotcalls?page_token={}&page_size=10", testing::now_token_escaped()),
            json!({"customer_id": customer_id, "deleted": false}),
            json_response(&vec![chatbotcall(customer_id)]),
        );

        let res = handler.chatbotcall_list(&a, 10, "", &HashMap::new()).await.unwrap();
        assert_eq!(res.len(), 1);
        mock.assert_done();
    }
}
