use crate::{QueueName, RequestHandler, RequestMethod, Result};
use models::chatbotcall::Chatbotcall;
use models::filter::Filters;
use uuid::Uuid;

const RESOURCE: &str = "chatbot/chatbotcalls";

impl RequestHandler {
    pub async fn chatbot_v1_chatbotcall_get(&self, chatbotcall_id: Uuid) -> Result<Chatbotcall> {
        self.request(
            QueueName::Chatbot.as_str(),
            &format!("/v1/chatbotcalls/{chatbotcall_id}"),
            RequestMethod::Get,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn chatbot_v1_chatbotcall_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Chatbotcall>> {
        self.request_list(
            QueueName::Chatbot,
            "/v1/chatbotcalls",
            RESOURCE,
            token,
            size,
            filters,
        )
        .await
    }

    pub async fn chatbot_v1_chatbotcall_delete(&self, chatbotcall_id: Uuid) -> Result<Chatbotcall> {
        self.request(
            QueueName::Chatbot.as_str(),
            &format!("/v1/chatbotcalls/{chatbotcall_id}"),
            RequestMethod::Delete,
            RESOURCE,
            None,
        )
        .await
    }
}
