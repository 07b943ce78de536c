use crate::{QueueName, RequestHandler, RequestMethod, Result};
use models::chatbot::{Chatbot, EngineType};
use models::filter::Filters;
use serde::Serialize;
use uuid::Uuid;

const RESOURCE: &str = "chatbot/chatbots";

/// Fields shared by chatbot create and update requests.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ChatbotFields {
    pub name: String,
    pub detail: String,
    pub engine_type: EngineType,
    pub engine_model: String,
    pub init_prompt: String,
    pub credential_base64: String,
}

#[derive(Serialize)]
struct ChatbotCreate<'a> {
    customer_id: Uuid,
    #[serde(flatten)]
    fields: &'a ChatbotFields,
}

impl RequestHandler {
    pub async fn chatbot_v1_chatbot_create(
        &self,
        customer_id: Uuid,
        fields: &ChatbotFields,
    ) -> Result<Chatbot> {
        let body = ChatbotCreate {
            customer_id,
            fields,
        };
        self.request(
            QueueName::Chatbot.as_str(),
            "/v1/chatbots",
            RequestMethod::Post,
            RESOURCE,
            Some(serde_json::to_value(&body)?),
        )
        .await
    }

    pub async fn chatbot_v1_chatbot_get(&self, chatbot_id: Uuid) -> Result<Chatbot> {
        self.request(
            QueueName::Chatbot.as_str(),
            &format!("/v1/chatbots/{chatbot_id}"),
            RequestMethod::Get,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn chatbot_v1_chatbot_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Chatbot>> {
        self.request_list(
            QueueName::Chatbot,
            "/v1/chatbots",
            RESOURCE,
            token,
            size,
            filters,
        )
        .await
    }

    pub async fn chatbot_v1_chatbot_delete(&self, chatbot_id: Uuid) -> Result<Chatbot> {
        self.request(
            QueueName::Chatbot.as_str(),
            &format!("/v1/chatbots/{chatbot_id}"),
            RequestMethod::Delete,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn chatbot_v1_chatbot_update(
        &self,
        chatbot_id: Uuid,
        fields: &ChatbotFields,
    ) -> Result<Chatbot> {
        self.request(
            QueueName::Chatbot.as_str(),
            &format!("/v1/chatbots/{chatbot_id}"),
            RequestMethod::Put,
            RESOURCE,
            Some(serde_json::to_value(fields)?),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::{MockSock, json_response};
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_create_flattens_fields() {
        let customer_id = Uuid::parse_str("5e4a0680-804e-11ec-8477-2fea5968d85b").unwrap();
        let fields = ChatbotFields {
            name: "support".into(),
            engine_type: EngineType::Openai,
            engine_model: "gpt-4o".into(),
            ..Default::default()
        };

        let mock = Arc::new(MockSock::new());
        mock.expect_with_body(
            QueueName::Chatbot.as_str(),
            RequestMethod::Post,
            "/v1/chatbots",
            json!({
                "customer_id": "5e4a0680-804e-11ec-8477-2fea5968d85b",
                "name": "support",
                "detail": "",
                "engine_type": "openai",
                "engine_model": "gpt-4o",
                "init_prompt": "",
                "credential_base64": "",
            }),
            json_response(&Chatbot::default()),
        );

        let handler = RequestHandler::new(mock.clone(), "api-manager");
        handler
            .chatbot_v1_chatbot_create(customer_id, &fields)
            .await
            .unwrap();
        mock.assert_done();
    }
}
