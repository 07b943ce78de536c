use crate::{QueueName, RequestHandler, RequestMethod, Result};
use models::ai::{Ai, AiFields};
use models::filter::Filters;
use serde::Serialize;
use uuid::Uuid;

const RESOURCE: &str = "ai/ais";

#[derive(Serialize)]
struct AiCreate<'a> {
    customer_id: Uuid,
    #[serde(flatten)]
    fields: &'a AiFields,
}

impl RequestHandler {
    pub async fn ai_v1_ai_create(&self, customer_id: Uuid, fields: &AiFields) -> Result<Ai> {
        let body = AiCreate {
            customer_id,
            fields,
        };
        self.request(
            QueueName::Ai.as_str(),
            "/v1/ais",
            RequestMethod::Post,
            RESOURCE,
            Some(serde_json::to_value(&body)?),
        )
        .await
    }

    pub async fn ai_v1_ai_get(&self, ai_id: Uuid) -> Result<Ai> {
        self.request(
            QueueName::Ai.as_str(),
            &format!("/v1/ais/{ai_id}"),
            RequestMethod::Get,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn ai_v1_ai_list(&self, token: &str, size: u64, filters: &Filters) -> Result<Vec<Ai>> {
        self.request_list(QueueName::Ai, "/v1/ais", RESOURCE, token, size, filters)
            .await
    }

    pub async fn ai_v1_ai_update(&self, ai_id: Uuid, fields: &AiFields) -> Result<Ai> {
        self.request(
            QueueName::Ai.as_str(),
            &format!("/v1/ais/{ai_id}"),
            RequestMethod::Put,
            RESOURCE,
            Some(serde_json::to_value(fields)?),
        )
        .await
    }

    pub async fn ai_v1_ai_delete(&self, ai_id: Uuid) -> Result<Ai> {
        self.request(
            QueueName::Ai.as_str(),
            &format!("/v1/ais/{ai_id}"),
            RequestMethod::Delete,
            RESOURCE,
            None,
        )
        .await
    }
}
