use crate::{QueueName, RequestHandler, RequestMethod, Result};
use models::filter::Filters;
use models::tts::Speaking;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

const RESOURCE: &str = "tts/speakings";

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SpeakingCreate {
    pub customer_id: Uuid,
    pub reference_type: String,
    pub reference_id: Uuid,
    pub language: String,
    pub provider: String,
    pub voice_id: String,
    pub direction: String,
}

// Streaming commands go to the pod holding the session, everything else to the
// shared queue.
impl RequestHandler {
    pub async fn tts_v1_speaking_create(&self, req: &SpeakingCreate) -> Result<Speaking> {
        self.request(
            QueueName::Tts.as_str(),
            "/v1/speakings",
            RequestMethod::Post,
            RESOURCE,
            Some(serde_json::to_value(req)?),
        )
        .await
    }

    pub async fn tts_v1_speaking_get(&self, speaking_id: Uuid) -> Result<Speaking> {
        self.request(
            QueueName::Tts.as_str(),
            &format!("/v1/speakings/{speaking_id}"),
            RequestMethod::Get,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn tts_v1_speaking_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Speaking>> {
        self.request_list(QueueName::Tts, "/v1/speakings", RESOURCE, token, size, filters)
            .await
    }

    pub async fn tts_v1_speaking_say(&self, pod_id: &str, speaking_id: Uuid, text: &str) -> Result<()> {
        self.request_unit(
            &QueueName::Tts.pod(pod_id),
            &format!("/v1/speakings/{speaking_id}/say"),
            RequestMethod::Post,
            RESOURCE,
            Some(json!({ "text": text })),
        )
        .await
    }

    pub async fn tts_v1_speaking_flush(&self, pod_id: &str, speaking_id: Uuid) -> Result<()> {
        self.request_unit(
            &QueueName::Tts.pod(pod_id),
            &format!("/v1/speakings/{speaking_id}/flush"),
            RequestMethod::Post,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn tts_v1_speaking_stop(&self, pod_id: &str, speaking_id: Uuid) -> Result<()> {
        self.request_unit(
            &QueueName::Tts.pod(pod_id),
            &format!("/v1/speakings/{speaking_id}/stop"),
            RequestMethod::Post,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn tts_v1_speaking_delete(&self, speaking_id: Uuid) -> Result<Speaking> {
        self.request(
            QueueName::Tts.as_str(),
            &format!("/v1/speakings/{speaking_id}"),
            RequestMethod::Delete,
            RESOURCE,
            None,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::{MockSock, status_response};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_say_targets_pod_queue() {
        let id = Uuid::parse_str("3a9d4e2c-4c6a-11f0-9a51-3f0c6e8a7b12").unwrap();

        let mock = Arc::new(MockSock::new());
        mock.expect_with_body(
            "bin-manager.tts-manager.request.tts-manager-6c9f-2xk4p",
            RequestMethod::Post,
            &format!("/v1/speakings/{id}/say"),
            json!({"text": "hello"}),
            status_response(200),
        );

        let handler = RequestHandler::new(mock.clone(), "api-manager");
        handler
            .tts_v1_speaking_say("tts-manager-6c9f-2xk4p", id, "hello")
            .await
            .unwrap();
        mock.assert_done();
    }
}
