use crate::{QueueName, RequestHandler, RequestMethod, Result};
use models::conference::{Conference, ConferenceType};
use models::filter::Filters;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

const RESOURCE: &str = "conference/conferences";

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ConferenceCreate {
    pub customer_id: Uuid,
    #[serde(rename = "type")]
    pub kind: ConferenceType,
    pub name: String,
    pub detail: String,
    pub data: serde_json::Map<String, serde_json::Value>,
    pub timeout: i32,
    pub pre_flow_id: Uuid,
    pub post_flow_id: Uuid,
}

impl RequestHandler {
    pub async fn conference_v1_conference_create(&self, req: &ConferenceCreate) -> Result<Conference> {
        self.request(
            QueueName::Conference.as_str(),
            "/v1/conferences",
            RequestMethod::Post,
            RESOURCE,
            Some(serde_json::to_value(req)?),
        )
        .await
    }

    pub async fn conference_v1_conference_get(&self, conference_id: Uuid) -> Result<Conference> {
        self.request(
            QueueName::Conference.as_str(),
            &format!("/v1/conferences/{conference_id}"),
            RequestMethod::Get,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn conference_v1_conference_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Conference>> {
        self.request_list(
            QueueName::Conference,
            "/v1/conferences",
            RESOURCE,
            token,
            size,
            filters,
        )
        .await
    }

    pub async fn conference_v1_conference_delete(&self, conference_id: Uuid) -> Result<Conference> {
        self.request(
            QueueName::Conference.as_str(),
            &format!("/v1/conferences/{conference_id}"),
            RequestMethod::Delete,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn conference_v1_conference_update(
        &self,
        conference_id: Uuid,
        name: &str,
        detail: &str,
        timeout: i32,
        pre_flow_id: Uuid,
        post_flow_id: Uuid,
    ) -> Result<Conference> {
        self.request(
            QueueName::Conference.as_str(),
            &format!("/v1/conferences/{conference_id}"),
            RequestMethod::Put,
            RESOURCE,
            Some(json!({
                "name": name,
                "detail": detail,
                "timeout": timeout,
                "pre_flow_id": pre_flow_id,
                "post_flow_id": post_flow_id,
            })),
        )
        .await
    }

    pub async fn conference_v1_conference_recording_start(
        &self,
        conference_id: Uuid,
        format: &str,
        duration: u32,
    ) -> Result<Conference> {
        self.request(
            QueueName::Conference.as_str(),
            &format!("/v1/conferences/{conference_id}/recording_start"),
            RequestMethod::Post,
            RESOURCE,
            Some(json!({"format": format, "duration": duration})),
        )
        .await
    }

    pub async fn conference_v1_conference_recording_stop(&self, conference_id: Uuid) -> Result<Conference> {
        self.request(
            QueueName::Conference.as_str(),
            &format!("/v1/conferences/{conference_id}/recording_stop"),
            RequestMethod::Post,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn conference_v1_conference_transcribe_start(
        &self,
        conference_id: Uuid,
        language: &str,
    ) -> Result<Conference> {
        self.request(
            QueueName::Conference.as_str(),
            &format!("/v1/conferences/{conference_id}/transcribe_start"),
            RequestMethod::Post,
            RESOURCE,
            Some(json!({ "language": language })),
        )
        .await
    }

    pub async fn conference_v1_conference_transcribe_stop(&self, conference_id: Uuid) -> Result<Conference> {
        self.request(
            QueueName::Conference.as_str(),
            &format!("/v1/conferences/{conference_id}/transcribe_stop"),
            RequestMethod::Post,
            RESOURCE,
            None,
        )
        .await
    }
}
