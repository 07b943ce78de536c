use crate::{QueueName, RequestHandler, RequestMethod, Result};
use models::address::Address;
use models::call::{Call, Groupcall, MediaDirection};
use models::filter::Filters;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

const RESOURCE_CALLS: &str = "call/calls";
const RESOURCE_GROUPCALLS: &str = "call/groupcalls";

/// Body of an outgoing call request.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CallCreate {
    pub customer_id: Uuid,
    pub flow_id: Uuid,
    pub master_call_id: Uuid,
    pub source: Address,
    pub destinations: Vec<Address>,
    pub early_execution: bool,
    pub connect: bool,
}

/// Dialing one destination may produce a plain call, dialing an agent or a
/// ring-all target produces group calls.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CallsCreateResponse {
    #[serde(default)]
    pub calls: Vec<Call>,
    #[serde(default)]
    pub groupcalls: Vec<Groupcall>,
}

impl RequestHandler {
    pub async fn call_v1_call_create(&self, req: &CallCreate) -> Result<CallsCreateResponse> {
        self.request(
            QueueName::Call.as_str(),
            "/v1/calls",
            RequestMethod::Post,
            RESOURCE_CALLS,
            Some(serde_json::to_value(req)?),
        )
        .await
    }

    pub async fn call_v1_call_get(&self, call_id: Uuid) -> Result<Call> {
        self.request(
            QueueName::Call.as_str(),
            &format!("/v1/calls/{call_id}"),
            RequestMethod::Get,
            RESOURCE_CALLS,
            None,
        )
        .await
    }

    pub async fn call_v1_call_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Call>> {
        self.request_list(QueueName::Call, "/v1/calls", RESOURCE_CALLS, token, size, filters)
            .await
    }

    pub async fn call_v1_call_delete(&self, call_id: Uuid) -> Result<Call> {
        self.request(
            QueueName::Call.as_str(),
            &format!("/v1/calls/{call_id}"),
            RequestMethod::Delete,
            RESOURCE_CALLS,
            None,
        )
        .await
    }

    pub async fn call_v1_call_hangup(&self, call_id: Uuid) -> Result<Call> {
        self.request(
            QueueName::Call.as_str(),
            &format!("/v1/calls/{call_id}/hangup"),
            RequestMethod::Post,
            RESOURCE_CALLS,
            None,
        )
        .await
    }

    pub async fn call_v1_call_talk(
        &self,
        call_id: Uuid,
        text: &str,
        gender: &str,
        language: &str,
    ) -> Result<()> {
        self.request_unit(
            QueueName::Call.as_str(),
            &format!("/v1/calls/{call_id}/talk"),
            RequestMethod::Post,
            RESOURCE_CALLS,
            Some(json!({"text": text, "gender": gender, "language": language})),
        )
        .await
    }

    /// POST turns `feature` on, DELETE turns it off.
    async fn call_toggle(
        &self,
        call_id: Uuid,
        feature: &str,
        on: bool,
        direction: Option<MediaDirection>,
    ) -> Result<()> {
        let method = if on {
            RequestMethod::Post
        } else {
            RequestMethod::Delete
        };
        let data = direction.map(|d| json!({ "direction": d }));
        self.request_unit(
            QueueName::Call.as_str(),
            &format!("/v1/calls/{call_id}/{feature}"),
            method,
            RESOURCE_CALLS,
            data,
        )
        .await
    }

    pub async fn call_v1_call_hold_on(&self, call_id: Uuid) -> Result<()> {
        self.call_toggle(call_id, "hold", true, None).await
    }

    pub async fn call_v1_call_hold_off(&self, call_id: Uuid) -> Result<()> {
        self.call_toggle(call_id, "hold", false, None).await
    }

    pub async fn call_v1_call_mute_on(&self, call_id: Uuid, direction: MediaDirection) -> Result<()> {
        self.call_toggle(call_id, "mute", true, Some(direction)).await
    }

    pub async fn call_v1_call_mute_off(&self, call_id: Uuid, direction: MediaDirection) -> Result<()> {
        self.call_toggle(call_id, "mute", false, Some(direction))
            .await
    }

    pub async fn call_v1_call_moh_on(&self, call_id: Uuid) -> Result<()> {
        self.call_toggle(call_id, "moh", true, None).await
    }

    pub async fn call_v1_call_moh_off(&self, call_id: Uuid) -> Result<()> {
        self.call_toggle(call_id, "moh", false, None).await
    }

    pub async fn call_v1_call_silence_on(&self, call_id: Uuid) -> Result<()> {
        self.call_toggle(call_id, "silence", true, None).await
    }

    pub async fn call_v1_call_silence_off(&self, call_id: Uuid) -> Result<()> {
        self.call_toggle(call_id, "silence", false, None).await
    }

    pub async fn call_v1_call_recording_start(
        &self,
        call_id: Uuid,
        format: &str,
        end_of_silence: u32,
        end_of_key: &str,
        duration: u32,
    ) -> Result<Call> {
        self.request(
            QueueName::Call.as_str(),
            &format!("/v1/calls/{call_id}/recording_start"),
            RequestMethod::Post,
            RESOURCE_CALLS,
            Some(json!({
                "format": format,
                "end_of_silence": end_of_silence,
                "end_of_key": end_of_key,
                "duration": duration,
            })),
        )
        .await
    }

    pub async fn call_v1_call_recording_stop(&self, call_id: Uuid) -> Result<Call> {
        self.request(
            QueueName::Call.as_str(),
            &format!("/v1/calls/{call_id}/recording_stop"),
            RequestMethod::Post,
            RESOURCE_CALLS,
            None,
        )
        .await
    }

    pub async fn call_v1_groupcall_get(&self, groupcall_id: Uuid) -> Result<Groupcall> {
        self.request(
            QueueName::Call.as_str(),
            &format!("/v1/groupcalls/{groupcall_id}"),
            RequestMethod::Get,
            RESOURCE_GROUPCALLS,
            None,
        )
        .await
    }

    pub async fn call_v1_groupcall_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Groupcall>> {
        self.request_list(
            QueueName::Call,
            "/v1/groupcalls",
            RESOURCE_GROUPCALLS,
            token,
            size,
            filters,
        )
        .await
    }

    pub async fn call_v1_groupcall_hangup(&self, groupcall_id: Uuid) -> Result<Groupcall> {
        self.request(
            QueueName::Call.as_str(),
            &format!("/v1/groupcalls/{groupcall_id}/hangup"),
            RequestMethod::Post,
            RESOURCE_GROUPCALLS,
            None,
        )
        .await
    }

    pub async fn call_v1_groupcall_delete(&self, groupcall_id: Uuid) -> Result<Groupcall> {
        self.request(
            QueueName::Call.as_str(),
            &format!("/v1/groupcalls/{groupcall_id}"),
            RequestMethod::Delete,
            RESOURCE_GROUPCALLS,
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
    async fn test_toggles_use_post_and_delete() {
        let id = Uuid::parse_str("f2e1f5a0-9c3b-11ed-8f5b-4b2c3b0e1c7a").unwrap();
        let uri = format!("/v1/calls/{id}/mute");

        let mock = Arc::new(MockSock::new());
        mock.expect_with_body(
            QueueName::Call.as_str(),
            RequestMethod::Post,
            &uri,
            json!({"direction": "in"}),
            status_response(200),
        );
        mock.expect_with_body(
            QueueName::Call.as_str(),
            RequestMethod::Delete,
            &uri,
            json!({"direction": "in"}),
            status_response(200),
        );
        mock.expect(
            QueueName::Call.as_str(),
            RequestMethod::Post,
            &format!("/v1/calls/{id}/hold"),
            status_response(200),
        );

        let handler = RequestHandler::new(mock.clone(), "api-manager");
        handler.call_v1_call_mute_on(id, MediaDirection::In).await.unwrap();
        handler.call_v1_call_mute_off(id, MediaDirection::In).await.unwrap();
        handler.call_v1_call_hold_on(id).await.unwrap();
        mock.assert_done();

        assert!(mock.calls()[2].1.data.is_none());
    }
}
