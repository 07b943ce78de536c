use crate::{QueueName, RequestHandler, RequestMethod, Result};
use models::filter::Filters;
use models::flow::{Action, Flow, FlowType};
use serde_json::json;
use uuid::Uuid;

const RESOURCE: &str = "flow/flows";

impl RequestHandler {
    /// Flows created with `persist == false` live only as long as the call using them.
    #[allow(clippy::too_many_arguments)]
    pub async fn flow_v1_flow_create(
        &self,
        customer_id: Uuid,
        kind: FlowType,
        name: &str,
        detail: &str,
        actions: &[Action],
        on_complete_flow_id: Uuid,
        persist: bool,
    ) -> Result<Flow> {
        self.request(
            QueueName::Flow.as_str(),
            "/v1/flows",
            RequestMethod::Post,
            RESOURCE,
            Some(json!({
                "customer_id": customer_id,
                "type": kind,
                "name": name,
                "detail": detail,
                "actions": actions,
                "on_complete_flow_id": on_complete_flow_id,
                "persist": persist,
            })),
        )
        .await
    }

    pub async fn flow_v1_flow_get(&self, flow_id: Uuid) -> Result<Flow> {
        self.request(
            QueueName::Flow.as_str(),
            &format!("/v1/flows/{flow_id}"),
            RequestMethod::Get,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn flow_v1_flow_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Flow>> {
        self.request_list(QueueName::Flow, "/v1/flows", RESOURCE, token, size, filters)
            .await
    }

    pub async fn flow_v1_flow_update(
        &self,
        flow_id: Uuid,
        name: &str,
        detail: &str,
        actions: &[Action],
        on_complete_flow_id: Uuid,
    ) -> Result<Flow> {
        self.request(
            QueueName::Flow.as_str(),
            &format!("/v1/flows/{flow_id}"),
            RequestMethod::Put,
            RESOURCE,
            Some(json!({
                "name": name,
                "detail": detail,
                "actions": actions,
                "on_complete_flow_id": on_complete_flow_id,
            })),
        )
        .await
    }

    pub async fn flow_v1_flow_update_actions(&self, flow_id: Uuid, actions: &[Action]) -> Result<Flow> {
        self.request(
            QueueName::Flow.as_str(),
            &format!("/v1/flows/{flow_id}/actions"),
            RequestMethod::Put,
            RESOURCE,
            Some(json!({ "actions": actions })),
        )
        .await
    }

    pub async fn flow_v1_flow_delete(&self, flow_id: Uuid) -> Result<Flow> {
        self.request(
            QueueName::Flow.as_str(),
            &format!("/v1/flows/{flow_id}"),
            RequestMethod::Delete,
            RESOURCE,
            None,
        )
        .await
    }
}
