use crate::{QueueName, RequestHandler, RequestMethod, Result};
use models::activeflow::{Activeflow, ReferenceType};
use models::filter::Filters;
use serde_json::json;
use uuid::Uuid;

const RESOURCE: &str = "flow/activeflows";

impl RequestHandler {
    /// Registers an activeflow. It does not run until [`Self::flow_v1_activeflow_execute`].
    pub async fn flow_v1_activeflow_create(
        &self,
        activeflow_id: Uuid,
        customer_id: Uuid,
        flow_id: Uuid,
        reference_type: ReferenceType,
        reference_id: Uuid,
    ) -> Result<Activeflow> {
        self.request(
            QueueName::Flow.as_str(),
            "/v1/activeflows",
            RequestMethod::Post,
            RESOURCE,
            Some(json!({
                "id": activeflow_id,
                "customer_id": customer_id,
                "flow_id": flow_id,
                "reference_type": reference_type,
                "reference_id": reference_id,
            })),
        )
        .await
    }

    pub async fn flow_v1_activeflow_get(&self, activeflow_id: Uuid) -> Result<Activeflow> {
        self.request(
            QueueName::Flow.as_str(),
            &format!("/v1/activeflows/{activeflow_id}"),
            RequestMethod::Get,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn flow_v1_activeflow_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Activeflow>> {
        self.request_list(
            QueueName::Flow,
            "/v1/activeflows",
            RESOURCE,
            token,
            size,
            filters,
        )
        .await
    }

    pub async fn flow_v1_activeflow_execute(&self, activeflow_id: Uuid) -> Result<()> {
        self.request_unit(
            QueueName::Flow.as_str(),
            &format!("/v1/activeflows/{activeflow_id}/execute"),
            RequestMethod::Post,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn flow_v1_activeflow_stop(&self, activeflow_id: Uuid) -> Result<Activeflow> {
        self.request(
            QueueName::Flow.as_str(),
            &format!("/v1/activeflows/{activeflow_id}/stop"),
            RequestMethod::Post,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn flow_v1_activeflow_delete(&self, activeflow_id: Uuid) -> Result<Activeflow> {
        self.request(
            QueueName::Flow.as_str(),
            &format!("/v1/activeflows/{activeflow_id}"),
            RequestMethod::Delete,
            RESOURCE,
            None,
        )
        .await
    }
}
