use crate::{QueueName, RequestHandler, RequestMethod, Result};
use models::filter::Filters;
use models::queuecall::Queuecall;
use uuid::Uuid;

const RESOURCE: &str = "queue/queuecalls";

impl RequestHandler {
    pub async fn queue_v1_queuecall_get(&self, queuecall_id: Uuid) -> Result<Queuecall> {
        self.request(
            QueueName::Queue.as_str(),
            &format!("/v1/queuecalls/{queuecall_id}"),
            RequestMethod::Get,
            RESOURCE,
            None,
        )
        .await
    }

    /// Queuecall currently held for the call or conversation `reference_id`.
    pub async fn queue_v1_queuecall_get_by_reference_id(&self, reference_id: Uuid) -> Result<Queuecall> {
        self.request(
            QueueName::Queue.as_str(),
            &format!("/v1/queuecalls/reference_id/{reference_id}"),
            RequestMethod::Get,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn queue_v1_queuecall_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Queuecall>> {
        self.request_list(
            QueueName::Queue,
            "/v1/queuecalls",
            RESOURCE,
            token,
            size,
            filters,
        )
        .await
    }

    pub async fn queue_v1_queuecall_delete(&self, queuecall_id: Uuid) -> Result<Queuecall> {
        self.request(
            QueueName::Queue.as_str(),
            &format!("/v1/queuecalls/{queuecall_id}"),
            RequestMethod::Delete,
            RESOURCE,
            None,
        )
        .await
    }

    /// Removes the queuecall from its queue, the call continues with the next action.
    pub async fn queue_v1_queuecall_kick(&self, queuecall_id: Uuid) -> Result<Queuecall> {
        self.request(
            QueueName::Queue.as_str(),
            &format!("/v1/queuecalls/{queuecall_id}/kick"),
            RequestMethod::Post,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn queue_v1_queuecall_kick_by_reference_id(&self, reference_id: Uuid) -> Result<Queuecall> {
        self.request(
            QueueName::Queue.as_str(),
            &format!("/v1/queuecalls/reference_id/{reference_id}/kick"),
            RequestMethod::Post,
            RESOURCE,
            None,
        )
        .await
    }
}
