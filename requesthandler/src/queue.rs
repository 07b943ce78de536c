use crate::{QueueName, RequestHandler, RequestMethod, Result};
use models::filter::Filters;
use models::flow::Action;
use models::queue::{Queue, RoutingMethod};
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

const RESOURCE: &str = "queue/queues";

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct QueueFields {
    pub name: String,
    pub detail: String,
    pub routing_method: RoutingMethod,
    pub tag_ids: Vec<Uuid>,
    pub wait_actions: Vec<Action>,
    pub wait_timeout: i32,
    pub service_timeout: i32,
}

#[derive(Serialize)]
struct QueueCreate<'a> {
    customer_id: Uuid,
    #[serde(flatten)]
    fields: &'a QueueFields,
}

impl RequestHandler {
    pub async fn queue_v1_queue_create(&self, customer_id: Uuid, fields: &QueueFields) -> Result<Queue> {
        let body = QueueCreate {
            customer_id,
            fields,
        };
        self.request(
            QueueName::Queue.as_str(),
            "/v1/queues",
            RequestMethod::Post,
            RESOURCE,
            Some(serde_json::to_value(&body)?),
        )
        .await
    }

    pub async fn queue_v1_queue_get(&self, queue_id: Uuid) -> Result<Queue> {
        self.request(
            QueueName::Queue.as_str(),
            &format!("/v1/queues/{queue_id}"),
            RequestMethod::Get,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn queue_v1_queue_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Queue>> {
        self.request_list(QueueName::Queue, "/v1/queues", RESOURCE, token, size, filters)
            .await
    }

    pub async fn queue_v1_queue_delete(&self, queue_id: Uuid) -> Result<Queue> {
        self.request(
            QueueName::Queue.as_str(),
            &format!("/v1/queues/{queue_id}"),
            RequestMethod::Delete,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn queue_v1_queue_update(&self, queue_id: Uuid, fields: &QueueFields) -> Result<Queue> {
        self.request(
            QueueName::Queue.as_str(),
            &format!("/v1/queues/{queue_id}"),
            RequestMethod::Put,
            RESOURCE,
            Some(serde_json::to_value(fields)?),
        )
        .await
    }

    pub async fn queue_v1_queue_update_tag_ids(&self, queue_id: Uuid, tag_ids: &[Uuid]) -> Result<Queue> {
        self.request(
            QueueName::Queue.as_str(),
            &format!("/v1/queues/{queue_id}/tag_ids"),
            RequestMethod::Put,
            RESOURCE,
            Some(json!({ "tag_ids": tag_ids })),
        )
        .await
    }

    pub async fn queue_v1_queue_update_routing_method(
        &self,
        queue_id: Uuid,
        routing_method: RoutingMethod,
    ) -> Result<Queue> {
        self.request(
            QueueName::Queue.as_str(),
            &format!("/v1/queues/{queue_id}/routing_method"),
            RequestMethod::Put,
            RESOURCE,
            Some(json!({ "routing_method": routing_method })),
        )
        .await
    }
}
