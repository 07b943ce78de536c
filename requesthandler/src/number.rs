use crate::{QueueName, RequestHandler, RequestMethod, Result};
use chrono::{DateTime, Utc};
use models::filter::Filters;
use models::number::Number;
use serde_json::json;
use uuid::Uuid;

const RESOURCE: &str = "number/numbers";

impl RequestHandler {
    pub async fn number_v1_number_create(
        &self,
        customer_id: Uuid,
        number: &str,
        call_flow_id: Uuid,
        message_flow_id: Uuid,
        name: &str,
        detail: &str,
    ) -> Result<Number> {
        self.request(
            QueueName::Number.as_str(),
            "/v1/numbers",
            RequestMethod::Post,
            RESOURCE,
            Some(json!({
                "customer_id": customer_id,
                "number": number,
                "call_flow_id": call_flow_id,
                "message_flow_id": message_flow_id,
                "name": name,
                "detail": detail,
            })),
        )
        .await
    }

    pub async fn number_v1_number_get(&self, number_id: Uuid) -> Result<Number> {
        self.request(
            QueueName::Number.as_str(),
            &format!("/v1/numbers/{number_id}"),
            RequestMethod::Get,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn number_v1_number_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Number>> {
        self.request_list(QueueName::Number, "/v1/numbers", RESOURCE, token, size, filters)
            .await
    }

    pub async fn number_v1_number_update(
        &self,
        number_id: Uuid,
        call_flow_id: Uuid,
        message_flow_id: Uuid,
        name: &str,
        detail: &str,
    ) -> Result<Number> {
        self.request(
            QueueName::Number.as_str(),
            &format!("/v1/numbers/{number_id}"),
            RequestMethod::Put,
            RESOURCE,
            Some(json!({
                "call_flow_id": call_flow_id,
                "message_flow_id": message_flow_id,
                "name": name,
                "detail": detail,
            })),
        )
        .await
    }

    pub async fn number_v1_number_delete(&self, number_id: Uuid) -> Result<Number> {
        self.request(
            QueueName::Number.as_str(),
            &format!("/v1/numbers/{number_id}"),
            RequestMethod::Delete,
            RESOURCE,
            None,
        )
        .await
    }

    /// Renews every number whose renewal time is before `tm_renew`.
    pub async fn number_v1_number_renew_by_tm_renew(&self, tm_renew: DateTime<Utc>) -> Result<Vec<Number>> {
        self.request(
            QueueName::Number.as_str(),
            "/v1/numbers/renew",
            RequestMethod::Post,
            RESOURCE,
            Some(json!({ "tm_renew": tm_renew })),
        )
        .await
    }
}
