use crate::{QueueName, RequestHandler, RequestMethod, Result};
use models::filter::Filters;
use models::provider::{Provider, ProviderFields};
use uuid::Uuid;

const RESOURCE: &str = "route/providers";

impl RequestHandler {
    pub async fn route_v1_provider_create(&self, fields: &ProviderFields) -> Result<Provider> {
        self.request(
            QueueName::Route.as_str(),
            "/v1/providers",
            RequestMethod::Post,
            RESOURCE,
            Some(serde_json::to_value(fields)?),
        )
        .await
    }

    pub async fn route_v1_provider_get(&self, provider_id: Uuid) -> Result<Provider> {
        self.request(
            QueueName::Route.as_str(),
            &format!("/v1/providers/{provider_id}"),
            RequestMethod::Get,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn route_v1_provider_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Provider>> {
        self.request_list(
            QueueName::Route,
            "/v1/providers",
            RESOURCE,
            token,
            size,
            filters,
        )
        .await
    }

    pub async fn route_v1_provider_update(
        &self,
        provider_id: Uuid,
        fields: &ProviderFields,
    ) -> Result<Provider> {
        self.request(
            QueueName::Route.as_str(),
            &format!("/v1/providers/{provider_id}"),
            RequestMethod::Put,
            RESOURCE,
            Some(serde_json::to_value(fields)?),
        )
        .await
    }

    pub async fn route_v1_provider_delete(&self, provider_id: Uuid) -> Result<Provider> {
        self.request(
            QueueName::Route.as_str(),
            &format!("/v1/providers/{provider_id}"),
            RequestMethod::Delete,
            RESOURCE,
            None,
        )
        .await
    }
}
