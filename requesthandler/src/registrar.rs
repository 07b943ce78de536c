use crate::{QueueName, RequestHandler, RequestMethod, Result};
use models::filter::Filters;
use models::registrar::Extension;
use serde_json::json;
use uuid::Uuid;

const RESOURCE: &str = "registrar/extensions";

impl RequestHandler {
    pub async fn registrar_v1_extension_create(
        &self,
        customer_id: Uuid,
        extension: &str,
        password: &str,
        name: &str,
        detail: &str,
    ) -> Result<Extension> {
        self.request(
            QueueName::Registrar.as_str(),
            "/v1/extensions",
            RequestMethod::Post,
            RESOURCE,
            Some(json!({
                "customer_id": customer_id,
                "extension": extension,
                "password": password,
                "name": name,
                "detail": detail,
            })),
        )
        .await
    }

    pub async fn registrar_v1_extension_get(&self, extension_id: Uuid) -> Result<Extension> {
        self.request(
            QueueName::Registrar.as_str(),
            &format!("/v1/extensions/{extension_id}"),
            RequestMethod::Get,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn registrar_v1_extension_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Extension>> {
        self.request_list(
            QueueName::Registrar,
            "/v1/extensions",
            RESOURCE,
            token,
            size,
            filters,
        )
        .await
    }

    pub async fn registrar_v1_extension_update(
        &self,
        extension_id: Uuid,
        name: &str,
        detail: &str,
        password: &str,
    ) -> Result<Extension> {
        self.request(
            QueueName::Registrar.as_str(),
            &format!("/v1/extensions/{extension_id}"),
            RequestMethod::Put,
            RESOURCE,
            Some(json!({"name": name, "detail": detail, "password": password})),
        )
        .await
    }

    pub async fn registrar_v1_extension_delete(&self, extension_id: Uuid) -> Result<Extension> {
        self.request(
            QueueName::Registrar.as_str(),
            &format!("/v1/extensions/{extension_id}"),
            RequestMethod::Delete,
            RESOURCE,
            None,
        )
        .await
    }
}
