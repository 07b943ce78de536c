use crate::{QueueName, RequestHandler, RequestMethod, Result};
use models::filter::Filters;
use models::route::Route;
use serde_json::json;
use uuid::Uuid;

const RESOURCE: &str = "route/routes";

impl RequestHandler {
    pub async fn route_v1_route_create(
        &self,
        customer_id: Uuid,
        name: &str,
        detail: &str,
        provider_id: Uuid,
        priority: i32,
        target: &str,
    ) -> Result<Route> {
        self.request(
            QueueName::Route.as_str(),
            "/v1/routes",
            RequestMethod::Post,
            RESOURCE,
            Some(json!({
                "customer_id": customer_id,
                "name": name,
                "detail": detail,
                "provider_id": provider_id,
                "priority": priority,
                "target": target,
            })),
        )
        .await
    }

    pub async fn route_v1_route_get(&self, route_id: Uuid) -> Result<Route> {
        self.request(
            QueueName::Route.as_str(),
            &format!("/v1/routes/{route_id}"),
            RequestMethod::Get,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn route_v1_route_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Route>> {
        self.request_list(QueueName::Route, "/v1/routes", RESOURCE, token, size, filters)
            .await
    }

    pub async fn route_v1_route_update(
        &self,
        route_id: Uuid,
        name: &str,
        detail: &str,
        provider_id: Uuid,
        priority: i32,
        target: &str,
    ) -> Result<Route> {
        self.request(
            QueueName::Route.as_str(),
            &format!("/v1/routes/{route_id}"),
            RequestMethod::Put,
            RESOURCE,
            Some(json!({
                "name": name,
                "detail": detail,
                "provider_id": provider_id,
                "priority": priority,
                "target": target,
            })),
        )
        .await
    }

    pub async fn route_v1_route_delete(&self, route_id: Uuid) -> Result<Route> {
        self.request(
            QueueName::Route.as_str(),
            &format!("/v1/routes/{route_id}"),
            RequestMethod::Delete,
            RESOURCE,
            None,
        )
        .await
    }
}
