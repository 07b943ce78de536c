use crate::permission::ensure_super_admin;
use crate::{RawFilters, Result, ServiceHandler, convert_list, fetch};
use models::agent::Agent;
use models::filter::{FIELD_DELETED, convert_filters};
use models::route::Route;
use models::WebhookConvert;
use serde_json::json;
use uuid::Uuid;

// Outbound routes are platform configuration. Only super admins manage them.
impl ServiceHandler {
    #[allow(clippy::too_many_arguments)]
    pub async fn route_create(
        &self,
        a: &Agent,
        customer_id: Uuid,
        name: &str,
        detail: &str,
        provider_id: Uuid,
        priority: i32,
        target: &str,
    ) -> Result<Route> {
        ensure_super_admin(a)?;

        let res = self
            .req
            .route_v1_route_create(customer_id, name, detail, provider_id, priority, target)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn route_get(&self, a: &Agent, route_id: Uuid) -> Result<Route> {
        ensure_super_admin(a)?;

        let res = fetch(self.req.route_v1_route_get(route_id)).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn route_list(&self, a: &Agent, size: u64, token: &str, filters: &RawFilters) -> Result<Vec<Route>> {
        ensure_super_admin(a)?;

        let mut filters = convert_filters::<Route>(filters)?;
        filters
            .entry(FIELD_DELETED.to_string())
            .or_insert(json!(false));
        let res = self
            .req
            .route_v1_route_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn route_update(
        &self,
        a: &Agent,
        route_id: Uuid,
        name: &str,
        detail: &str,
        provider_id: Uuid,
        priority: i32,
        target: &str,
    ) -> Result<Route> {
        ensure_super_admin(a)?;
        fetch(self.req.route_v1_route_get(route_id)).await?;

        let res = self
            .req
            .route_v1_route_update(route_id, name, detail, provider_id, priority, target)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn route_delete(&self, a: &Agent, route_id: Uuid) -> Result<Route> {
        ensure_super_admin(a)?;
        fetch(self.req.route_v1_route_get(route_id)).await?;

        let res = self.req.route_v1_route_delete(route_id).await?;
        Ok(res.convert_webhook_message())
    }
}

#[cfg(test)]
mod tests {
    use crate::ServiceError;
    use crate::testing;
    use models::agent::Permission;
    use models::route::Route;
    use models::Identity;
    use requesthandler::testutils::json_response;
    use requesthandler::{QueueName, RequestMethod};
    use serde_json::json;
    use std::collections::HashMap;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_route_list_as_super_admin() {
        let (handler, mock) = testing::handler();
        let a = testing::agent(Uuid::new_v4(), Permission::PROJECT_SUPER_ADMIN);
        let customer_id = Uuid::new_v4();
        let route = Route {
            identity: Identity::new(Uuid::new_v4(), customer_id),
            priority: 1,
            target: "+82".into(),
            ..Default::default()
        };
        mock.expect_with_body(
            QueueName::Route.as_str(),
            RequestMethod::Get,
            &format!("/v1/routes?page_token={}&page_size=10", testing::now_token_escaped()),
            json!({"customer_id": customer_id, "deleted": false}),
            json_response(&vec![route.clone()]),
        );

        let filters = HashMap::from([("customer_id".to_string(), customer_id.to_string())]);
        let res = handler.route_list(&a, 10, "", &filters).await.unwrap();
        assert_eq!(res, vec![route]);
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_route_get_requires_super_admin() {
        let (handler, mock) = testing::handler();
        let a = testing::agent(Uuid::new_v4(), Permission::CUSTOMER_ALL);

        let err = handler.route_get(&a, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NoPermission));
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_route_delete_missing() {
        let (handler, mock) = testing::handler();
        let a = testing::agent(Uuid::new_v4(), Permission::PROJECT_SUPER_ADMIN);
        let route = Route {
            identity: Identity::new(Uuid::new_v4(), Uuid::new_v4()),
            tm_delete: testing::deleted_at(),
            ..Default::default()
        };
        mock.expect(
            QueueName::Route.as_str(),
            RequestMethod::Get,
            &format!("/v1/routes/{}", route.identity.id),
            json_response(&route),
        );

        let err = handler.route_delete(&a, route.identity.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound("route")));
        mock.assert_done();
    }
}
