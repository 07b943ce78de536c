use crate::permission::ensure_super_admin;
use crate::{RawFilters, Result, ServiceHandler, convert_list, fetch};
use models::agent::Agent;
use models::filter::{FIELD_DELETED, convert_filters};
use models::provider::{Provider, ProviderFields};
use models::WebhookConvert;
use serde_json::json;
use uuid::Uuid;

/// Providers are shared by every customer, so each operation is limited to super admins.
impl ServiceHandler {
    pub async fn provider_create(&self, a: &Agent, fields: &ProviderFields) -> Result<Provider> {
        ensure_super_admin(a)?;

        let res = self.req.route_v1_provider_create(fields).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn provider_get(&self, a: &Agent, provider_id: Uuid) -> Result<Provider> {
        ensure_super_admin(a)?;

        let res = fetch(self.req.route_v1_provider_get(provider_id)).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn provider_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<Provider>> {
        ensure_super_admin(a)?;

        let mut filters = convert_filters::<Provider>(filters)?;
        filters
            .entry(FIELD_DELETED.to_string())
            .or_insert(json!(false));
        let res = self
            .req
            .route_v1_provider_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn provider_update(
        &self,
        a: &Agent,
        provider_id: Uuid,
        fields: &ProviderFields,
    ) -> Result<Provider> {
        ensure_super_admin(a)?;
        fetch(self.req.route_v1_provider_get(provider_id)).await?;

        let res = self.req.route_v1_provider_update(provider_id, fields).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn provider_delete(&self, a: &Agent, provider_id: Uuid) -> Result<Provider> {
        ensure_super_admin(a)?;
        fetch(self.req.route_v1_provider_get(provider_id)).await?;

        let res = self.req.route_v1_provider_delete(provider_id).await?;
        Ok(res.convert_webhook_message())
    }
}

#[cfg(test)]
mod tests {
    use crate::ServiceError;
    use crate::testing;
    use models::agent::Permission;
    use models::provider::{Provider, ProviderFields};
    use requesthandler::testutils::json_response;
    use requesthandler::{QueueName, RequestMethod};
    use serde_json::json;
    use std::collections::{BTreeMap, HashMap};
    use uuid::Uuid;

    fn provider() -> Provider {
        Provider {
            id: Uuid::new_v4(),
            hostname: "sip.telnyx.com".into(),
            tech_prefix: "0001".into(),
            name: "telnyx".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_provider_create_customer_admin_denied() {
        let (handler, mock) = testing::handler();
        let a = testing::agent(Uuid::new_v4(), Permission::CUSTOMER_ADMIN);

        let err = handler
            .provider_create(&a, &ProviderFields::default())
            .await
            .unwrap_err();
        assert!(err.is_forbidden());
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_provider_create() {
        let (handler, mock) = testing::handler();
        let a = testing::agent(Uuid::new_v4(), Permission::PROJECT_SUPER_ADMIN);
        let fields = ProviderFields {
            hostname: "sip.telnyx.com".into(),
            tech_headers: BTreeMap::from([("X-Account".to_string(), "voipbin".to_string())]),
            name: "telnyx".into(),
            ..Default::default()
        };
        mock.expect_with_body(
            QueueName::Route.as_str(),
            RequestMethod::Post,
            "/v1/providers",
            json!({
                "type": "sip",
                "hostname": "sip.telnyx.com",
                "tech_prefix": "",
                "tech_postfix": "",
                "tech_headers": {"X-Account": "voipbin"},
                "name": "telnyx",
                "detail": "",
            }),
            json_response(&provider()),
        );

        let res = handler.provider_create(&a, &fields).await.unwrap();
        assert_eq!(res.hostname, "sip.telnyx.com");
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_provider_delete_already_deleted() {
        let (handler, mock) = testing::handler();
        let a = testing::agent(Uuid::new_v4(), Permission::PROJECT_SUPER_ADMIN);
        let p = Provider {
            tm_delete: testing::deleted_at(),
            ..provider()
        };
        mock.expect(
            QueueName::Route.as_str(),
            RequestMethod::Get,
            &format!("/v1/providers/{}", p.id),
            json_response(&p),
        );

        let err = handler.provider_delete(&a, p.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound("provider")));
        assert_eq!(mock.calls().len(), 1);
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_provider_list_has_no_customer_scope() {
        let (handler, mock) = testing::handler();
        let a = testing::agent(Uuid::new_v4(), Permission::PROJECT_SUPER_ADMIN);
        let filters = HashMap::from([("customer_id".to_string(), Uuid::new_v4().to_string())]);
        mock.expect_with_body(
            QueueName::Route.as_str(),
            RequestMethod::Get,
            &format!("/v1/providers?page_token={}&page_size=10", testing::now_token_escaped()),
            json!({"deleted": false}),
            json_response(&vec![provider()]),
        );

        let res = handler.provider_list(&a, 10, "", &filters).await.unwrap();
        assert_eq!(res.len(), 1);
        mock.assert_done();
    }
}
