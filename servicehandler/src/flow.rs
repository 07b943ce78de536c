use crate::permission::{MANAGER_MASK, ensure_permission};
use crate::{
    RawFilters, Result, ServiceError, ServiceHandler, convert_list, customer_filters, fetch,
    fetch_authorized,
};
use models::agent::Agent;
use models::flow::{Action, Flow, FlowType, FlowWebhookMessage};
use models::WebhookConvert;
use uuid::Uuid;

/// Name of the non-persisted flows created from inline actions.
const TEMP_FLOW_NAME: &str = "tmp";

impl ServiceHandler {
    async fn flow_get_authorized(&self, a: &Agent, flow_id: Uuid) -> Result<Flow> {
        fetch_authorized(a, MANAGER_MASK, self.req.flow_v1_flow_get(flow_id)).await
    }

    /// Fails unless the flow exists and belongs to the caller's customer.
    pub(crate) async fn flow_ensure_owned(&self, a: &Agent, flow_id: Uuid) -> Result<()> {
        let flow = fetch(self.req.flow_v1_flow_get(flow_id)).await?;
        if flow.identity.customer_id != a.customer_id() {
            tracing::info!(%flow_id, customer_id = %a.customer_id(), "the flow belongs to another customer");
            return Err(ServiceError::InvalidArgument("the flow has wrong customer id".into()));
        }
        Ok(())
    }

    /// Flow to run for an operation given either a flow id or inline actions.
    ///
    /// A nil `flow_id` wraps `actions` into a temporary flow that the flow manager drops
    /// once its run ends. The resulting flow must belong to the caller's customer.
    pub(crate) async fn flow_resolve_owned(
        &self,
        a: &Agent,
        flow_id: Uuid,
        actions: &[Action],
        temp_detail: &str,
    ) -> Result<Uuid> {
        let flow_id = if flow_id.is_nil() {
            if actions.is_empty() {
                return Err(ServiceError::InvalidArgument(
                    "either a flow id or actions are required".into(),
                ));
            }
            let flow = self
                .req
                .flow_v1_flow_create(
                    a.customer_id(),
                    FlowType::Flow,
                    TEMP_FLOW_NAME,
                    temp_detail,
                    actions,
                    Uuid::nil(),
                    false,
                )
                .await?;
            tracing::debug!(flow_id = %flow.identity.id, temp_detail, "created a temp flow");
            flow.identity.id
        } else {
            flow_id
        };

        self.flow_ensure_owned(a, flow_id).await?;
        Ok(flow_id)
    }

    /// Creates a persistent flow owned by the caller's customer.
    pub async fn flow_create(
        &self,
        a: &Agent,
        kind: FlowType,
        name: &str,
        detail: &str,
        actions: &[Action],
        on_complete_flow_id: Uuid,
    ) -> Result<FlowWebhookMessage> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let res = self
            .req
            .flow_v1_flow_create(a.customer_id(), kind, name, detail, actions, on_complete_flow_id, true)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn flow_get(&self, a: &Agent, flow_id: Uuid) -> Result<FlowWebhookMessage> {
        let res = self.flow_get_authorized(a, flow_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn flow_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<FlowWebhookMessage>> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let filters = customer_filters::<Flow>(a, filters)?;
        let res = self
            .req
            .flow_v1_flow_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn flow_update(
        &self,
        a: &Agent,
        flow_id: Uuid,
        name: &str,
        detail: &str,
        actions: &[Action],
        on_complete_flow_id: Uuid,
    ) -> Result<FlowWebhookMessage> {
        self.flow_get_authorized(a, flow_id).await?;

        let res = self
            .req
            .flow_v1_flow_update(flow_id, name, detail, actions, on_complete_flow_id)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn flow_update_actions(
        &self,
        a: &Agent,
        flow_id: Uuid,
        actions: &[Action],
    ) -> Result<FlowWebhookMessage> {
        self.flow_get_authorized(a, flow_id).await?;

        let res = self.req.flow_v1_flow_update_actions(flow_id, actions).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn flow_delete(&self, a: &Agent, flow_id: Uuid) -> Result<FlowWebhookMessage> {
        self.flow_get_authorized(a, flow_id).await?;

        let res = self.req.flow_v1_flow_delete(flow_id).await?;
        Ok(res.convert_webhook_message())
    }
}

#[cfg(test)]
mod tests {
    use crate::ServiceError;
    use crate::testing;
    use models::agent::Permission;
    use models::flow::{Action, Flow, FlowType};
    use models::Identity;
    use requesthandler::testutils::json_response;
    use requesthandler::{QueueName, RequestMethod};
    use serde_json::json;
    use std::collections::HashMap;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_flow_create_is_persistent() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_MANAGER);
        let actions = vec![Action::new("answer"), Action::new("hangup")];
        let flow = Flow {
            identity: Identity::new(Uuid::new_v4(), customer_id),
            name: "ivr".into(),
            persist: true,
            actions: actions.clone(),
            ..Default::default()
        };
        mock.expect_with_body(
            QueueName::Flow.as_str(),
            RequestMethod::Post,
            "/v1/flows",
            json!({
                "customer_id": customer_id,
                "type": "flow",
                "name": "ivr",
                "detail": "",
                "actions": [{"id": Uuid::nil(), "next_id": Uuid::nil(), "type": "answer"},
                            {"id": Uuid::nil(), "next_id": Uuid::nil(), "type": "hangup"}],
                "on_complete_flow_id": Uuid::nil(),
                "persist": true,
            }),
            json_response(&flow),
        );

        let res = handler
            .flow_create(&a, FlowType::Flow, "ivr", "", &actions, Uuid::nil())
            .await
            .unwrap();
        assert_eq!(res.identity, flow.identity);
        assert_eq!(res.actions, actions);
        let json = serde_json::to_value(&res).unwrap();
        assert!(json.get("persist").is_none());
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_flow_delete_other_customer() {
        let (handler, mock) = testing::handler();
        let a = testing::agent(Uuid::new_v4(), Permission::CUSTOMER_ADMIN);
        let flow = Flow {
            identity: Identity::new(Uuid::new_v4(), Uuid::new_v4()),
            ..Default::default()
        };
        mock.expect(
            QueueName::Flow.as_str(),
            RequestMethod::Get,
            &format!("/v1/flows/{}", flow.identity.id),
            json_response(&flow),
        );

        let err = handler.flow_delete(&a, flow.identity.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NoPermission));
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_flow_list_rejects_bad_filter() {
        let (handler, mock) = testing::handler();
        let a = testing::agent(Uuid::new_v4(), Permission::CUSTOMER_ADMIN);

        let filters = HashMap::from([("persist".to_string(), "sometimes".to_string())]);
        let err = handler.flow_list(&a, 10, "", &filters).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidFilter(_)));
        assert!(mock.calls().is_empty());
    }
}
