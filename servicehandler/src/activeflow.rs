use crate::permission::{MANAGER_MASK, ensure_permission};
use crate::{RawFilters, Result, ServiceHandler, convert_list, customer_filters, fetch_authorized};
use models::activeflow::{Activeflow, ActiveflowWebhookMessage, ReferenceType};
use models::agent::Agent;
use models::flow::Action;
use models::WebhookConvert;
use uuid::Uuid;

const TEMP_FLOW_DETAIL: &str = "tmp flow for activeflow";

impl ServiceHandler {
    async fn activeflow_get_authorized(&self, a: &Agent, activeflow_id: Uuid) -> Result<Activeflow> {
        fetch_authorized(a, MANAGER_MASK, self.req.flow_v1_activeflow_get(activeflow_id)).await
    }

    /// Starts a flow outside of any call.
    ///
    /// A nil `activeflow_id` gets a fresh id. A nil `flow_id` runs `actions` through a
    /// temporary flow.
    pub async fn activeflow_create(
        &self,
        a: &Agent,
        activeflow_id: Uuid,
        flow_id: Uuid,
        actions: &[Action],
    ) -> Result<ActiveflowWebhookMessage> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let activeflow_id = if activeflow_id.is_nil() {
            self.util.uuid_create()
        } else {
            activeflow_id
        };
        let flow_id = self
            .flow_resolve_owned(a, flow_id, actions, TEMP_FLOW_DETAIL)
            .await?;

        let res = self
            .req
            .flow_v1_activeflow_create(
                activeflow_id,
                a.customer_id(),
                flow_id,
                ReferenceType::None,
                Uuid::nil(),
            )
            .await?;

        if let Err(err) = self.req.flow_v1_activeflow_execute(res.identity.id).await {
            tracing::warn!(activeflow_id = %res.identity.id, error = %err, "could not execute the activeflow");
            return Err(err.into());
        }
        Ok(res.convert_webhook_message())
    }

    pub async fn activeflow_get(&self, a: &Agent, activeflow_id: Uuid) -> Result<ActiveflowWebhookMessage> {
        let res = self.activeflow_get_authorized(a, activeflow_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn activeflow_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<ActiveflowWebhookMessage>> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let filters = customer_filters::<Activeflow>(a, filters)?;
        let res = self
            .req
            .flow_v1_activeflow_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn activeflow_stop(&self, a: &Agent, activeflow_id: Uuid) -> Result<ActiveflowWebhookMessage> {
        self.activeflow_get_authorized(a, activeflow_id).await?;

        let res = self.req.flow_v1_activeflow_stop(activeflow_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn activeflow_delete(&self, a: &Agent, activeflow_id: Uuid) -> Result<ActiveflowWebhookMessage> {
        self.activeflow_get_authorized(a, activeflow_id).await?;

        let res = self.req.flow_v1_activeflow_delete(activeflow_id).await?;
        Ok(res.convert_webhook_message())
    }
}
