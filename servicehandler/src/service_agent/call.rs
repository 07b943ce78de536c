use super::agent_owned_filters;
use crate::{Result, ServiceError, ServiceHandler, convert_list, fetch};
use models::agent::Agent;
use models::call::{Call, CallWebhookMessage};
use models::filter::FIELD_CUSTOMER_ID;
use models::WebhookConvert;
use serde_json::json;
use uuid::Uuid;

impl ServiceHandler {
    async fn service_agent_call_get_owned(&self, a: &Agent, call_id: Uuid) -> Result<Call> {
        let res = fetch(self.req.call_v1_call_get(call_id)).await?;
        if !res.owner.is_agent(a.id()) {
            tracing::info!(%call_id, agent_id = %a.id(), "the call belongs to another owner");
            return Err(ServiceError::AgentNoPermission);
        }
        Ok(res)
    }

    /// Calls placed or received by the agent itself.
    pub async fn service_agent_call_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
    ) -> Result<Vec<CallWebhookMessage>> {
        let mut filters = agent_owned_filters(a.id());
        filters.insert(FIELD_CUSTOMER_ID.into(), json!(a.customer_id()));

        let res = self
            .req
            .call_v1_call_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn service_agent_call_get(&self, a: &Agent, call_id: Uuid) -> Result<CallWebhookMessage> {
        let res = self.service_agent_call_get_owned(a, call_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn service_agent_call_delete(&self, a: &Agent, call_id: Uuid) -> Result<CallWebhookMessage> {
        self.service_agent_call_get_owned(a, call_id).await?;

        let res = self.req.call_v1_call_delete(call_id).await?;
        Ok(res.convert_webhook_message())
    }
}
