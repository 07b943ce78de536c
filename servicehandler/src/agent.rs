use crate::permission::{MANAGER_MASK, ensure_permission, ensure_super_admin};
use crate::{RawFilters, Result, ServiceHandler, convert_list, customer_filters, fetch};
use models::address::Address;
use models::agent::{Agent, AgentWebhookMessage, Permission, RingMethod, Status};
use models::WebhookConvert;
use requesthandler::agent::AgentCreate;
use uuid::Uuid;

impl ServiceHandler {
    /// Fetches agent `agent_id`. Agents may always read and edit their own record, others
    /// need the manager mask on the target's customer.
    async fn agent_get_authorized(&self, a: &Agent, agent_id: Uuid, allow_self: bool) -> Result<Agent> {
        let target = fetch(self.req.agent_v1_agent_get(agent_id)).await?;
        if !(allow_self && a.id() == target.id()) {
            ensure_permission(a, target.customer_id(), MANAGER_MASK)?;
        }
        Ok(target)
    }

    /// Rejects granting project level bits unless the caller is a super admin.
    fn ensure_grantable(a: &Agent, permission: Permission) -> Result<()> {
        if permission.intersects(Permission::PROJECT_ALL) {
            ensure_super_admin(a)?;
        }
        Ok(())
    }

    /// Creates an agent inside the caller's customer.
    pub async fn agent_create(&self, a: &Agent, mut req: AgentCreate) -> Result<AgentWebhookMessage> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;
        Self::ensure_grantable(a, req.permission)?;

        req.customer_id = a.customer_id();
        let res = self.req.agent_v1_agent_create(&req).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn agent_get(&self, a: &Agent, agent_id: Uuid) -> Result<AgentWebhookMessage> {
        let res = self.agent_get_authorized(a, agent_id, true).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn agent_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<AgentWebhookMessage>> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let filters = customer_filters::<Agent>(a, filters)?;
        let res = self
            .req
            .agent_v1_agent_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn agent_delete(&self, a: &Agent, agent_id: Uuid) -> Result<AgentWebhookMessage> {
        self.agent_get_authorized(a, agent_id, false).await?;

        let res = self.req.agent_v1_agent_delete(agent_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn agent_update(
        &self,
        a: &Agent,
        agent_id: Uuid,
        name: &str,
        detail: &str,
        ring_method: RingMethod,
    ) -> Result<AgentWebhookMessage> {
        self.agent_get_authorized(a, agent_id, true).await?;

        let res = self
            .req
            .agent_v1_agent_update(agent_id, name, detail, ring_method)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn agent_update_addresses(
        &self,
        a: &Agent,
        agent_id: Uuid,
        addresses: &[Address],
    ) -> Result<AgentWebhookMessage> {
        self.agent_get_authorized(a, agent_id, false).await?;

        let res = self.req.agent_v1_agent_update_addresses(agent_id, addresses).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn agent_update_tag_ids(
        &self,
        a: &Agent,
        agent_id: Uuid,
        tag_ids: &[Uuid],
    ) -> Result<AgentWebhookMessage> {
        self.agent_get_authorized(a, agent_id, false).await?;

        let res = self.req.agent_v1_agent_update_tag_ids(agent_id, tag_ids).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn agent_update_status(
        &self,
        a: &Agent,
        agent_id: Uuid,
        status: Status,
    ) -> Result<AgentWebhookMessage> {
        self.agent_get_authorized(a, agent_id, true).await?;

        let res = self.req.agent_v1_agent_update_status(agent_id, status).await?;
        Ok(res.convert_webhook_message())
    }

    /// Changes the role flags of an agent.
    ///
    /// Project level bits may only be granted by a super admin. Anything else needs the
    /// manager mask on the target's customer, even for the agent's own record.
    pub async fn agent_update_permission(
        &self,
        a: &Agent,
        agent_id: Uuid,
        permission: Permission,
    ) -> Result<AgentWebhookMessage> {
        let target = fetch(self.req.agent_v1_agent_get(agent_id)).await?;
        if permission.intersects(Permission::PROJECT_ALL) {
            ensure_super_admin(a)?;
        } else {
            ensure_permission(a, target.customer_id(), MANAGER_MASK)?;
        }

        let res = self
            .req
            .agent_v1_agent_update_permission(agent_id, permission)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn agent_update_password(
        &self,
        a: &Agent,
        agent_id: Uuid,
        password: &str,
    ) -> Result<AgentWebhookMessage> {
        self.agent_get_authorized(a, agent_id, true).await?;

        let res = self.req.agent_v1_agent_update_password(agent_id, password).await?;
        Ok(res.convert_webhook_message())
    }
}
