use crate::permission::{MANAGER_MASK, ensure_permission};
use crate::{RawFilters, Result, ServiceHandler, convert_list, customer_filters, fetch_authorized};
use models::agent::Agent;
use models::outplan::Outplan;
use models::WebhookConvert;
use requesthandler::outplan::OutplanDialInfo;
use uuid::Uuid;

impl ServiceHandler {
    async fn outplan_get_authorized(&self, a: &Agent, outplan_id: Uuid) -> Result<Outplan> {
        fetch_authorized(a, MANAGER_MASK, self.req.campaign_v1_outplan_get(outplan_id)).await
    }

    pub async fn outplan_create(
        &self,
        a: &Agent,
        name: &str,
        detail: &str,
        dial_info: &OutplanDialInfo,
    ) -> Result<Outplan> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let res = self
            .req
            .campaign_v1_outplan_create(a.customer_id(), name, detail, dial_info)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn outplan_get(&self, a: &Agent, outplan_id: Uuid) -> Result<Outplan> {
        let res = self.outplan_get_authorized(a, outplan_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn outplan_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<Outplan>> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let filters = customer_filters::<Outplan>(a, filters)?;
        let res = self
            .req
            .campaign_v1_outplan_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn outplan_delete(&self, a: &Agent, outplan_id: Uuid) -> Result<Outplan> {
        self.outplan_get_authorized(a, outplan_id).await?;

        let res = self.req.campaign_v1_outplan_delete(outplan_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn outplan_update_basic_info(
        &self,
        a: &Agent,
        outplan_id: Uuid,
        name: &str,
        detail: &str,
    ) -> Result<Outplan> {
        self.outplan_get_authorized(a, outplan_id).await?;

        let res = self
            .req
            .campaign_v1_outplan_update_basic_info(outplan_id, name, detail)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn outplan_update_dial_info(
        &self,
        a: &Agent,
        outplan_id: Uuid,
        dial_info: &OutplanDialInfo,
    ) -> Result<Outplan> {
        self.outplan_get_authorized(a, outplan_id).await?;

        let res = self
            .req
            .campaign_v1_outplan_update_dial_info(outplan_id, dial_info)
            .await?;
        Ok(res.convert_webhook_message())
    }
}
