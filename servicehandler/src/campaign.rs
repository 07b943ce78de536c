use crate::permission::{MANAGER_MASK, ensure_permission};
use crate::{RawFilters, Result, ServiceHandler, convert_list, customer_filters, fetch_authorized};
use models::agent::Agent;
use models::campaign::{Campaign, CampaignStatus, CampaignType, EndHandle};
use models::flow::Action;
use models::WebhookConvert;
use requesthandler::campaign::CampaignCreate;
use uuid::Uuid;

impl ServiceHandler {
    async fn campaign_get_authorized(&self, a: &Agent, campaign_id: Uuid) -> Result<Campaign> {
        fetch_authorized(a, MANAGER_MASK, self.req.campaign_v1_campaign_get(campaign_id)).await
    }

    /// Creates an outbound campaign for the caller's customer.
    pub async fn campaign_create(&self, a: &Agent, mut req: CampaignCreate) -> Result<Campaign> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        req.customer_id = a.customer_id();
        let res = self.req.campaign_v1_campaign_create(&req).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn campaign_get(&self, a: &Agent, campaign_id: Uuid) -> Result<Campaign> {
        let res = self.campaign_get_authorized(a, campaign_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn campaign_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<Campaign>> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let filters = customer_filters::<Campaign>(a, filters)?;
        let res = self
            .req
            .campaign_v1_campaign_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn campaign_delete(&self, a: &Agent, campaign_id: Uuid) -> Result<Campaign> {
        self.campaign_get_authorized(a, campaign_id).await?;

        let res = self.req.campaign_v1_campaign_delete(campaign_id).await?;
        Ok(res.convert_webhook_message())
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn campaign_update_basic_info(
        &self,
        a: &Agent,
        campaign_id: Uuid,
        name: &str,
        detail: &str,
        kind: CampaignType,
        service_level: i32,
        end_handle: EndHandle,
    ) -> Result<Campaign> {
        self.campaign_get_authorized(a, campaign_id).await?;

        let res = self
            .req
            .campaign_v1_campaign_update_basic_info(campaign_id, name, detail, kind, service_level, end_handle)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn campaign_update_status(
        &self,
        a: &Agent,
        campaign_id: Uuid,
        status: CampaignStatus,
    ) -> Result<Campaign> {
        self.campaign_get_authorized(a, campaign_id).await?;

        let res = self
            .req
            .campaign_v1_campaign_update_status(campaign_id, status)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn campaign_update_service_level(
        &self,
        a: &Agent,
        campaign_id: Uuid,
        service_level: i32,
    ) -> Result<Campaign> {
        self.campaign_get_authorized(a, campaign_id).await?;

        let res = self
            .req
            .campaign_v1_campaign_update_service_level(campaign_id, service_level)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn campaign_update_actions(
        &self,
        a: &Agent,
        campaign_id: Uuid,
        actions: &[Action],
    ) -> Result<Campaign> {
        self.campaign_get_authorized(a, campaign_id).await?;

        let res = self
            .req
            .campaign_v1_campaign_update_actions(campaign_id, actions)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn campaign_update_resource_info(
        &self,
        a: &Agent,
        campaign_id: Uuid,
        outplan_id: Uuid,
        outdial_id: Uuid,
        queue_id: Uuid,
        next_campaign_id: Uuid,
    ) -> Result<Campaign> {
        self.campaign_get_authorized(a, campaign_id).await?;

        let res = self
            .req
            .campaign_v1_campaign_update_resource_info(
                campaign_id,
                outplan_id,
                outdial_id,
                queue_id,
                next_campaign_id,
            )
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn campaign_update_next_campaign_id(
        &self,
        a: &Agent,
        campaign_id: Uuid,
        next_campaign_id: Uuid,
    ) -> Result<Campaign> {
        self.campaign_get_authorized(a, campaign_id).await?;

        let res = self
            .req
            .campaign_v1_campaign_update_next_campaign_id(campaign_id, next_campaign_id)
            .await?;
        Ok(res.convert_webhook_message())
    }
}

#[cfg(test)]
mod tests {
    use crate::ServiceError;
    use crate::testing;
    use models::agent::Permission;
    use models::campaign::{Campaign, CampaignStatus};
    use models::Identity;
    use requesthandler::testutils::json_response;
    use requesthandler::{QueueName, RequestMethod};
    use serde_json::json;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_campaign_update_status() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_MANAGER);
        let mut campaign = Campaign {
            identity: Identity::new(Uuid::new_v4(), customer_id),
            ..Default::default()
        };
        mock.expect(
            QueueName::Campaign.as_str(),
            RequestMethod::Get,
            &format!("/v1/campaigns/{}", campaign.identity.id),
            json_response(&campaign),
        );
        campaign.status = CampaignStatus::Run;
        mock.expect_with_body(
            QueueName::Campaign.as_str(),
            RequestMethod::Put,
            &format!("/v1/campaigns/{}/status", campaign.identity.id),
            json!({"status": "run"}),
            json_response(&campaign),
        );

        let res = handler
            .campaign_update_status(&a, campaign.identity.id, CampaignStatus::Run)
            .await
            .unwrap();
        assert_eq!(res.status, CampaignStatus::Run);
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_campaign_delete_deleted() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_ADMIN);
        let campaign = Campaign {
            identity: Identity::new(Uuid::new_v4(), customer_id),
            tm_delete: testing::deleted_at(),
            ..Default::default()
        };
        mock.expect(
            QueueName::Campaign.as_str(),
            RequestMethod::Get,
            &format!("/v1/campaigns/{}", campaign.identity.id),
            json_response(&campaign),
        );

        let err = handler.campaign_delete(&a, campaign.identity.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound("campaign")));
        mock.assert_done();
    }
}
