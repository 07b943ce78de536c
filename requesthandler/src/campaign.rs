use crate::{QueueName, RequestHandler, RequestMethod, Result};
use models::campaign::{Campaign, CampaignStatus, CampaignType, EndHandle};
use models::filter::Filters;
use models::flow::Action;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

const RESOURCE: &str = "campaign/campaigns";

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CampaignCreate {
    pub customer_id: Uuid,
    #[serde(rename = "type")]
    pub kind: CampaignType,
    pub name: String,
    pub detail: String,
    pub actions: Vec<Action>,
    pub service_level: i32,
    pub end_handle: EndHandle,
    pub outplan_id: Uuid,
    pub outdial_id: Uuid,
    pub queue_id: Uuid,
    pub next_campaign_id: Uuid,
}

impl RequestHandler {
    pub async fn campaign_v1_campaign_create(&self, req: &CampaignCreate) -> Result<Campaign> {
        self.request(
            QueueName::Campaign.as_str(),
            "/v1/campaigns",
            RequestMethod::Post,
            RESOURCE,
            Some(serde_json::to_value(req)?),
        )
        .await
    }

    pub async fn campaign_v1_campaign_get(&self, campaign_id: Uuid) -> Result<Campaign> {
        self.request(
            QueueName::Campaign.as_str(),
            &format!("/v1/campaigns/{campaign_id}"),
            RequestMethod::Get,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn campaign_v1_campaign_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Campaign>> {
        self.request_list(
            QueueName::Campaign,
            "/v1/campaigns",
            RESOURCE,
            token,
            size,
            filters,
        )
        .await
    }

    pub async fn campaign_v1_campaign_delete(&self, campaign_id: Uuid) -> Result<Campaign> {
        self.request(
            QueueName::Campaign.as_str(),
            &format!("/v1/campaigns/{campaign_id}"),
            RequestMethod::Delete,
            RESOURCE,
            None,
        )
        .await
    }

    async fn campaign_put(&self, campaign_id: Uuid, action: &str, data: serde_json::Value) -> Result<Campaign> {
        let uri = if action.is_empty() {
            format!("/v1/campaigns/{campaign_id}")
        } else {
            format!("/v1/campaigns/{campaign_id}/{action}")
        };
        self.request(
            QueueName::Campaign.as_str(),
            &uri,
            RequestMethod::Put,
            RESOURCE,
            Some(data),
        )
        .await
    }

    pub async fn campaign_v1_campaign_update_basic_info(
        &self,
        campaign_id: Uuid,
        name: &str,
        detail: &str,
        kind: CampaignType,
        service_level: i32,
        end_handle: EndHandle,
    ) -> Result<Campaign> {
        self.campaign_put(
            campaign_id,
            "",
            json!({
                "name": name,
                "detail": detail,
                "type": kind,
                "service_level": service_level,
                "end_handle": end_handle,
            }),
        )
        .await
    }

    pub async fn campaign_v1_campaign_update_status(
        &self,
        campaign_id: Uuid,
        status: CampaignStatus,
    ) -> Result<Campaign> {
        self.campaign_put(campaign_id, "status", json!({ "status": status }))
            .await
    }

    pub async fn campaign_v1_campaign_update_service_level(
        &self,
        campaign_id: Uuid,
        service_level: i32,
    ) -> Result<Campaign> {
        self.campaign_put(
            campaign_id,
            "service_level",
            json!({ "service_level": service_level }),
        )
        .await
    }

    pub async fn campaign_v1_campaign_update_actions(
        &self,
        campaign_id: Uuid,
        actions: &[Action],
    ) -> Result<Campaign> {
        self.campaign_put(campaign_id, "actions", json!({ "actions": actions }))
            .await
    }

    pub async fn campaign_v1_campaign_update_resource_info(
        &self,
        campaign_id: Uuid,
        outplan_id: Uuid,
        outdial_id: Uuid,
        queue_id: Uuid,
        next_campaign_id: Uuid,
    ) -> Result<Campaign> {
        self.campaign_put(
            campaign_id,
            "resource_info",
            json!({
                "outplan_id": outplan_id,
                "outdial_id": outdial_id,
                "queue_id": queue_id,
                "next_campaign_id": next_campaign_id,
            }),
        )
        .await
    }

    pub async fn campaign_v1_campaign_update_next_campaign_id(
        &self,
        campaign_id: Uuid,
        next_campaign_id: Uuid,
    ) -> Result<Campaign> {
        self.campaign_put(
            campaign_id,
            "next_campaign_id",
            json!({ "next_campaign_id": next_campaign_id }),
        )
        .await
    }
}
