use crate::{QueueName, RequestHandler, RequestMethod, Result};
use models::address::Address;
use models::filter::Filters;
use models::outplan::Outplan;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

const RESOURCE: &str = "campaign/outplans";

/// How targets of a campaign using the outplan are dialed.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct OutplanDialInfo {
    pub source: Address,
    pub dial_timeout: i32,
    pub try_interval: i32,
    pub max_try_count_0: i32,
    pub max_try_count_1: i32,
    pub max_try_count_2: i32,
    pub max_try_count_3: i32,
    pub max_try_count_4: i32,
}

#[derive(Serialize)]
struct OutplanCreate<'a> {
    customer_id: Uuid,
    name: &'a str,
    detail: &'a str,
    #[serde(flatten)]
    dial_info: &'a OutplanDialInfo,
}

impl RequestHandler {
    pub async fn campaign_v1_outplan_create(
        &self,
        customer_id: Uuid,
        name: &str,
        detail: &str,
        dial_info: &OutplanDialInfo,
    ) -> Result<Outplan> {
        let body = OutplanCreate {
            customer_id,
            name,
            detail,
            dial_info,
        };
        self.request(
            QueueName::Campaign.as_str(),
            "/v1/outplans",
            RequestMethod::Post,
            RESOURCE,
            Some(serde_json::to_value(&body)?),
        )
        .await
    }

    pub async fn campaign_v1_outplan_get(&self, outplan_id: Uuid) -> Result<Outplan> {
        self.request(
            QueueName::Campaign.as_str(),
            &format!("/v1/outplans/{outplan_id}"),
            RequestMethod::Get,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn campaign_v1_outplan_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Outplan>> {
        self.request_list(
            QueueName::Campaign,
            "/v1/outplans",
            RESOURCE,
            token,
            size,
            filters,
        )
        .await
    }

    pub async fn campaign_v1_outplan_delete(&self, outplan_id: Uuid) -> Result<Outplan> {
        self.request(
            QueueName::Campaign.as_str(),
            &format!("/v1/outplans/{outplan_id}"),
            RequestMethod::Delete,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn campaign_v1_outplan_update_basic_info(
        &self,
        outplan_id: Uuid,
        name: &str,
        detail: &str,
    ) -> Result<Outplan> {
        self.request(
            QueueName::Campaign.as_str(),
            &format!("/v1/outplans/{outplan_id}"),
            RequestMethod::Put,
            RESOURCE,
            Some(json!({ "name": name, "detail": detail })),
        )
        .await
    }

    pub async fn campaign_v1_outplan_update_dial_info(
        &self,
        outplan_id: Uuid,
        dial_info: &OutplanDialInfo,
    ) -> Result<Outplan> {
        self.request(
            QueueName::Campaign.as_str(),
            &format!("/v1/outplans/{outplan_id}/dials"),
            RequestMethod::Put,
            RESOURCE,
            Some(serde_json::to_value(dial_info)?),
        )
        .await
    }
}
