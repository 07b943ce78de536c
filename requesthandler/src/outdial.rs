use crate::{QueueName, RequestHandler, RequestMethod, Result, list_uri};
use models::filter::Filters;
use models::outdial::{Outdial, OutdialTarget, TargetDestinations};
use serde_json::json;
use uuid::Uuid;

const RESOURCE: &str = "outdial/outdials";
const RESOURCE_TARGET: &str = "outdial/outdialtargets";

impl RequestHandler {
    pub async fn outdial_v1_outdial_create(
        &self,
        customer_id: Uuid,
        campaign_id: Uuid,
        name: &str,
        detail: &str,
        data: &str,
    ) -> Result<Outdial> {
        self.request(
            QueueName::Outdial.as_str(),
            "/v1/outdials",
            RequestMethod::Post,
            RESOURCE,
            Some(json!({
                "customer_id": customer_id,
                "campaign_id": campaign_id,
                "name": name,
                "detail": detail,
                "data": data,
            })),
        )
        .await
    }

    pub async fn outdial_v1_outdial_get(&self, outdial_id: Uuid) -> Result<Outdial> {
        self.request(
            QueueName::Outdial.as_str(),
            &format!("/v1/outdials/{outdial_id}"),
            RequestMethod::Get,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn outdial_v1_outdial_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Outdial>> {
        self.request_list(
            QueueName::Outdial,
            "/v1/outdials",
            RESOURCE,
            token,
            size,
            filters,
        )
        .await
    }

    pub async fn outdial_v1_outdial_delete(&self, outdial_id: Uuid) -> Result<Outdial> {
        self.request(
            QueueName::Outdial.as_str(),
            &format!("/v1/outdials/{outdial_id}"),
            RequestMethod::Delete,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn outdial_v1_outdial_update_basic_info(
        &self,
        outdial_id: Uuid,
        name: &str,
        detail: &str,
    ) -> Result<Outdial> {
        self.request(
            QueueName::Outdial.as_str(),
            &format!("/v1/outdials/{outdial_id}"),
            RequestMethod::Put,
            RESOURCE,
            Some(json!({ "name": name, "detail": detail })),
        )
        .await
    }

    pub async fn outdial_v1_outdial_update_campaign_id(
        &self,
        outdial_id: Uuid,
        campaign_id: Uuid,
    ) -> Result<Outdial> {
        self.request(
            QueueName::Outdial.as_str(),
            &format!("/v1/outdials/{outdial_id}/campaign_id"),
            RequestMethod::Put,
            RESOURCE,
            Some(json!({ "campaign_id": campaign_id })),
        )
        .await
    }

    pub async fn outdial_v1_outdial_update_data(&self, outdial_id: Uuid, data: &str) -> Result<Outdial> {
        self.request(
            QueueName::Outdial.as_str(),
            &format!("/v1/outdials/{outdial_id}/data"),
            RequestMethod::Put,
            RESOURCE,
            Some(json!({ "data": data })),
        )
        .await
    }

    pub async fn outdial_v1_outdialtarget_create(
        &self,
        outdial_id: Uuid,
        name: &str,
        detail: &str,
        data: &str,
        destinations: &TargetDestinations,
    ) -> Result<OutdialTarget> {
        let mut body = serde_json::to_value(destinations)?;
        if let Some(obj) = body.as_object_mut() {
            obj.insert("name".into(), json!(name));
            obj.insert("detail".into(), json!(detail));
            obj.insert("data".into(), json!(data));
        }
        self.request(
            QueueName::Outdial.as_str(),
            &format!("/v1/outdials/{outdial_id}/targets"),
            RequestMethod::Post,
            RESOURCE_TARGET,
            Some(body),
        )
        .await
    }

    pub async fn outdial_v1_outdialtarget_get(&self, target_id: Uuid) -> Result<OutdialTarget> {
        self.request(
            QueueName::Outdial.as_str(),
            &format!("/v1/outdialtargets/{target_id}"),
            RequestMethod::Get,
            RESOURCE_TARGET,
            None,
        )
        .await
    }

    pub async fn outdial_v1_outdialtarget_delete(&self, target_id: Uuid) -> Result<OutdialTarget> {
        self.request(
            QueueName::Outdial.as_str(),
            &format!("/v1/outdialtargets/{target_id}"),
            RequestMethod::Delete,
            RESOURCE_TARGET,
            None,
        )
        .await
    }

    /// Targets of one outdial. The outdial manager scopes the page by the path alone.
    pub async fn outdial_v1_outdialtarget_list(
        &self,
        outdial_id: Uuid,
        token: &str,
        size: u64,
    ) -> Result<Vec<OutdialTarget>> {
        let base = format!("/v1/outdials/{outdial_id}/targets");
        self.request(
            QueueName::Outdial.as_str(),
            &list_uri(&base, token, size),
            RequestMethod::Get,
            RESOURCE_TARGET,
            None,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::{MockSock, json_response};
    use models::address::{Address, AddressType};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_target_create_body() {
        let outdial_id = Uuid::parse_str("1c0e8b5a-07f5-11ef-b1a4-7f2d4a6e9c13").unwrap();
        let destinations = TargetDestinations {
            destination_0: Some(Address::new(AddressType::Tel, "+821100000001")),
            ..Default::default()
        };

        let mock = Arc::new(MockSock::new());
        mock.expect_with_body(
            QueueName::Outdial.as_str(),
            RequestMethod::Post,
            "/v1/outdials/1c0e8b5a-07f5-11ef-b1a4-7f2d4a6e9c13/targets",
            json!({
                "name": "lead 1",
                "detail": "",
                "data": "{\"lead\":1}",
                "destination_0": {
                    "type": "tel",
                    "target": "+821100000001",
                    "target_name": "",
                    "name": "",
                    "detail": "",
                },
                "destination_1": null,
                "destination_2": null,
                "destination_3": null,
                "destination_4": null,
            }),
            json_response(&OutdialTarget::default()),
        );

        let handler = RequestHandler::new(mock.clone(), "api-manager");
        handler
            .outdial_v1_outdialtarget_create(outdial_id, "lead 1", "", "{\"lead\":1}", &destinations)
            .await
            .unwrap();
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_target_list_uri() {
        let outdial_id = Uuid::parse_str("1c0e8b5a-07f5-11ef-b1a4-7f2d4a6e9c13").unwrap();

        let mock = Arc::new(MockSock::new());
        mock.expect(
            QueueName::Outdial.as_str(),
            RequestMethod::Get,
            "/v1/outdials/1c0e8b5a-07f5-11ef-b1a4-7f2d4a6e9c13/targets?page_token=2024-05-01+10%3A00%3A00&page_size=20",
            json_response(&Vec::<OutdialTarget>::new()),
        );

        let handler = RequestHandler::new(mock.clone(), "api-manager");
        let res = handler
            .outdial_v1_outdialtarget_list(outdial_id, "2024-05-01 10:00:00", 20)
            .await
            .unwrap();
        assert!(res.is_empty());
        mock.assert_done();
    }
}
