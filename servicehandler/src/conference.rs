use crate::permission::{MANAGER_MASK, ensure_permission};
use crate::{RawFilters, Result, ServiceHandler, convert_list, customer_filters, fetch_authorized};
use models::agent::Agent;
use models::conference::{Conference, ConferenceType, ConferenceWebhookMessage};
use models::WebhookConvert;
use requesthandler::conference::ConferenceCreate;
use serde_json::json;
use uuid::Uuid;

impl ServiceHandler {
    async fn conference_get_authorized(&self, a: &Agent, conference_id: Uuid) -> Result<Conference> {
        fetch_authorized(a, MANAGER_MASK, self.req.conference_v1_conference_get(conference_id)).await
    }

    pub async fn conference_create(
        &self,
        a: &Agent,
        mut req: ConferenceCreate,
    ) -> Result<ConferenceWebhookMessage> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        req.customer_id = a.customer_id();
        let res = self.req.conference_v1_conference_create(&req).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn conference_get(&self, a: &Agent, conference_id: Uuid) -> Result<ConferenceWebhookMessage> {
        let res = self.conference_get_authorized(a, conference_id).await?;
        Ok(res.convert_webhook_message())
    }

    /// Lists conferences of type `conference` only. Connect and queue bridges are internal.
    pub async fn conference_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<ConferenceWebhookMessage>> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let mut filters = customer_filters::<Conference>(a, filters)?;
        filters.insert("type".into(), json!(ConferenceType::Conference.as_str()));
        let res = self
            .req
            .conference_v1_conference_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn conference_delete(&self, a: &Agent, conference_id: Uuid) -> Result<ConferenceWebhookMessage> {
        self.conference_get_authorized(a, conference_id).await?;

        let res = self.req.conference_v1_conference_delete(conference_id).await?;
        Ok(res.convert_webhook_message())
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn conference_update(
        &self,
        a: &Agent,
        conference_id: Uuid,
        name: &str,
        detail: &str,
        timeout: i32,
        pre_flow_id: Uuid,
        post_flow_id: Uuid,
    ) -> Result<ConferenceWebhookMessage> {
        self.conference_get_authorized(a, conference_id).await?;

        let res = self
            .req
            .conference_v1_conference_update(conference_id, name, detail, timeout, pre_flow_id, post_flow_id)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn conference_recording_start(
        &self,
        a: &Agent,
        conference_id: Uuid,
        format: &str,
        duration: u32,
    ) -> Result<ConferenceWebhookMessage> {
        self.conference_get_authorized(a, conference_id).await?;

        let res = self
            .req
            .conference_v1_conference_recording_start(conference_id, format, duration)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn conference_recording_stop(
        &self,
        a: &Agent,
        conference_id: Uuid,
    ) -> Result<ConferenceWebhookMessage> {
        self.conference_get_authorized(a, conference_id).await?;

        let res = self.req.conference_v1_conference_recording_stop(conference_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn conference_transcribe_start(
        &self,
        a: &Agent,
        conference_id: Uuid,
        language: &str,
    ) -> Result<ConferenceWebhookMessage> {
        self.conference_get_authorized(a, conference_id).await?;

        let res = self
            .req
            .conference_v1_conference_transcribe_start(conference_id, language)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn conference_transcribe_stop(
        &self,
        a: &Agent,
        conference_id: Uuid,
    ) -> Result<ConferenceWebhookMessage> {
        self.conference_get_authorized(a, conference_id).await?;

        let res = self.req.conference_v1_conference_transcribe_stop(conference_id).await?;
        Ok(res.convert_webhook_message())
    }
}

#[cfg(test)]
mod tests {
    use crate::testing;
    use models::agent::Permission;
    use models::conference::Conference;
    use models::Identity;
    use requesthandler::testutils::json_response;
    use requesthandler::{QueueName, RequestMethod};
    use serde_json::json;
    use std::collections::HashMap;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_conference_list_forces_type() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_ADMIN);
        let conference = Conference {
            identity: Identity::new(Uuid::new_v4(), customer_id),
            confbridge_id: Uuid::new_v4(),
            ..Default::default()
        };
        mock.expect_with_body(
            QueueName::Conference.as_str(),
            RequestMethod::Get,
            "/v1/conferences?page_token=2024-01-01T00%3A00%3A00.000000Z&page_size=10",
            json!({"customer_id": customer_id, "deleted": false, "type": "conference"}),
            json_response(&vec![conference.clone()]),
        );

        let filters = HashMap::from([("type".to_string(), "connect".to_string())]);
        let res = handler
            .conference_list(&a, 10, "2024-01-01T00:00:00.000000Z", &filters)
            .await
            .unwrap();
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].identity, conference.identity);
        let json = serde_json::to_value(&res[0]).unwrap();
        assert!(json.get("confbridge_id").is_none());
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_conference_recording_start() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_MANAGER);
        let conference = Conference {
            identity: Identity::new(Uuid::new_v4(), customer_id),
            ..Default::default()
        };
        mock.expect(
            QueueName::Conference.as_str(),
            RequestMethod::Get,
            &format!("/v1/conferences/{}", conference.identity.id),
            json_response(&conference),
        );
        mock.expect_with_body(
            QueueName::Conference.as_str(),
            RequestMethod::Post,
            &format!("/v1/conferences/{}/recording_start", conference.identity.id),
            json!({"format": "wav", "duration": 600}),
            json_response(&conference),
        );

        handler
            .conference_recording_start(&a, conference.identity.id, "wav", 600)
            .await
            .unwrap();
        mock.assert_done();
    }
}
