use crate::permission::{MANAGER_MASK, ensure_permission};
use crate::{RawFilters, Result, ServiceError, ServiceHandler, convert_list, customer_filters, fetch_authorized};
use models::agent::Agent;
use models::tts::{Speaking, SpeakingWebhookMessage};
use models::WebhookConvert;
use requesthandler::tts::SpeakingCreate;
use uuid::Uuid;

// Say, flush and stop address the pod streaming the session, so each of them fetches
// the speaking first for its pod_id.
fn speaking_pod(speaking: &Speaking) -> Result<&str> {
    if speaking.pod_id.is_empty() {
        tracing::info!(speaking_id = %speaking.identity.id, "the speaking has no pod assigned");
        return Err(ServiceError::InvalidArgument("the speaking has no pod assigned".into()));
    }
    Ok(&speaking.pod_id)
}

impl ServiceHandler {
    async fn speaking_get_authorized(&self, a: &Agent, speaking_id: Uuid) -> Result<Speaking> {
        fetch_authorized(a, MANAGER_MASK, self.req.tts_v1_speaking_get(speaking_id)).await
    }

    pub async fn speaking_create(&self, a: &Agent, mut req: SpeakingCreate) -> Result<SpeakingWebhookMessage> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        req.customer_id = a.customer_id();
        let res = self.req.tts_v1_speaking_create(&req).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn speaking_get(&self, a: &Agent, speaking_id: Uuid) -> Result<SpeakingWebhookMessage> {
        let res = self.speaking_get_authorized(a, speaking_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn speaking_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<SpeakingWebhookMessage>> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let filters = customer_filters::<Speaking>(a, filters)?;
        let res = self
            .req
            .tts_v1_speaking_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    /// Queues `text` for synthesis on an active session.
    pub async fn speaking_say(&self, a: &Agent, speaking_id: Uuid, text: &str) -> Result<SpeakingWebhookMessage> {
        let speaking = self.speaking_get_authorized(a, speaking_id).await?;

        let pod_id = speaking_pod(&speaking)?;

        self.req.tts_v1_speaking_say(pod_id, speaking_id, text).await?;
        Ok(speaking.convert_webhook_message())
    }

    /// Drops queued text that has not been played yet.
    pub async fn speaking_flush(&self, a: &Agent, speaking_id: Uuid) -> Result<SpeakingWebhookMessage> {
        let speaking = self.speaking_get_authorized(a, speaking_id).await?;

        let pod_id = speaking_pod(&speaking)?;

        self.req.tts_v1_speaking_flush(pod_id, speaking_id).await?;
        Ok(speaking.convert_webhook_message())
    }

    pub async fn speaking_stop(&self, a: &Agent, speaking_id: Uuid) -> Result<SpeakingWebhookMessage> {
        let speaking = self.speaking_get_authorized(a, speaking_id).await?;

        let pod_id = speaking_pod(&speaking)?;

        self.req.tts_v1_speaking_stop(pod_id, speaking_id).await?;
        Ok(speaking.convert_webhook_message())
    }

    pub async fn speaking_delete(&self, a: &Agent, speaking_id: Uuid) -> Result<SpeakingWebhookMessage> {
        self.speaking_get_authorized(a, speaking_id).await?;

        let res = self.req.tts_v1_speaking_delete(speaking_id).await?;
        Ok(res.convert_webhook_message())
    }
}

#[cfg(test)]
mod tests {
    use crate::ServiceError;
    use crate::testing;
    use models::agent::Permission;
    use models::tts::{Speaking, SpeakingStatus};
    use models::Identity;
    use requesthandler::testutils::{json_response, status_response};
    use requesthandler::tts::SpeakingCreate;
    use requesthandler::{QueueName, RequestMethod};
    use serde_json::json;
    use std::collections::HashMap;
    use uuid::Uuid;

    fn speaking(customer_id: Uuid) -> Speaking {
        Speaking {
            identity: Identity::new(Uuid::new_v4(), customer_id),
            reference_type: "call".into(),
            reference_id: Uuid::new_v4(),
            status: SpeakingStatus::Active,
            pod_id: "tts-manager-6c9f-2xk4p".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_speaking_create_forces_customer() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_MANAGER);
        let sp = speaking(customer_id);
        mock.expect_with_body(
            QueueName::Tts.as_str(),
            RequestMethod::Post,
            "/v1/speakings",
            json!({
                "customer_id": customer_id,
                "reference_type": "call",
                "reference_id": sp.reference_id,
                "language": "en-US",
                "provider": "",
                "voice_id": "",
                "direction": "out",
            }),
            json_response(&sp),
        );

        let req = SpeakingCreate {
            customer_id: Uuid::new_v4(),
            reference_type: "call".into(),
            reference_id: sp.reference_id,
            language: "en-US".into(),
            direction: "out".into(),
            ..Default::default()
        };
        let res = handler.speaking_create(&a, req).await.unwrap();
        assert_eq!(res.identity, sp.identity);
        let json = serde_json::to_value(&res).unwrap();
        assert!(json.get("pod_id").is_none());
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_speaking_say_targets_pod() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_ADMIN);
        let sp = speaking(customer_id);
        mock.expect(
            QueueName::Tts.as_str(),
            RequestMethod::Get,
            &format!("/v1/speakings/{}", sp.identity.id),
            json_response(&sp),
        );
        mock.expect_with_body(
            &QueueName::Tts.pod("tts-manager-6c9f-2xk4p"),
            RequestMethod::Post,
            &format!("/v1/speakings/{}/say", sp.identity.id),
            json!({"text": "hello there"}),
            status_response(200),
        );

        let res = handler
            .speaking_say(&a, sp.identity.id, "hello there")
            .await
            .unwrap();
        assert_eq!(res.status, SpeakingStatus::Active);
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_speaking_stop_other_customer() {
        let (handler, mock) = testing::handler();
        let a = testing::agent(Uuid::new_v4(), Permission::CUSTOMER_ADMIN);
        let sp = speaking(Uuid::new_v4());
        mock.expect(
            QueueName::Tts.as_str(),
            RequestMethod::Get,
            &format!("/v1/speakings/{}", sp.identity.id),
            json_response(&sp),
        );

        let err = handler.speaking_stop(&a, sp.identity.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NoPermission));
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_speaking_list() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_MANAGER);
        let sp = speaking(customer_id);
        mock.expect_with_body(
            QueueName::Tts.as_str(),
            RequestMethod::Get,
            &format!("/v1/speakings?page_token={}&page_size=20", testing::now_token_escaped()),
            json!({"customer_id": customer_id, "reference_id": sp.reference_id, "deleted": false}),
            json_response(&vec![sp.clone()]),
        );

        let filters = HashMap::from([
            ("reference_id".to_string(), sp.reference_id.to_string()),
            ("customer_id".to_string(), Uuid::new_v4().to_string()),
        ]);
        let res = handler.speaking_list(&a, 20, "", &filters).await.unwrap();
        assert_eq!(res.len(), 1);
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_speaking_flush_without_pod() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_ADMIN);
        let sp = Speaking {
            pod_id: String::new(),
            status: SpeakingStatus::Initiating,
            ..speaking(customer_id)
        };
        mock.expect(
            QueueName::Tts.as_str(),
            RequestMethod::Get,
            &format!("/v1/speakings/{}", sp.identity.id),
            json_response(&sp),
        );

        let err = handler.speaking_flush(&a, sp.identity.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidArgument(_)));
        // no pod queue request was issued
        assert_eq!(mock.calls().len(), 1);
        mock.assert_done();
    }
}
