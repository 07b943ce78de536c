use crate::permission::{MANAGER_MASK, ensure_permission};
use crate::{RawFilters, Result, ServiceHandler, convert_list, customer_filters, fetch_authorized};
use models::agent::Agent;
use models::queuecall::{Queuecall, QueuecallWebhookMessage};
use models::WebhookConvert;
use uuid::Uuid;

impl ServiceHandler {
    async fn queuecall_get_authorized(&self, a: &Agent, queuecall_id: Uuid) -> Result<Queuecall> {
        fetch_authorized(a, MANAGER_MASK, self.req.queue_v1_queuecall_get(queuecall_id)).await
    }

    pub async fn queuecall_get(&self, a: &Agent, queuecall_id: Uuid) -> Result<QueuecallWebhookMessage> {
        let res = self.queuecall_get_authorized(a, queuecall_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn queuecall_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<QueuecallWebhookMessage>> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let filters = customer_filters::<Queuecall>(a, filters)?;
        let res = self
            .req
            .queue_v1_queuecall_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn queuecall_delete(&self, a: &Agent, queuecall_id: Uuid) -> Result<QueuecallWebhookMessage> {
        self.queuecall_get_authorized(a, queuecall_id).await?;

        let res = self.req.queue_v1_queuecall_delete(queuecall_id).await?;
        Ok(res.convert_webhook_message())
    }

    /// Takes the call out of its queue.
    pub async fn queuecall_kick(&self, a: &Agent, queuecall_id: Uuid) -> Result<QueuecallWebhookMessage> {
        self.queuecall_get_authorized(a, queuecall_id).await?;

        let res = self.req.queue_v1_queuecall_kick(queuecall_id).await?;
        Ok(res.convert_webhook_message())
    }

    /// Takes the call or conversation `reference_id` out of the queue it waits in.
    pub async fn queuecall_kick_by_reference_id(
        &self,
        a: &Agent,
        reference_id: Uuid,
    ) -> Result<QueuecallWebhookMessage> {
        fetch_authorized(
            a,
            MANAGER_MASK,
            self.req.queue_v1_queuecall_get_by_reference_id(reference_id),
        )
        .await?;

        let res = self
            .req
            .queue_v1_queuecall_kick_by_reference_id(reference_id)
            .await?;
        Ok(res.convert_webhook_message())
    }
}

#[cfg(test)]
mod tests {
    use crate::ServiceError;
    use crate::testing;
    use models::agent::Permission;
    use models::queuecall::{Queuecall, QueuecallStatus};
    use models::Identity;
    use requesthandler::testutils::{json_response, status_response};
    use requesthandler::{QueueName, RequestMethod};
    use uuid::Uuid;

    fn queuecall(customer_id: Uuid) -> Queuecall {
        Queuecall {
            identity: Identity::new(Uuid::new_v4(), customer_id),
            queue_id: Uuid::new_v4(),
            reference_type: "call".into(),
            reference_id: Uuid::new_v4(),
            confbridge_id: Uuid::new_v4(),
            status: QueuecallStatus::Waiting,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_queuecall_get_hides_bridge() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_ADMIN);
        let qc = queuecall(customer_id);
        mock.expect(
            QueueName::Queue.as_str(),
            RequestMethod::Get,
            &format!("/v1/queuecalls/{}", qc.identity.id),
            json_response(&qc),
        );

        let res = handler.queuecall_get(&a, qc.identity.id).await.unwrap();
        assert_eq!(res.status, QueuecallStatus::Waiting);
        let json = serde_json::to_value(&res).unwrap();
        assert!(json.get("confbridge_id").is_none());
        assert!(json.get("forward_action_id").is_none());
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_queuecall_kick() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_MANAGER);
        let qc = queuecall(customer_id);
        mock.expect(
            QueueName::Queue.as_str(),
            RequestMethod::Get,
            &format!("/v1/queuecalls/{}", qc.identity.id),
            json_response(&qc),
        );
        mock.expect(
            QueueName::Queue.as_str(),
            RequestMethod::Post,
            &format!("/v1/queuecalls/{}/kick", qc.identity.id),
            json_response(&Queuecall {
                status: QueuecallStatus::Kicking,
                ..qc.clone()
            }),
        );

        let res = handler.queuecall_kick(&a, qc.identity.id).await.unwrap();
        assert_eq!(res.status, QueuecallStatus::Kicking);
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_queuecall_kick_by_reference_other_customer() {
        let (handler, mock) = testing::handler();
        let a = testing::agent(Uuid::new_v4(), Permission::CUSTOMER_ADMIN);
        let qc = queuecall(Uuid::new_v4());
        mock.expect(
            QueueName::Queue.as_str(),
            RequestMethod::Get,
            &format!("/v1/queuecalls/reference_id/{}", qc.reference_id),
            json_response(&qc),
        );

        let err = handler
            .queuecall_kick_by_reference_id(&a, qc.reference_id)
            .await
            .unwrap_err();
        assert!(err.is_forbidden());
        assert_eq!(mock.calls().len(), 1);
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_queuecall_kick_by_reference_not_queued() {
        let (handler, mock) = testing::handler();
        let a = testing::agent(Uuid::new_v4(), Permission::CUSTOMER_ADMIN);
        let reference_id = Uuid::new_v4();
        mock.expect(
            QueueName::Queue.as_str(),
            RequestMethod::Get,
            &format!("/v1/queuecalls/reference_id/{reference_id}"),
            status_response(404),
        );

        let err = handler
            .queuecall_kick_by_reference_id(&a, reference_id)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound("queuecall")));
        mock.assert_done();
    }
}
