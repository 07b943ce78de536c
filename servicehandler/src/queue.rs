use crate::permission::{MANAGER_MASK, ensure_permission};
use crate::{RawFilters, Result, ServiceHandler, convert_list, customer_filters, fetch_authorized};
use models::agent::Agent;
use models::queue::{Queue, QueueWebhookMessage, RoutingMethod};
use models::WebhookConvert;
use requesthandler::queue::QueueFields;
use uuid::Uuid;

impl ServiceHandler {
    async fn queue_get_authorized(&self, a: &Agent, queue_id: Uuid) -> Result<Queue> {
        fetch_authorized(a, MANAGER_MASK, self.req.queue_v1_queue_get(queue_id)).await
    }

    pub async fn queue_create(&self, a: &Agent, fields: &QueueFields) -> Result<QueueWebhookMessage> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let res = self.req.queue_v1_queue_create(a.customer_id(), fields).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn queue_get(&self, a: &Agent, queue_id: Uuid) -> Result<QueueWebhookMessage> {
        let res = self.queue_get_authorized(a, queue_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn queue_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<QueueWebhookMessage>> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let filters = customer_filters::<Queue>(a, filters)?;
        let res = self
            .req
            .queue_v1_queue_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn queue_delete(&self, a: &Agent, queue_id: Uuid) -> Result<QueueWebhookMessage> {
        self.queue_get_authorized(a, queue_id).await?;

        let res = self.req.queue_v1_queue_delete(queue_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn queue_update(
        &self,
        a: &Agent,
        queue_id: Uuid,
        fields: &QueueFields,
    ) -> Result<QueueWebhookMessage> {
        self.queue_get_authorized(a, queue_id).await?;

        let res = self.req.queue_v1_queue_update(queue_id, fields).await?;
        Ok(res.convert_webhook_message())
    }

    /// Replaces the agent tags the queue routes calls to.
    pub async fn queue_update_tag_ids(
        &self,
        a: &Agent,
        queue_id: Uuid,
        tag_ids: &[Uuid],
    ) -> Result<QueueWebhookMessage> {
        self.queue_get_authorized(a, queue_id).await?;

        let res = self.req.queue_v1_queue_update_tag_ids(queue_id, tag_ids).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn queue_update_routing_method(
        &self,
        a: &Agent,
        queue_id: Uuid,
        routing_method: RoutingMethod,
    ) -> Result<QueueWebhookMessage> {
        self.queue_get_authorized(a, queue_id).await?;

        let res = self
            .req
            .queue_v1_queue_update_routing_method(queue_id, routing_method)
            .await?;
        Ok(res.convert_webhook_message())
    }
}

#[cfg(test)]
mod tests {
    use crate::ServiceError;
    use crate::testing;
    use models::agent::Permission;
    use models::queue::{Queue, RoutingMethod};
    use models::Identity;
    use requesthandler::queue::QueueFields;
    use requesthandler::testutils::json_response;
    use requesthandler::{QueueName, RequestMethod};
    use serde_json::json;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_queue_create() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_MANAGER);
        let fields = QueueFields {
            name: "support".into(),
            routing_method: RoutingMethod::Random,
            wait_timeout: 60000,
            service_timeout: 600000,
            ..Default::default()
        };
        let queue = Queue {
            identity: Identity::new(Uuid::new_v4(), customer_id),
            name: "support".into(),
            routing_method: RoutingMethod::Random,
            wait_flow_id: Uuid::new_v4(),
            ..Default::default()
        };
        mock.expect(
            QueueName::Queue.as_str(),
            RequestMethod::Post,
            "/v1/queues",
            json_response(&queue),
        );

        let res = handler.queue_create(&a, &fields).await.unwrap();
        assert_eq!(res.name, "support");
        assert_eq!(res.routing_method, RoutingMethod::Random);
        let json = serde_json::to_value(&res).unwrap();
        assert!(json.get("wait_flow_id").is_none());
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_queue_update_routing_method() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_ADMIN);
        let queue = Queue {
            identity: Identity::new(Uuid::new_v4(), customer_id),
            ..Default::default()
        };
        mock.expect(
            QueueName::Queue.as_str(),
            RequestMethod::Get,
            &format!("/v1/queues/{}", queue.identity.id),
            json_response(&queue),
        );
        mock.expect_with_body(
            QueueName::Queue.as_str(),
            RequestMethod::Put,
            &format!("/v1/queues/{}/routing_method", queue.identity.id),
            json!({"routing_method": "random"}),
            json_response(&queue),
        );

        handler
            .queue_update_routing_method(&a, queue.identity.id, RoutingMethod::Random)
            .await
            .unwrap();
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_queue_get_as_agent() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_AGENT);
        let queue = Queue {
            identity: Identity::new(Uuid::new_v4(), customer_id),
            ..Default::default()
        };
        mock.expect(
            QueueName::Queue.as_str(),
            RequestMethod::Get,
            &format!("/v1/queues/{}", queue.identity.id),
            json_response(&queue),
        );

        let err = handler.queue_get(&a, queue.identity.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NoPermission));
        mock.assert_done();
    }
}
