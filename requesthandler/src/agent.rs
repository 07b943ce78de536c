use crate::{QueueName, RequestHandler, RequestMethod, Result};
use models::address::Address;
use models::agent::{Agent, Permission, RingMethod, Status};
use models::filter::Filters;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

const RESOURCE: &str = "agent/agents";

/// Body of an agent creation request.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AgentCreate {
    pub customer_id: Uuid,
    pub username: String,
    pub password: String,
    pub name: String,
    pub detail: String,
    pub ring_method: RingMethod,
    pub permission: Permission,
    pub tag_ids: Vec<Uuid>,
    pub addresses: Vec<Address>,
}

impl RequestHandler {
    pub async fn agent_v1_agent_create(&self, req: &AgentCreate) -> Result<Agent> {
        self.request(
            QueueName::Agent.as_str(),
            "/v1/agents",
            RequestMethod::Post,
            RESOURCE,
            Some(serde_json::to_value(req)?),
        )
        .await
    }

    pub async fn agent_v1_agent_get(&self, agent_id: Uuid) -> Result<Agent> {
        self.request(
            QueueName::Agent.as_str(),
            &format!("/v1/agents/{agent_id}"),
            RequestMethod::Get,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn agent_v1_agent_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Agent>> {
        self.request_list(QueueName::Agent, "/v1/agents", RESOURCE, token, size, filters)
            .await
    }

    pub async fn agent_v1_agent_delete(&self, agent_id: Uuid) -> Result<Agent> {
        self.request(
            QueueName::Agent.as_str(),
            &format!("/v1/agents/{agent_id}"),
            RequestMethod::Delete,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn agent_v1_agent_update(
        &self,
        agent_id: Uuid,
        name: &str,
        detail: &str,
        ring_method: RingMethod,
    ) -> Result<Agent> {
        self.request(
            QueueName::Agent.as_str(),
            &format!("/v1/agents/{agent_id}"),
            RequestMethod::Put,
            RESOURCE,
            Some(json!({"name": name, "detail": detail, "ring_method": ring_method})),
        )
        .await
    }

    pub async fn agent_v1_agent_update_addresses(
        &self,
        agent_id: Uuid,
        addresses: &[Address],
    ) -> Result<Agent> {
        self.request(
            QueueName::Agent.as_str(),
            &format!("/v1/agents/{agent_id}/addresses"),
            RequestMethod::Put,
            RESOURCE,
            Some(json!({ "addresses": addresses })),
        )
        .await
    }

    pub async fn agent_v1_agent_update_tag_ids(
        &self,
        agent_id: Uuid,
        tag_ids: &[Uuid],
    ) -> Result<Agent> {
        self.request(
            QueueName::Agent.as_str(),
            &format!("/v1/agents/{agent_id}/tag_ids"),
            RequestMethod::Put,
            RESOURCE,
            Some(json!({ "tag_ids": tag_ids })),
        )
        .await
    }

    pub async fn agent_v1_agent_update_status(&self, agent_id: Uuid, status: Status) -> Result<Agent> {
        self.request(
            QueueName::Agent.as_str(),
            &format!("/v1/agents/{agent_id}/status"),
            RequestMethod::Put,
            RESOURCE,
            Some(json!({ "status": status })),
        )
        .await
    }

    pub async fn agent_v1_agent_update_permission(
        &self,
        agent_id: Uuid,
        permission: Permission,
    ) -> Result<Agent> {
        self.request(
            QueueName::Agent.as_str(),
            &format!("/v1/agents/{agent_id}/permission"),
            RequestMethod::Put,
            RESOURCE,
            Some(json!({ "permission": permission })),
        )
        .await
    }

    pub async fn agent_v1_agent_update_password(&self, agent_id: Uuid, password: &str) -> Result<Agent> {
        self.request(
            QueueName::Agent.as_str(),
            &format!("/v1/agents/{agent_id}/password"),
            RequestMethod::Put,
            RESOURCE,
            Some(json!({ "password": password })),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::{MockSock, json_response};
    use models::Identity;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_agent_update_status() {
        let id = Uuid::parse_str("c1b9f2e4-2a32-11ef-9d0b-5b1e3f0c2a44").unwrap();
        let agent = Agent {
            identity: Identity::new(id, Uuid::nil()),
            username: "test@voipbin.net".into(),
            status: Status::Away,
            ..Default::default()
        };

        let mock = Arc::new(MockSock::new());
        mock.expect_with_body(
            QueueName::Agent.as_str(),
            RequestMethod::Put,
            &format!("/v1/agents/{id}/status"),
            json!({"status": "away"}),
            json_response(&agent),
        );

        let handler = RequestHandler::new(mock.clone(), "api-manager");
        let res = handler.agent_v1_agent_update_status(id, Status::Away).await.unwrap();
        assert_eq!(res, agent);
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_agent_list_sends_filters() {
        let mut filters = Filters::new();
        filters.insert("customer_id".into(), json!("91aed1d4-7fe2-11ec-848d-97c8e986acfc"));
        filters.insert("deleted".into(), json!(false));

        let mock = Arc::new(MockSock::new());
        mock.expect_with_body(
            QueueName::Agent.as_str(),
            RequestMethod::Get,
            "/v1/agents?page_token=2021-11-23+17%3A55%3A39.712000&page_size=10",
            json!({"customer_id": "91aed1d4-7fe2-11ec-848d-97c8e986acfc", "deleted": false}),
            json_response(&Vec::<Agent>::new()),
        );

        let handler = RequestHandler::new(mock.clone(), "api-manager");
        let res = handler
            .agent_v1_agent_list("2021-11-23 17:55:39.712000", 10, &filters)
            .await
            .unwrap();
        assert!(res.is_empty());
        mock.assert_done();
    }
}
