use crate::{QueueName, RequestHandler, RequestMethod, Result};
use models::conversation::{Account, AccountType, Conversation, Media, Message};
use models::filter::Filters;
use serde_json::json;
use uuid::Uuid;

const RESOURCE_CONVERSATIONS: &str = "conversation/conversations";
const RESOURCE_MESSAGES: &str = "conversation/messages";
const RESOURCE_ACCOUNTS: &str = "conversation/accounts";

impl RequestHandler {
    pub async fn conversation_v1_conversation_get(&self, conversation_id: Uuid) -> Result<Conversation> {
        self.request(
            QueueName::Conversation.as_str(),
            &format!("/v1/conversations/{conversation_id}"),
            RequestMethod::Get,
            RESOURCE_CONVERSATIONS,
            None,
        )
        .await
    }

    pub async fn conversation_v1_conversation_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Conversation>> {
        self.request_list(
            QueueName::Conversation,
            "/v1/conversations",
            RESOURCE_CONVERSATIONS,
            token,
            size,
            filters,
        )
        .await
    }

    pub async fn conversation_v1_conversation_update(
        &self,
        conversation_id: Uuid,
        name: &str,
        detail: &str,
    ) -> Result<Conversation> {
        self.request(
            QueueName::Conversation.as_str(),
            &format!("/v1/conversations/{conversation_id}"),
            RequestMethod::Put,
            RESOURCE_CONVERSATIONS,
            Some(json!({"name": name, "detail": detail})),
        )
        .await
    }

    pub async fn conversation_v1_message_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Message>> {
        self.request_list(
            QueueName::Conversation,
            "/v1/messages",
            RESOURCE_MESSAGES,
            token,
            size,
            filters,
        )
        .await
    }

    pub async fn conversation_v1_message_send(
        &self,
        conversation_id: Uuid,
        text: &str,
        medias: &[Media],
    ) -> Result<Message> {
        self.request(
            QueueName::Conversation.as_str(),
            &format!("/v1/conversations/{conversation_id}/messages"),
            RequestMethod::Post,
            RESOURCE_MESSAGES,
            Some(json!({"text": text, "medias": medias})),
        )
        .await
    }

    pub async fn conversation_v1_account_create(
        &self,
        customer_id: Uuid,
        kind: AccountType,
        name: &str,
        detail: &str,
        secret: &str,
        token: &str,
    ) -> Result<Account> {
        self.request(
            QueueName::Conversation.as_str(),
            "/v1/accounts",
            RequestMethod::Post,
            RESOURCE_ACCOUNTS,
            Some(json!({
                "customer_id": customer_id,
                "type": kind,
                "name": name,
                "detail": detail,
                "secret": secret,
                "token": token,
            })),
        )
        .await
    }

    pub async fn conversation_v1_account_get(&self, account_id: Uuid) -> Result<Account> {
        self.request(
            QueueName::Conversation.as_str(),
            &format!("/v1/accounts/{account_id}"),
            RequestMethod::Get,
            RESOURCE_ACCOUNTS,
            None,
        )
        .await
    }

    pub async fn conversation_v1_account_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Account>> {
        self.request_list(
            QueueName::Conversation,
            "/v1/accounts",
            RESOURCE_ACCOUNTS,
            token,
            size,
            filters,
        )
        .await
    }

    pub async fn conversation_v1_account_update(
        &self,
        account_id: Uuid,
        name: &str,
        detail: &str,
        secret: &str,
        token: &str,
    ) -> Result<Account> {
        self.request(
            QueueName::Conversation.as_str(),
            &format!("/v1/accounts/{account_id}"),
            RequestMethod::Put,
            RESOURCE_ACCOUNTS,
            Some(json!({"name": name, "detail": detail, "secret": secret, "token": token})),
        )
        .await
    }

    pub async fn conversation_v1_account_delete(&self, account_id: Uuid) -> Result<Account> {
        self.request(
            QueueName::Conversation.as_str(),
            &format!("/v1/accounts/{account_id}"),
            RequestMethod::Delete,
            RESOURCE_ACCOUNTS,
            None,
        )
        .await
    }
}
