use crate::permission::{MANAGER_MASK, ensure_permission};
use crate::{RawFilters, Result, ServiceHandler, convert_list, customer_filters, fetch_authorized};
use models::agent::Agent;
use models::conversation::{
    Account, AccountType, AccountWebhookMessage, Conversation, Media, MessageWebhookMessage,
};
use models::filter::{FIELD_DELETED, Filters};
use models::WebhookConvert;
use serde_json::json;
use uuid::Uuid;

impl ServiceHandler {
    async fn conversation_get_authorized(&self, a: &Agent, conversation_id: Uuid) -> Result<Conversation> {
        fetch_authorized(
            a,
            MANAGER_MASK,
            self.req.conversation_v1_conversation_get(conversation_id),
        )
        .await
    }

    pub async fn conversation_get(&self, a: &Agent, conversation_id: Uuid) -> Result<Conversation> {
        let res = self.conversation_get_authorized(a, conversation_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn conversation_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<Conversation>> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let filters = customer_filters::<Conversation>(a, filters)?;
        let res = self
            .req
            .conversation_v1_conversation_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn conversation_update(
        &self,
        a: &Agent,
        conversation_id: Uuid,
        name: &str,
        detail: &str,
    ) -> Result<Conversation> {
        self.conversation_get_authorized(a, conversation_id).await?;

        let res = self
            .req
            .conversation_v1_conversation_update(conversation_id, name, detail)
            .await?;
        Ok(res.convert_webhook_message())
    }

    /// Messages exchanged in one conversation, newest first.
    pub async fn conversation_message_list(
        &self,
        a: &Agent,
        conversation_id: Uuid,
        size: u64,
        token: &str,
    ) -> Result<Vec<MessageWebhookMessage>> {
        self.conversation_get_authorized(a, conversation_id).await?;

        let mut filters = Filters::new();
        filters.insert("conversation_id".into(), json!(conversation_id));
        filters.insert(FIELD_DELETED.into(), json!(false));
        let res = self
            .req
            .conversation_v1_message_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn conversation_message_send(
        &self,
        a: &Agent,
        conversation_id: Uuid,
        text: &str,
        medias: &[Media],
    ) -> Result<MessageWebhookMessage> {
        self.conversation_get_authorized(a, conversation_id).await?;

        let res = self
            .req
            .conversation_v1_message_send(conversation_id, text, medias)
            .await?;
        Ok(res.convert_webhook_message())
    }

    async fn conversation_account_get_authorized(&self, a: &Agent, account_id: Uuid) -> Result<Account> {
        fetch_authorized(a, MANAGER_MASK, self.req.conversation_v1_account_get(account_id)).await
    }

    /// Registers a messaging provider account. `secret` and `token` are never returned.
    pub async fn conversation_account_create(
        &self,
        a: &Agent,
        kind: AccountType,
        name: &str,
        detail: &str,
        secret: &str,
        token: &str,
    ) -> Result<AccountWebhookMessage> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let res = self
            .req
            .conversation_v1_account_create(a.customer_id(), kind, name, detail, secret, token)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn conversation_account_get(&self, a: &Agent, account_id: Uuid) -> Result<AccountWebhookMessage> {
        let res = self.conversation_account_get_authorized(a, account_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn conversation_account_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<AccountWebhookMessage>> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let filters = customer_filters::<Account>(a, filters)?;
        let res = self
            .req
            .conversation_v1_account_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn conversation_account_update(
        &self,
        a: &Agent,
        account_id: Uuid,
        name: &str,
        detail: &str,
        secret: &str,
        token: &str,
    ) -> Result<AccountWebhookMessage> {
        self.conversation_account_get_authorized(a, account_id).await?;

        let res = self
            .req
            .conversation_v1_account_update(account_id, name, detail, secret, token)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn conversation_account_delete(&self, a: &Agent, account_id: Uuid) -> Result<AccountWebhookMessage> {
        self.conversation_account_get_authorized(a, account_id).await?;

        let res = self.req.conversation_v1_account_delete(account_id).await?;
        Ok(res.convert_webhook_message())
    }
}

#[cfg(test)]
mod tests {
    use crate::ServiceError;
    use crate::testing;
    use models::agent::Permission;
    use models::conversation::{Account, Conversation, Message};
    use models::Identity;
    use requesthandler::testutils::json_response;
    use requesthandler::{QueueName, RequestMethod};
    use serde_json::json;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_conversation_message_list() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_ADMIN);
        let conversation = Conversation {
            identity: Identity::new(Uuid::new_v4(), customer_id),
            ..Default::default()
        };
        let message = Message {
            identity: Identity::new(Uuid::new_v4(), customer_id),
            conversation_id: conversation.identity.id,
            transaction_id: "SM1a2b3c".into(),
            text: "hello".into(),
            ..Default::default()
        };
        mock.expect(
            QueueName::Conversation.as_str(),
            RequestMethod::Get,
            &format!("/v1/conversations/{}", conversation.identity.id),
            json_response(&conversation),
        );
        mock.expect_with_body(
            QueueName::Conversation.as_str(),
            RequestMethod::Get,
            &format!("/v1/messages?page_token={}&page_size=10", testing::now_token_escaped()),
            json!({"conversation_id": conversation.identity.id, "deleted": false}),
            json_response(&vec![message.clone()]),
        );

        let res = handler
            .conversation_message_list(&a, conversation.identity.id, 10, "")
            .await
            .unwrap();
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].identity, message.identity);
        assert_eq!(res[0].text, "hello");
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_conversation_account_get_hides_secrets() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_ADMIN);
        let account = Account {
            identity: Identity::new(Uuid::new_v4(), customer_id),
            secret: "line-secret".into(),
            token: "line-token".into(),
            ..Default::default()
        };
        mock.expect(
            QueueName::Conversation.as_str(),
            RequestMethod::Get,
            &format!("/v1/accounts/{}", account.identity.id),
            json_response(&account),
        );

        let res = handler
            .conversation_account_get(&a, account.identity.id)
            .await
            .unwrap();
        let json = serde_json::to_value(&res).unwrap();
        assert!(json.get("secret").is_none());
        assert!(json.get("token").is_none());
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_conversation_update_other_customer() {
        let (handler, mock) = testing::handler();
        let a = testing::agent(Uuid::new_v4(), Permission::CUSTOMER_ADMIN);
        let conversation = Conversation {
            identity: Identity::new(Uuid::new_v4(), Uuid::new_v4()),
            ..Default::default()
        };
        mock.expect(
            QueueName::Conversation.as_str(),
            RequestMethod::Get,
            &format!("/v1/conversations/{}", conversation.identity.id),
            json_response(&conversation),
        );

        let err = handler
            .conversation_update(&a, conversation.identity.id, "name", "detail")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NoPermission));
        mock.assert_done();
    }
}
