use crate::{QueueName, RequestHandler, RequestMethod, Result};
use models::Owner;
use models::filter::Filters;
use models::talk::{Chat, ChatType, Media, Message, MessageType, Participant, ParticipantInput};
use serde_json::json;
use uuid::Uuid;

const RESOURCE_CHATS: &str = "talk/chats";
const RESOURCE_PARTICIPANTS: &str = "talk/participants";
const RESOURCE_MESSAGES: &str = "talk/messages";

impl RequestHandler {
    pub async fn talk_v1_chat_get(&self, chat_id: Uuid) -> Result<Chat> {
        self.request(
            QueueName::Talk.as_str(),
            &format!("/v1/chats/{chat_id}"),
            RequestMethod::Get,
            RESOURCE_CHATS,
            None,
        )
        .await
    }

    pub async fn talk_v1_chat_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Chat>> {
        self.request_list(QueueName::Talk, "/v1/chats", RESOURCE_CHATS, token, size, filters)
            .await
    }

    pub async fn talk_v1_chat_create(
        &self,
        customer_id: Uuid,
        kind: ChatType,
        name: &str,
        detail: &str,
        creator: &Owner,
        participants: &[ParticipantInput],
    ) -> Result<Chat> {
        self.request(
            QueueName::Talk.as_str(),
            "/v1/chats",
            RequestMethod::Post,
            RESOURCE_CHATS,
            Some(json!({
                "customer_id": customer_id,
                "type": kind,
                "name": name,
                "detail": detail,
                "creator_type": creator.owner_type,
                "creator_id": creator.owner_id,
                "participants": participants,
            })),
        )
        .await
    }

    /// `None` keeps the current value.
    pub async fn talk_v1_chat_update(
        &self,
        chat_id: Uuid,
        name: Option<&str>,
        detail: Option<&str>,
    ) -> Result<Chat> {
        let mut data = serde_json::Map::new();
        if let Some(name) = name {
            data.insert("name".into(), json!(name));
        }
        if let Some(detail) = detail {
            data.insert("detail".into(), json!(detail));
        }
        self.request(
            QueueName::Talk.as_str(),
            &format!("/v1/chats/{chat_id}"),
            RequestMethod::Put,
            RESOURCE_CHATS,
            Some(data.into()),
        )
        .await
    }

    pub async fn talk_v1_chat_delete(&self, chat_id: Uuid) -> Result<Chat> {
        self.request(
            QueueName::Talk.as_str(),
            &format!("/v1/chats/{chat_id}"),
            RequestMethod::Delete,
            RESOURCE_CHATS,
            None,
        )
        .await
    }

    pub async fn talk_v1_participant_list(&self, chat_id: Uuid) -> Result<Vec<Participant>> {
        self.request(
            QueueName::Talk.as_str(),
            &format!("/v1/chats/{chat_id}/participants"),
            RequestMethod::Get,
            RESOURCE_PARTICIPANTS,
            None,
        )
        .await
    }

    pub async fn talk_v1_participant_create(
        &self,
        chat_id: Uuid,
        participant: &ParticipantInput,
    ) -> Result<Participant> {
        self.request(
            QueueName::Talk.as_str(),
            &format!("/v1/chats/{chat_id}/participants"),
            RequestMethod::Post,
            RESOURCE_PARTICIPANTS,
            Some(serde_json::to_value(participant)?),
        )
        .await
    }

    pub async fn talk_v1_participant_delete(
        &self,
        chat_id: Uuid,
        participant_id: Uuid,
    ) -> Result<Participant> {
        self.request(
            QueueName::Talk.as_str(),
            &format!("/v1/chats/{chat_id}/participants/{participant_id}"),
            RequestMethod::Delete,
            RESOURCE_PARTICIPANTS,
            None,
        )
        .await
    }

    pub async fn talk_v1_message_get(&self, message_id: Uuid) -> Result<Message> {
        self.request(
            QueueName::Talk.as_str(),
            &format!("/v1/messages/{message_id}"),
            RequestMethod::Get,
            RESOURCE_MESSAGES,
            None,
        )
        .await
    }

    pub async fn talk_v1_message_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Message>> {
        self.request_list(
            QueueName::Talk,
            "/v1/messages",
            RESOURCE_MESSAGES,
            token,
            size,
            filters,
        )
        .await
    }

    pub async fn talk_v1_message_create(
        &self,
        chat_id: Uuid,
        parent_id: Option<Uuid>,
        owner: &Owner,
        kind: MessageType,
        text: &str,
        medias: &[Media],
    ) -> Result<Message> {
        self.request(
            QueueName::Talk.as_str(),
            "/v1/messages",
            RequestMethod::Post,
            RESOURCE_MESSAGES,
            Some(json!({
                "chat_id": chat_id,
                "parent_id": parent_id,
                "owner_type": owner.owner_type,
                "owner_id": owner.owner_id,
                "type": kind,
                "text": text,
                "medias": medias,
            })),
        )
        .await
    }

    pub async fn talk_v1_message_delete(&self, message_id: Uuid) -> Result<Message> {
        self.request(
            QueueName::Talk.as_str(),
            &format!("/v1/messages/{message_id}"),
            RequestMethod::Delete,
            RESOURCE_MESSAGES,
            None,
        )
        .await
    }

    pub async fn talk_v1_message_reaction_create(
        &self,
        message_id: Uuid,
        owner: &Owner,
        emoji: &str,
    ) -> Result<Message> {
        self.request(
            QueueName::Talk.as_str(),
            &format!("/v1/messages/{message_id}/reactions"),
            RequestMethod::Post,
            RESOURCE_MESSAGES,
            Some(json!({
                "owner_type": owner.owner_type,
                "owner_id": owner.owner_id,
                "emoji": emoji,
            })),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::{MockSock, json_response};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_chat_update_sends_only_given_fields() {
        let chat_id = Uuid::parse_str("0c4fd2de-1b6f-11f0-8f21-8fb7d0a9f1e3").unwrap();

        let mock = Arc::new(MockSock::new());
        mock.expect_with_body(
            QueueName::Talk.as_str(),
            RequestMethod::Put,
            &format!("/v1/chats/{chat_id}"),
            json!({"name": "sales"}),
            json_response(&Chat::default()),
        );

        let handler = RequestHandler::new(mock.clone(), "api-manager");
        handler
            .talk_v1_chat_update(chat_id, Some("sales"), None)
            .await
            .unwrap();
        mock.assert_done();
    }
}
