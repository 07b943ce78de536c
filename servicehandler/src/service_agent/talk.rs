use super::agent_owned_filters;
use crate::{Result, ServiceError, ServiceHandler, convert_list, fetch};
use models::agent::Agent;
use models::filter::{FIELD_CUSTOMER_ID, FIELD_DELETED, Filters};
use models::talk::{Chat, ChatType, Media, Message, MessageType, Participant, ParticipantInput};
use models::{Owner, WebhookConvert};
use serde_json::json;
use std::collections::HashSet;
use uuid::Uuid;

/// Whether `a` may put `participant` into `chat`.
///
/// Members may invite anyone. Anybody else may only join an open talk channel of their
/// own customer, and only as themselves.
pub(crate) fn can_add_participant(chat: &Chat, a: &Agent, participant: &ParticipantInput) -> bool {
    if chat.has_agent(a.id()) {
        return true;
    }

    chat.kind == ChatType::Talk
        && chat.identity.customer_id == a.customer_id()
        && Owner {
            owner_type: participant.owner_type.clone(),
            owner_id: participant.owner_id,
        }
        .is_agent(a.id())
}

/// Merges the open talk channels with the agent's private chats.
///
/// Private rows that are talk channels or already present are skipped. The result is
/// ordered newest first and cut to `size`.
fn merge_chats(channels: Vec<Chat>, private: Vec<Chat>, size: u64) -> Vec<Chat> {
    let mut seen = HashSet::new();
    let mut res: Vec<Chat> = channels
        .into_iter()
        .filter(|c| seen.insert(c.identity.id))
        .collect();
    res.extend(
        private
            .into_iter()
            .filter(|c| c.kind != ChatType::Talk && seen.insert(c.identity.id)),
    );

    res.sort_by(|x, y| y.tm_create.cmp(&x.tm_create));
    res.truncate(usize::try_from(size).unwrap_or(usize::MAX));
    res
}

fn channel_filters(customer_id: Uuid) -> Filters {
    let mut filters = Filters::new();
    filters.insert(FIELD_CUSTOMER_ID.into(), json!(customer_id));
    filters.insert("type".into(), json!(ChatType::Talk.as_str()));
    filters.insert(FIELD_DELETED.into(), json!(false));
    filters
}

impl ServiceHandler {
    /// True when the chat exists and lists the agent as a participant. A failed lookup
    /// counts as "not a participant".
    pub(crate) async fn is_participant_of_talk(&self, agent_id: Uuid, chat_id: Uuid) -> bool {
        match fetch(self.req.talk_v1_chat_get(chat_id)).await {
            Ok(chat) => chat.has_agent(agent_id),
            Err(err) => {
                tracing::debug!(%chat_id, %agent_id, error = %err, "could not get the chat");
                false
            }
        }
    }

    /// Readers of a chat: every agent of the customer for talk channels, the
    /// participants for direct and group chats.
    pub(crate) async fn can_access_chat(&self, a: &Agent, chat_id: Uuid) -> bool {
        match fetch(self.req.talk_v1_chat_get(chat_id)).await {
            Ok(chat) => {
                (chat.kind == ChatType::Talk && chat.identity.customer_id == a.customer_id())
                    || chat.has_agent(a.id())
            }
            Err(err) => {
                tracing::debug!(%chat_id, agent_id = %a.id(), error = %err, "could not get the chat");
                false
            }
        }
    }

    async fn ensure_participant(&self, a: &Agent, chat_id: Uuid) -> Result<()> {
        if !self.is_participant_of_talk(a.id(), chat_id).await {
            return Err(ServiceError::NotParticipant);
        }
        Ok(())
    }

    pub async fn service_agent_talk_chat_get(&self, a: &Agent, chat_id: Uuid) -> Result<Chat> {
        let res = fetch(self.req.talk_v1_chat_get(chat_id)).await?;
        if !res.has_agent(a.id()) {
            return Err(ServiceError::NotParticipant);
        }
        Ok(res.convert_webhook_message())
    }

    /// The customer's talk channels plus the direct and group chats the agent owns.
    pub async fn service_agent_talk_chat_list(&self, a: &Agent, size: u64, token: &str) -> Result<Vec<Chat>> {
        let token = self.token_or_now(token);

        let channels = self
            .req
            .talk_v1_chat_list(&token, size, &channel_filters(a.customer_id()))
            .await?;
        let private = self
            .req
            .talk_v1_chat_list(&token, size, &agent_owned_filters(a.id()))
            .await?;

        Ok(convert_list(merge_chats(channels, private, size)))
    }

    /// Talk channels of the agent's customer, joined or not.
    pub async fn service_agent_talk_channel_list(&self, a: &Agent, size: u64, token: &str) -> Result<Vec<Chat>> {
        let res = self
            .req
            .talk_v1_chat_list(&self.token_or_now(token), size, &channel_filters(a.customer_id()))
            .await?;
        Ok(convert_list(res))
    }

    /// Creates a chat with the agent as creator. The talk manager adds the creator as
    /// the first participant.
    pub async fn service_agent_talk_chat_create(
        &self,
        a: &Agent,
        kind: ChatType,
        name: &str,
        detail: &str,
        participants: &[ParticipantInput],
    ) -> Result<Chat> {
        let res = self
            .req
            .talk_v1_chat_create(
                a.customer_id(),
                kind,
                name,
                detail,
                &Owner::agent(a.id()),
                participants,
            )
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn service_agent_talk_chat_update(
        &self,
        a: &Agent,
        chat_id: Uuid,
        name: Option<&str>,
        detail: Option<&str>,
    ) -> Result<Chat> {
        self.ensure_participant(a, chat_id).await?;

        let res = self.req.talk_v1_chat_update(chat_id, name, detail).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn service_agent_talk_chat_delete(&self, a: &Agent, chat_id: Uuid) -> Result<Chat> {
        self.ensure_participant(a, chat_id).await?;

        let res = self.req.talk_v1_chat_delete(chat_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn service_agent_talk_participant_list(&self, a: &Agent, chat_id: Uuid) -> Result<Vec<Participant>> {
        self.ensure_participant(a, chat_id).await?;

        let res = self.req.talk_v1_participant_list(chat_id).await?;
        Ok(convert_list(res))
    }

    pub async fn service_agent_talk_participant_create(
        &self,
        a: &Agent,
        chat_id: Uuid,
        participant: &ParticipantInput,
    ) -> Result<Participant> {
        let chat = fetch(self.req.talk_v1_chat_get(chat_id)).await?;
        if !can_add_participant(&chat, a, participant) {
            return Err(ServiceError::NotParticipant);
        }

        let res = self.req.talk_v1_participant_create(chat_id, participant).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn service_agent_talk_participant_delete(
        &self,
        a: &Agent,
        chat_id: Uuid,
        participant_id: Uuid,
    ) -> Result<Participant> {
        self.ensure_participant(a, chat_id).await?;

        let res = self.req.talk_v1_participant_delete(chat_id, participant_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn service_agent_talk_message_get(&self, a: &Agent, message_id: Uuid) -> Result<Message> {
        let res = fetch(self.req.talk_v1_message_get(message_id)).await?;
        self.ensure_participant(a, res.chat_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn service_agent_talk_message_list(
        &self,
        a: &Agent,
        chat_id: Uuid,
        size: u64,
        token: &str,
    ) -> Result<Vec<Message>> {
        if !self.can_access_chat(a, chat_id).await {
            return Err(ServiceError::NotParticipant);
        }

        let mut filters = Filters::new();
        filters.insert("chat_id".into(), json!(chat_id));
        filters.insert(FIELD_DELETED.into(), json!(false));
        let res = self
            .req
            .talk_v1_message_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn service_agent_talk_message_create(
        &self,
        a: &Agent,
        chat_id: Uuid,
        parent_id: Option<Uuid>,
        kind: MessageType,
        text: &str,
        medias: &[Media],
    ) -> Result<Message> {
        self.ensure_participant(a, chat_id).await?;

        let res = self
            .req
            .talk_v1_message_create(chat_id, parent_id, &Owner::agent(a.id()), kind, text, medias)
            .await?;
        Ok(res.convert_webhook_message())
    }

    /// Deletes a message the agent wrote.
    pub async fn service_agent_talk_message_delete(&self, a: &Agent, message_id: Uuid) -> Result<Message> {
        let msg = fetch(self.req.talk_v1_message_get(message_id)).await?;
        if !msg.owner.is_agent(a.id()) {
            return Err(ServiceError::NotOwner("message"));
        }

        let res = self.req.talk_v1_message_delete(message_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn service_agent_talk_message_reaction_create(
        &self,
        a: &Agent,
        message_id: Uuid,
        emoji: &str,
    ) -> Result<Message> {
        let msg = fetch(self.req.talk_v1_message_get(message_id)).await?;
        self.ensure_participant(a, msg.chat_id).await?;

        let res = self
            .req
            .talk_v1_message_reaction_create(message_id, &Owner::agent(a.id()), emoji)
            .await?;
        Ok(res.convert_webhook_message())
    }
}
