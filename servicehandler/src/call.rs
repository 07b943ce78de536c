use crate::permission::{MANAGER_MASK, ensure_permission};
use crate::{RawFilters, Result, ServiceHandler, convert_list, customer_filters, fetch_authorized};
use models::address::Address;
use models::agent::Agent;
use models::call::{Call, CallWebhookMessage, Groupcall, GroupcallWebhookMessage, MediaDirection};
use models::flow::Action;
use models::WebhookConvert;
use requesthandler::call::CallCreate;
use uuid::Uuid;

const TEMP_FLOW_DETAIL: &str = "tmp outbound flow";

/// Recording parameters of [`ServiceHandler::call_recording_start`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingOptions {
    pub format: String,
    pub end_of_silence: u32,
    pub end_of_key: String,
    pub duration: u32,
}

impl ServiceHandler {
    async fn call_get_authorized(&self, a: &Agent, call_id: Uuid) -> Result<Call> {
        fetch_authorized(a, MANAGER_MASK, self.req.call_v1_call_get(call_id)).await
    }

    /// Dials `destinations` from `source`.
    ///
    /// Without a flow id the given actions are wrapped into a temporary flow that the flow
    /// manager drops once the call ends. Returns the created calls and group calls.
    pub async fn call_create(
        &self,
        a: &Agent,
        flow_id: Uuid,
        actions: &[Action],
        source: &Address,
        destinations: &[Address],
    ) -> Result<(Vec<CallWebhookMessage>, Vec<GroupcallWebhookMessage>)> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let flow_id = self
            .flow_resolve_owned(a, flow_id, actions, TEMP_FLOW_DETAIL)
            .await?;

        let req = CallCreate {
            customer_id: a.customer_id(),
            flow_id,
            master_call_id: Uuid::nil(),
            source: source.clone(),
            destinations: destinations.to_vec(),
            early_execution: false,
            connect: false,
        };
        let res = self.req.call_v1_call_create(&req).await?;
        Ok((convert_list(res.calls), convert_list(res.groupcalls)))
    }

    pub async fn call_get(&self, a: &Agent, call_id: Uuid) -> Result<CallWebhookMessage> {
        let res = self.call_get_authorized(a, call_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn call_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<CallWebhookMessage>> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let filters = customer_filters::<Call>(a, filters)?;
        let res = self
            .req
            .call_v1_call_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn call_delete(&self, a: &Agent, call_id: Uuid) -> Result<CallWebhookMessage> {
        self.call_get_authorized(a, call_id).await?;

        let res = self.req.call_v1_call_delete(call_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn call_hangup(&self, a: &Agent, call_id: Uuid) -> Result<CallWebhookMessage> {
        self.call_get_authorized(a, call_id).await?;

        let res = self.req.call_v1_call_hangup(call_id).await?;
        Ok(res.convert_webhook_message())
    }

    /// Plays text-to-speech into the call.
    pub async fn call_talk(
        &self,
        a: &Agent,
        call_id: Uuid,
        text: &str,
        gender: &str,
        language: &str,
    ) -> Result<()> {
        self.call_get_authorized(a, call_id).await?;

        self.req.call_v1_call_talk(call_id, text, gender, language).await?;
        Ok(())
    }

    pub async fn call_hold_on(&self, a: &Agent, call_id: Uuid) -> Result<()> {
        self.call_get_authorized(a, call_id).await?;
        Ok(self.req.call_v1_call_hold_on(call_id).await?)
    }

    pub async fn call_hold_off(&self, a: &Agent, call_id: Uuid) -> Result<()> {
        self.call_get_authorized(a, call_id).await?;
        Ok(self.req.call_v1_call_hold_off(call_id).await?)
    }

    pub async fn call_mute_on(&self, a: &Agent, call_id: Uuid, direction: MediaDirection) -> Result<()> {
        self.call_get_authorized(a, call_id).await?;
        Ok(self.req.call_v1_call_mute_on(call_id, direction).await?)
    }

    pub async fn call_mute_off(&self, a: &Agent, call_id: Uuid, direction: MediaDirection) -> Result<()> {
        self.call_get_authorized(a, call_id).await?;
        Ok(self.req.call_v1_call_mute_off(call_id, direction).await?)
    }

    pub async fn call_moh_on(&self, a: &Agent, call_id: Uuid) -> Result<()> {
        self.call_get_authorized(a, call_id).await?;
        Ok(self.req.call_v1_call_moh_on(call_id).await?)
    }

    pub async fn call_moh_off(&self, a: &Agent, call_id: Uuid) -> Result<()> {
        self.call_get_authorized(a, call_id).await?;
        Ok(self.req.call_v1_call_moh_off(call_id).await?)
    }

    pub async fn call_silence_on(&self, a: &Agent, call_id: Uuid) -> Result<()> {
        self.call_get_authorized(a, call_id).await?;
        Ok(self.req.call_v1_call_silence_on(call_id).await?)
    }

    pub async fn call_silence_off(&self, a: &Agent, call_id: Uuid) -> Result<()> {
        self.call_get_authorized(a, call_id).await?;
        Ok(self.req.call_v1_call_silence_off(call_id).await?)
    }

    pub async fn call_recording_start(
        &self,
        a: &Agent,
        call_id: Uuid,
        opts: &RecordingOptions,
    ) -> Result<CallWebhookMessage> {
        self.call_get_authorized(a, call_id).await?;

        let res = self
            .req
            .call_v1_call_recording_start(
                call_id,
                &opts.format,
                opts.end_of_silence,
                &opts.end_of_key,
                opts.duration,
            )
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn call_recording_stop(&self, a: &Agent, call_id: Uuid) -> Result<CallWebhookMessage> {
        self.call_get_authorized(a, call_id).await?;

        let res = self.req.call_v1_call_recording_stop(call_id).await?;
        Ok(res.convert_webhook_message())
    }

    async fn groupcall_get_authorized(&self, a: &Agent, groupcall_id: Uuid) -> Result<Groupcall> {
        fetch_authorized(a, MANAGER_MASK, self.req.call_v1_groupcall_get(groupcall_id)).await
    }

    pub async fn groupcall_get(&self, a: &Agent, groupcall_id: Uuid) -> Result<GroupcallWebhookMessage> {
        let res = self.groupcall_get_authorized(a, groupcall_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn groupcall_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<GroupcallWebhookMessage>> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let filters = customer_filters::<Groupcall>(a, filters)?;
        let res = self
            .req
            .call_v1_groupcall_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn groupcall_hangup(&self, a: &Agent, groupcall_id: Uuid) -> Result<GroupcallWebhookMessage> {
        self.groupcall_get_authorized(a, groupcall_id).await?;

        let res = self.req.call_v1_groupcall_hangup(groupcall_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn groupcall_delete(&self, a: &Agent, groupcall_id: Uuid) -> Result<GroupcallWebhookMessage> {
        self.groupcall_get_authorized(a, groupcall_id).await?;

        let res = self.req.call_v1_groupcall_delete(groupcall_id).await?;
        Ok(res.convert_webhook_message())
    }
}
