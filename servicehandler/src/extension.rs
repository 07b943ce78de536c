use crate::permission::{MANAGER_MASK, ensure_permission};
use crate::{RawFilters, Result, ServiceHandler, convert_list, customer_filters, fetch_authorized};
use models::agent::Agent;
use models::registrar::{Extension, ExtensionWebhookMessage};
use models::WebhookConvert;
use uuid::Uuid;

impl ServiceHandler {
    async fn extension_get_authorized(&self, a: &Agent, extension_id: Uuid) -> Result<Extension> {
        fetch_authorized(a, MANAGER_MASK, self.req.registrar_v1_extension_get(extension_id)).await
    }

    /// Registers a SIP extension. The password is write-only.
    pub async fn extension_create(
        &self,
        a: &Agent,
        extension: &str,
        password: &str,
        name: &str,
        detail: &str,
    ) -> Result<ExtensionWebhookMessage> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let res = self
            .req
            .registrar_v1_extension_create(a.customer_id(), extension, password, name, detail)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn extension_get(&self, a: &Agent, extension_id: Uuid) -> Result<ExtensionWebhookMessage> {
        let res = self.extension_get_authorized(a, extension_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn extension_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<ExtensionWebhookMessage>> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let filters = customer_filters::<Extension>(a, filters)?;
        let res = self
            .req
            .registrar_v1_extension_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn extension_update(
        &self,
        a: &Agent,
        extension_id: Uuid,
        name: &str,
        detail: &str,
        password: &str,
    ) -> Result<ExtensionWebhookMessage> {
        self.extension_get_authorized(a, extension_id).await?;

        let res = self
            .req
            .registrar_v1_extension_update(extension_id, name, detail, password)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn extension_delete(&self, a: &Agent, extension_id: Uuid) -> Result<ExtensionWebhookMessage> {
        self.extension_get_authorized(a, extension_id).await?;

        let res = self.req.registrar_v1_extension_delete(extension_id).await?;
        Ok(res.convert_webhook_message())
    }
}
