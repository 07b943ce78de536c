use crate::permission::{MANAGER_MASK, ensure_permission, ensure_super_admin};
use crate::{
    RawFilters, Result, ServiceError, ServiceHandler, convert_list, customer_filters, fetch,
    fetch_authorized,
};
use models::agent::Agent;
use models::filter::{FIELD_CUSTOMER_ID, FIELD_DELETED, Filters, convert_filters};
use models::storage::{Account, File, FileWebhookMessage};
use models::WebhookConvert;
use serde_json::json;
use uuid::Uuid;

impl ServiceHandler {
    pub async fn storage_account_create(&self, a: &Agent, customer_id: Uuid) -> Result<Account> {
        ensure_super_admin(a)?;

        let res = self.req.storage_v1_account_create(customer_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn storage_account_get(&self, a: &Agent, account_id: Uuid) -> Result<Account> {
        ensure_super_admin(a)?;

        let res = fetch(self.req.storage_v1_account_get(account_id)).await?;
        Ok(res.convert_webhook_message())
    }

    /// The storage account of the caller's customer. Every customer has at most one.
    pub async fn storage_account_get_by_customer_id(&self, a: &Agent) -> Result<Account> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let mut filters = Filters::new();
        filters.insert(FIELD_CUSTOMER_ID.into(), json!(a.customer_id()));
        filters.insert(FIELD_DELETED.into(), json!(false));
        let res = self
            .req
            .storage_v1_account_list(&self.util.time_get_cur_time(), 1, &filters)
            .await?;

        res.into_iter()
            .next()
            .map(WebhookConvert::convert_webhook_message)
            .ok_or(ServiceError::NotFound("storage account"))
    }

    pub async fn storage_account_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<Account>> {
        ensure_super_admin(a)?;

        let mut filters = convert_filters::<Account>(filters)?;
        filters
            .entry(FIELD_DELETED.to_string())
            .or_insert(json!(false));
        let res = self
            .req
            .storage_v1_account_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn storage_account_delete(&self, a: &Agent, account_id: Uuid) -> Result<Account> {
        ensure_super_admin(a)?;
        fetch(self.req.storage_v1_account_get(account_id)).await?;

        let res = self.req.storage_v1_account_delete(account_id).await?;
        Ok(res.convert_webhook_message())
    }

    async fn storage_file_get_authorized(&self, a: &Agent, file_id: Uuid) -> Result<File> {
        fetch_authorized(a, MANAGER_MASK, self.req.storage_v1_file_get(file_id)).await
    }

    pub async fn storage_file_get(&self, a: &Agent, file_id: Uuid) -> Result<FileWebhookMessage> {
        let res = self.storage_file_get_authorized(a, file_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn storage_file_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<FileWebhookMessage>> {
        ensure_permission(a, a.customer_id(), MANAGER_MASK)?;

        let filters = customer_filters::<File>(a, filters)?;
        let res = self
            .req
            .storage_v1_file_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn storage_file_delete(&self, a: &Agent, file_id: Uuid) -> Result<FileWebhookMessage> {
        self.storage_file_get_authorized(a, file_id).await?;

        let res = self.req.storage_v1_file_delete(file_id).await?;
        Ok(res.convert_webhook_message())
    }
}
