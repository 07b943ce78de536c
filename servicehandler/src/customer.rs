use crate::permission::{MANAGER_MASK, ensure_permission, ensure_super_admin};
use crate::{
    RawFilters, Result, ServiceError, ServiceHandler, convert_list, customer_filters, fetch,
    fetch_authorized,
};
use chrono::{DateTime, Utc};
use models::agent::{Agent, Permission};
use models::customer::{Accesskey, AccesskeyWebhookMessage, Customer};
use models::filter::{FIELD_DELETED, Filters, convert_filters};
use models::WebhookConvert;
use requesthandler::customer::CustomerFields;
use serde_json::json;
use uuid::Uuid;

impl ServiceHandler {
    async fn customer_get_authorized(&self, a: &Agent, customer_id: Uuid, mask: Permission) -> Result<Customer> {
        fetch_authorized(a, mask, self.req.customer_v1_customer_get(customer_id)).await
    }

    pub async fn customer_create(&self, a: &Agent, fields: &CustomerFields) -> Result<Customer> {
        ensure_super_admin(a)?;

        let res = self.req.customer_v1_customer_create(fields).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn customer_get(&self, a: &Agent, customer_id: Uuid) -> Result<Customer> {
        let res = self.customer_get_authorized(a, customer_id, MANAGER_MASK).await?;
        Ok(res.convert_webhook_message())
    }

    /// Lists every customer of the platform. Super admins only.
    pub async fn customer_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<Customer>> {
        ensure_super_admin(a)?;

        let mut filters = convert_filters::<Customer>(filters)?;
        filters
            .entry(FIELD_DELETED.to_string())
            .or_insert(json!(false));
        let res = self
            .req
            .customer_v1_customer_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn customer_update(&self, a: &Agent, customer_id: Uuid, fields: &CustomerFields) -> Result<Customer> {
        self.customer_get_authorized(a, customer_id, MANAGER_MASK).await?;

        let res = self.req.customer_v1_customer_update(customer_id, fields).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn customer_delete(&self, a: &Agent, customer_id: Uuid) -> Result<Customer> {
        ensure_super_admin(a)?;
        fetch(self.req.customer_v1_customer_get(customer_id)).await?;

        let res = self.req.customer_v1_customer_delete(customer_id).await?;
        Ok(res.convert_webhook_message())
    }

    /// Points the customer at the billing account its usage is charged to.
    ///
    /// The account must belong to the same customer.
    pub async fn customer_update_billing_account_id(
        &self,
        a: &Agent,
        customer_id: Uuid,
        billing_account_id: Uuid,
    ) -> Result<Customer> {
        let customer = self
            .customer_get_authorized(a, customer_id, Permission::CUSTOMER_ADMIN)
            .await?;

        let account = fetch_authorized(
            a,
            Permission::CUSTOMER_ADMIN,
            self.req.billing_v1_account_get(billing_account_id),
        )
        .await?;
        if account.identity.customer_id != customer.id {
            tracing::info!(
                %customer_id,
                %billing_account_id,
                account_customer_id = %account.identity.customer_id,
                "billing account belongs to another customer"
            );
            return Err(ServiceError::InvalidArgument(
                "the billing account belongs to another customer".into(),
            ));
        }

        let res = self
            .req
            .customer_v1_customer_update_billing_account_id(customer_id, billing_account_id)
            .await?;
        Ok(res.convert_webhook_message())
    }

    async fn accesskey_get_authorized(&self, a: &Agent, accesskey_id: Uuid) -> Result<Accesskey> {
        fetch_authorized(a, Permission::CUSTOMER_ADMIN, self.req.customer_v1_accesskey_get(accesskey_id)).await
    }

    /// Issues a new API token. The token is only part of this response.
    pub async fn accesskey_create(
        &self,
        a: &Agent,
        name: &str,
        detail: &str,
        expire: Option<DateTime<Utc>>,
    ) -> Result<AccesskeyWebhookMessage> {
        ensure_permission(a, a.customer_id(), Permission::CUSTOMER_ADMIN)?;

        let res = self
            .req
            .customer_v1_accesskey_create(a.customer_id(), name, detail, expire)
            .await?;
        let token = res.token.clone();
        let mut msg = res.convert_webhook_message();
        msg.token = Some(token);
        Ok(msg)
    }

    pub async fn accesskey_get(&self, a: &Agent, accesskey_id: Uuid) -> Result<AccesskeyWebhookMessage> {
        let res = self.accesskey_get_authorized(a, accesskey_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn accesskey_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<AccesskeyWebhookMessage>> {
        ensure_permission(a, a.customer_id(), Permission::CUSTOMER_ADMIN)?;

        let filters = customer_filters::<Accesskey>(a, filters)?;
        let res = self
            .req
            .customer_v1_accesskey_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn accesskey_update(
        &self,
        a: &Agent,
        accesskey_id: Uuid,
        name: &str,
        detail: &str,
    ) -> Result<AccesskeyWebhookMessage> {
        let key = self.accesskey_get_authorized(a, accesskey_id).await?;

        let res = self
            .req
            .customer_v1_accesskey_update(accesskey_id, name, detail)
            .await?;
        // the next token lookup reloads the key from the customer manager
        self.db.accesskey_delete(&key.token);
        Ok(res.convert_webhook_message())
    }

    pub async fn accesskey_delete(&self, a: &Agent, accesskey_id: Uuid) -> Result<AccesskeyWebhookMessage> {
        let key = self.accesskey_get_authorized(a, accesskey_id).await?;

        let res = self.req.customer_v1_accesskey_delete(accesskey_id).await?;
        self.db.accesskey_delete(&key.token);
        Ok(res.convert_webhook_message())
    }

    /// Resolves an API token to its access key.
    ///
    /// The local cache is consulted first, the customer manager otherwise. Expired and
    /// deleted keys are rejected.
    pub async fn auth_accesskey_parse(&self, token: &str) -> Result<Accesskey> {
        let now = self.util.time_now();

        if let Some(key) = self.db.accesskey_get_by_token(token) {
            if key.is_expired(now) {
                self.db.accesskey_delete(token);
                return Err(ServiceError::InvalidAccesskey);
            }
            return Ok(key);
        }

        let mut filters = Filters::new();
        filters.insert("token".into(), json!(token));
        filters.insert(FIELD_DELETED.into(), json!(false));
        let keys = self
            .req
            .customer_v1_accesskey_list(&self.token_or_now(""), 1, &filters)
            .await?;

        let Some(key) = keys.into_iter().next() else {
            tracing::debug!("no accesskey for the given token");
            return Err(ServiceError::InvalidAccesskey);
        };
        if key.is_expired(now) || key.tm_delete.is_some() {
            tracing::debug!(accesskey_id = %key.identity.id, "accesskey is expired or deleted");
            return Err(ServiceError::InvalidAccesskey);
        }

        self.db.accesskey_set(&key);
        Ok(key)
    }
}
