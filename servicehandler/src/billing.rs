use crate::permission::{ensure_permission, ensure_super_admin};
use crate::{RawFilters, Result, ServiceHandler, convert_list, customer_filters, fetch_authorized};
use models::agent::{Agent, Permission};
use models::billing::{Account, AccountWebhookMessage, Allowance, Billing, PaymentMethod, PaymentType};
use models::filter::{FIELD_DELETED, Filters};
use models::WebhookConvert;
use serde_json::json;
use uuid::Uuid;

/// Billing data is restricted to customer admins.
const BILLING_MASK: Permission = Permission::CUSTOMER_ADMIN;

impl ServiceHandler {
    async fn billing_account_get_authorized(&self, a: &Agent, account_id: Uuid) -> Result<Account> {
        fetch_authorized(a, BILLING_MASK, self.req.billing_v1_account_get(account_id)).await
    }

    pub async fn billing_account_create(
        &self,
        a: &Agent,
        name: &str,
        detail: &str,
        payment_type: PaymentType,
        payment_method: PaymentMethod,
    ) -> Result<AccountWebhookMessage> {
        ensure_permission(a, a.customer_id(), BILLING_MASK)?;

        let res = self
            .req
            .billing_v1_account_create(a.customer_id(), name, detail, payment_type, payment_method)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn billing_account_get(&self, a: &Agent, account_id: Uuid) -> Result<AccountWebhookMessage> {
        let res = self.billing_account_get_authorized(a, account_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn billing_account_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<AccountWebhookMessage>> {
        ensure_permission(a, a.customer_id(), BILLING_MASK)?;

        let filters = customer_filters::<Account>(a, filters)?;
        let res = self
            .req
            .billing_v1_account_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn billing_account_delete(&self, a: &Agent, account_id: Uuid) -> Result<AccountWebhookMessage> {
        self.billing_account_get_authorized(a, account_id).await?;

        let res = self.req.billing_v1_account_delete(account_id).await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn billing_account_update_basic_info(
        &self,
        a: &Agent,
        account_id: Uuid,
        name: &str,
        detail: &str,
    ) -> Result<AccountWebhookMessage> {
        self.billing_account_get_authorized(a, account_id).await?;

        let res = self
            .req
            .billing_v1_account_update_basic_info(account_id, name, detail)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn billing_account_update_payment_info(
        &self,
        a: &Agent,
        account_id: Uuid,
        payment_type: PaymentType,
        payment_method: PaymentMethod,
    ) -> Result<AccountWebhookMessage> {
        self.billing_account_get_authorized(a, account_id).await?;

        let res = self
            .req
            .billing_v1_account_update_payment_info(account_id, payment_type, payment_method)
            .await?;
        Ok(res.convert_webhook_message())
    }

    /// Adds balance to any account. Super admins only, the account is not fetched.
    pub async fn billing_account_add_balance_force(
        &self,
        a: &Agent,
        account_id: Uuid,
        balance: f64,
    ) -> Result<AccountWebhookMessage> {
        ensure_super_admin(a)?;

        let res = self
            .req
            .billing_v1_account_add_balance_force(account_id, balance)
            .await?;
        Ok(res.convert_webhook_message())
    }

    pub async fn billing_account_subtract_balance_force(
        &self,
        a: &Agent,
        account_id: Uuid,
        balance: f64,
    ) -> Result<AccountWebhookMessage> {
        ensure_super_admin(a)?;

        let res = self
            .req
            .billing_v1_account_subtract_balance_force(account_id, balance)
            .await?;
        Ok(res.convert_webhook_message())
    }

    /// Token allowance cycles of one billing account.
    pub async fn billing_account_allowance_list(
        &self,
        a: &Agent,
        account_id: Uuid,
        size: u64,
        token: &str,
    ) -> Result<Vec<Allowance>> {
        self.billing_account_get_authorized(a, account_id).await?;

        let mut filters = Filters::new();
        filters.insert("account_id".into(), json!(account_id));
        filters.insert(FIELD_DELETED.into(), json!(false));
        let res = self
            .req
            .billing_v1_allowance_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }

    pub async fn billing_list(
        &self,
        a: &Agent,
        size: u64,
        token: &str,
        filters: &RawFilters,
    ) -> Result<Vec<Billing>> {
        ensure_permission(a, a.customer_id(), BILLING_MASK)?;

        let filters = customer_filters::<Billing>(a, filters)?;
        let res = self
            .req
            .billing_v1_billing_list(&self.token_or_now(token), size, &filters)
            .await?;
        Ok(convert_list(res))
    }
}
