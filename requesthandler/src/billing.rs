use crate::{QueueName, RequestHandler, RequestMethod, Result};
use models::billing::{Account, Allowance, Billing, PaymentMethod, PaymentType};
use models::filter::Filters;
use serde_json::json;
use uuid::Uuid;

const RESOURCE_ACCOUNTS: &str = "billing/accounts";
const RESOURCE_BILLINGS: &str = "billing/billings";

impl RequestHandler {
    pub async fn billing_v1_account_create(
        &self,
        customer_id: Uuid,
        name: &str,
        detail: &str,
        payment_type: PaymentType,
        payment_method: PaymentMethod,
    ) -> Result<Account> {
        self.request(
            QueueName::Billing.as_str(),
            "/v1/accounts",
            RequestMethod::Post,
            RESOURCE_ACCOUNTS,
            Some(json!({
                "customer_id": customer_id,
                "name": name,
                "detail": detail,
                "payment_type": payment_type,
                "payment_method": payment_method,
            })),
        )
        .await
    }

    pub async fn billing_v1_account_get(&self, account_id: Uuid) -> Result<Account> {
        self.request(
            QueueName::Billing.as_str(),
            &format!("/v1/accounts/{account_id}"),
            RequestMethod::Get,
            RESOURCE_ACCOUNTS,
            None,
        )
        .await
    }

    pub async fn billing_v1_account_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Account>> {
        self.request_list(
            QueueName::Billing,
            "/v1/accounts",
            RESOURCE_ACCOUNTS,
            token,
            size,
            filters,
        )
        .await
    }

    pub async fn billing_v1_account_delete(&self, account_id: Uuid) -> Result<Account> {
        self.request(
            QueueName::Billing.as_str(),
            &format!("/v1/accounts/{account_id}"),
            RequestMethod::Delete,
            RESOURCE_ACCOUNTS,
            None,
        )
        .await
    }

    pub async fn billing_v1_account_update_basic_info(
        &self,
        account_id: Uuid,
        name: &str,
        detail: &str,
    ) -> Result<Account> {
        self.request(
            QueueName::Billing.as_str(),
            &format!("/v1/accounts/{account_id}"),
            RequestMethod::Put,
            RESOURCE_ACCOUNTS,
            Some(json!({"name": name, "detail": detail})),
        )
        .await
    }

    pub async fn billing_v1_account_update_payment_info(
        &self,
        account_id: Uuid,
        payment_type: PaymentType,
        payment_method: PaymentMethod,
    ) -> Result<Account> {
        self.request(
            QueueName::Billing.as_str(),
            &format!("/v1/accounts/{account_id}/payment_info"),
            RequestMethod::Put,
            RESOURCE_ACCOUNTS,
            Some(json!({"payment_type": payment_type, "payment_method": payment_method})),
        )
        .await
    }

    /// Adds `balance` without any payment check.
    pub async fn billing_v1_account_add_balance_force(
        &self,
        account_id: Uuid,
        balance: f64,
    ) -> Result<Account> {
        self.request(
            QueueName::Billing.as_str(),
            &format!("/v1/accounts/{account_id}/balance_add_force"),
            RequestMethod::Post,
            RESOURCE_ACCOUNTS,
            Some(json!({ "balance": balance })),
        )
        .await
    }

    pub async fn billing_v1_account_subtract_balance_force(
        &self,
        account_id: Uuid,
        balance: f64,
    ) -> Result<Account> {
        self.request(
            QueueName::Billing.as_str(),
            &format!("/v1/accounts/{account_id}/balance_subtract_force"),
            RequestMethod::Post,
            RESOURCE_ACCOUNTS,
            Some(json!({ "balance": balance })),
        )
        .await
    }

    pub async fn billing_v1_allowance_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Allowance>> {
        self.request_list(
            QueueName::Billing,
            "/v1/allowances",
            "billing/allowances",
            token,
            size,
            filters,
        )
        .await
    }

    pub async fn billing_v1_billing_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Billing>> {
        self.request_list(
            QueueName::Billing,
            "/v1/billings",
            RESOURCE_BILLINGS,
            token,
            size,
            filters,
        )
        .await
    }
}
