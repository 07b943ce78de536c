use crate::{QueueName, RequestHandler, RequestMethod, Result};
use chrono::{DateTime, Utc};
use models::customer::{Accesskey, Customer, WebhookMethod};
use models::filter::Filters;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

const RESOURCE_CUSTOMERS: &str = "customer/customers";
const RESOURCE_ACCESSKEYS: &str = "customer/accesskeys";

/// Contact and webhook settings of a customer, used by create and update.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CustomerFields {
    pub name: String,
    pub detail: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub webhook_method: WebhookMethod,
    pub webhook_uri: String,
}

impl RequestHandler {
    pub async fn customer_v1_customer_create(&self, fields: &CustomerFields) -> Result<Customer> {
        self.request(
            QueueName::Customer.as_str(),
            "/v1/customers",
            RequestMethod::Post,
            RESOURCE_CUSTOMERS,
            Some(serde_json::to_value(fields)?),
        )
        .await
    }

    pub async fn customer_v1_customer_get(&self, customer_id: Uuid) -> Result<Customer> {
        self.request(
            QueueName::Customer.as_str(),
            &format!("/v1/customers/{customer_id}"),
            RequestMethod::Get,
            RESOURCE_CUSTOMERS,
            None,
        )
        .await
    }

    pub async fn customer_v1_customer_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Customer>> {
        self.request_list(
            QueueName::Customer,
            "/v1/customers",
            RESOURCE_CUSTOMERS,
            token,
            size,
            filters,
        )
        .await
    }

    pub async fn customer_v1_customer_update(
        &self,
        customer_id: Uuid,
        fields: &CustomerFields,
    ) -> Result<Customer> {
        self.request(
            QueueName::Customer.as_str(),
            &format!("/v1/customers/{customer_id}"),
            RequestMethod::Put,
            RESOURCE_CUSTOMERS,
            Some(serde_json::to_value(fields)?),
        )
        .await
    }

    pub async fn customer_v1_customer_delete(&self, customer_id: Uuid) -> Result<Customer> {
        self.request(
            QueueName::Customer.as_str(),
            &format!("/v1/customers/{customer_id}"),
            RequestMethod::Delete,
            RESOURCE_CUSTOMERS,
            None,
        )
        .await
    }

    pub async fn customer_v1_customer_update_billing_account_id(
        &self,
        customer_id: Uuid,
        billing_account_id: Uuid,
    ) -> Result<Customer> {
        self.request(
            QueueName::Customer.as_str(),
            &format!("/v1/customers/{customer_id}/billing_account_id"),
            RequestMethod::Put,
            RESOURCE_CUSTOMERS,
            Some(json!({ "billing_account_id": billing_account_id })),
        )
        .await
    }

    pub async fn customer_v1_accesskey_create(
        &self,
        customer_id: Uuid,
        name: &str,
        detail: &str,
        expire: Option<DateTime<Utc>>,
    ) -> Result<Accesskey> {
        self.request(
            QueueName::Customer.as_str(),
            "/v1/accesskeys",
            RequestMethod::Post,
            RESOURCE_ACCESSKEYS,
            Some(json!({
                "customer_id": customer_id,
                "name": name,
                "detail": detail,
                "tm_expire": expire,
            })),
        )
        .await
    }

    pub async fn customer_v1_accesskey_get(&self, accesskey_id: Uuid) -> Result<Accesskey> {
        self.request(
            QueueName::Customer.as_str(),
            &format!("/v1/accesskeys/{accesskey_id}"),
            RequestMethod::Get,
            RESOURCE_ACCESSKEYS,
            None,
        )
        .await
    }

    pub async fn customer_v1_accesskey_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Accesskey>> {
        self.request_list(
            QueueName::Customer,
            "/v1/accesskeys",
            RESOURCE_ACCESSKEYS,
            token,
            size,
            filters,
        )
        .await
    }

    pub async fn customer_v1_accesskey_update(
        &self,
        accesskey_id: Uuid,
        name: &str,
        detail: &str,
    ) -> Result<Accesskey> {
        self.request(
            QueueName::Customer.as_str(),
            &format!("/v1/accesskeys/{accesskey_id}"),
            RequestMethod::Put,
            RESOURCE_ACCESSKEYS,
            Some(json!({"name": name, "detail": detail})),
        )
        .await
    }

    pub async fn customer_v1_accesskey_delete(&self, accesskey_id: Uuid) -> Result<Accesskey> {
        self.request(
            QueueName::Customer.as_str(),
            &format!("/v1/accesskeys/{accesskey_id}"),
            RequestMethod::Delete,
            RESOURCE_ACCESSKEYS,
            None,
        )
        .await
    }
}
