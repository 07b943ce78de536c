use crate::filter::{FieldKind, Filterable};
use crate::identity::{Identity, WebhookConvert, impl_resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Admin,
    #[default]
    Normal,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    #[default]
    Prepaid,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "")]
    None,
    CreditCard,
}

/// Balance holder that pays for a customer's usage.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(flatten)]
    pub identity: Identity,

    #[serde(rename = "type", default)]
    pub kind: AccountType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,

    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub payment_type: PaymentType,
    #[serde(default)]
    pub payment_method: PaymentMethod,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Account, "billing account");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountWebhookMessage {
    #[serde(flatten)]
    pub identity: Identity,
    #[serde(rename = "type")]
    pub kind: AccountType,
    pub name: String,
    pub detail: String,
    pub balance: f64,
    pub payment_type: PaymentType,
    pub payment_method: PaymentMethod,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl WebhookConvert for Account {
    type Message = AccountWebhookMessage;

    fn convert_webhook_message(self) -> AccountWebhookMessage {
        AccountWebhookMessage {
            identity: self.identity,
            kind: self.kind,
            name: self.name,
            detail: self.detail,
            balance: self.balance,
            payment_type: self.payment_type,
            payment_method: self.payment_method,
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

impl Filterable for Account {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("type", FieldKind::String),
        ("name", FieldKind::String),
        ("payment_type", FieldKind::String),
        ("payment_method", FieldKind::String),
        ("deleted", FieldKind::Bool),
    ];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingStatus {
    #[default]
    Progressing,
    End,
    Pending,
    Finished,
}

/// One charged usage item, e.g. a call or a sent message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Billing {
    #[serde(flatten)]
    pub identity: Identity,

    pub account_id: Uuid,
    #[serde(default)]
    pub status: BillingStatus,

    #[serde(default)]
    pub reference_type: String,
    #[serde(default)]
    pub reference_id: Uuid,

    #[serde(default)]
    pub cost_per_unit: f64,
    #[serde(default)]
    pub cost_total: f64,
    #[serde(default)]
    pub billing_unit_count: f64,

    #[serde(default)]
    pub tm_billing_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_billing_end: Option<DateTime<Utc>>,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Billing, "billing");

/// Billing rows carry no internal fields, the public view is the row itself.
impl WebhookConvert for Billing {
    type Message = Billing;

    fn convert_webhook_message(self) -> Billing {
        self
    }
}

impl Filterable for Billing {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("account_id", FieldKind::Uuid),
        ("status", FieldKind::String),
        ("reference_type", FieldKind::String),
        ("reference_id", FieldKind::Uuid),
        ("deleted", FieldKind::Bool),
    ];
}

/// Token allowance of an account for one billing cycle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Allowance {
    #[serde(flatten)]
    pub identity: Identity,

    pub account_id: Uuid,
    #[serde(default)]
    pub cycle_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cycle_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tokens_total: i64,
    #[serde(default)]
    pub tokens_used: i64,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Allowance, "allowance");

impl WebhookConvert for Allowance {
    type Message = Allowance;

    fn convert_webhook_message(self) -> Allowance {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Resource;

    #[test]
    fn test_account_wire_format() {
        let json = serde_json::json!({
            "id": "6a93f71e-f542-11ee-9d0b-4b1c2a4e5a2b",
            "customer_id": "5f621078-8e5f-11ee-97b2-cfe7337b701c",
            "type": "admin",
            "name": "main",
            "balance": 10.5,
            "payment_method": "credit_card",
            "tm_delete": null,
        });

        let account: Account = serde_json::from_value(json).unwrap();
        assert_eq!(account.kind, AccountType::Admin);
        assert_eq!(account.payment_method, PaymentMethod::CreditCard);
        assert_eq!(account.payment_type, PaymentType::Prepaid);
        assert!(!account.is_deleted());

        let msg = account.clone().convert_webhook_message();
        assert_eq!(msg.identity, account.identity);
        assert_eq!(msg.balance, 10.5);
    }
}
