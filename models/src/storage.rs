use crate::filter::{FieldKind, Filterable};
use crate::identity::{Identity, Owner, WebhookConvert, impl_resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Storage quota holder of a customer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(flatten)]
    pub identity: Identity,

    #[serde(default)]
    pub total_file_count: i64,
    #[serde(default)]
    pub total_file_size: i64,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Account, "storage account");

/// Storage account rows carry no internal fields, the public view is the row itself.
impl WebhookConvert for Account {
    type Message = Account;

    fn convert_webhook_message(self) -> Account {
        self
    }
}

impl Filterable for Account {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("deleted", FieldKind::Bool),
    ];
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct File {
    #[serde(flatten)]
    pub identity: Identity,
    #[serde(flatten)]
    pub owner: Owner,

    #[serde(default)]
    pub account_id: Uuid,
    #[serde(default)]
    pub reference_type: String,
    #[serde(default)]
    pub reference_id: Uuid,

    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub filesize: i64,

    #[serde(default)]
    pub bucket_name: String,
    #[serde(default)]
    pub filepath: String,

    #[serde(default)]
    pub uri_download: String,
    #[serde(default)]
    pub tm_download_expire: Option<DateTime<Utc>>,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(File, "file");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileWebhookMessage {
    #[serde(flatten)]
    pub identity: Identity,
    #[serde(flatten)]
    pub owner: Owner,
    pub reference_type: String,
    pub reference_id: Uuid,
    pub name: String,
    pub detail: String,
    pub filename: String,
    pub filesize: i64,
    pub uri_download: String,
    pub tm_download_expire: Option<DateTime<Utc>>,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl WebhookConvert for File {
    type Message = FileWebhookMessage;

    fn convert_webhook_message(self) -> FileWebhookMessage {
        FileWebhookMessage {
            identity: self.identity,
            owner: self.owner,
            reference_type: self.reference_type,
            reference_id: self.reference_id,
            name: self.name,
            detail: self.detail,
            filename: self.filename,
            filesize: self.filesize,
            uri_download: self.uri_download,
            tm_download_expire: self.tm_download_expire,
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

impl Filterable for File {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("owner_type", FieldKind::String),
        ("owner_id", FieldKind::Uuid),
        ("reference_type", FieldKind::String),
        ("reference_id", FieldKind::Uuid),
        ("deleted", FieldKind::Bool),
    ];
}
