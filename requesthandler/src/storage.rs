use crate::{QueueName, RequestHandler, RequestMethod, Result};
use models::filter::Filters;
use models::storage::{Account, File};
use serde_json::json;
use uuid::Uuid;

const RESOURCE_ACCOUNTS: &str = "storage/accounts";
const RESOURCE_FILES: &str = "storage/files";

impl RequestHandler {
    pub async fn storage_v1_account_create(&self, customer_id: Uuid) -> Result<Account> {
        self.request(
            QueueName::Storage.as_str(),
            "/v1/accounts",
            RequestMethod::Post,
            RESOURCE_ACCOUNTS,
            Some(json!({ "customer_id": customer_id })),
        )
        .await
    }

    pub async fn storage_v1_account_get(&self, account_id: Uuid) -> Result<Account> {
        self.request(
            QueueName::Storage.as_str(),
            &format!("/v1/accounts/{account_id}"),
            RequestMethod::Get,
            RESOURCE_ACCOUNTS,
            None,
        )
        .await
    }

    pub async fn storage_v1_account_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Account>> {
        self.request_list(
            QueueName::Storage,
            "/v1/accounts",
            RESOURCE_ACCOUNTS,
            token,
            size,
            filters,
        )
        .await
    }

    pub async fn storage_v1_account_delete(&self, account_id: Uuid) -> Result<Account> {
        self.request(
            QueueName::Storage.as_str(),
            &format!("/v1/accounts/{account_id}"),
            RequestMethod::Delete,
            RESOURCE_ACCOUNTS,
            None,
        )
        .await
    }

    pub async fn storage_v1_file_get(&self, file_id: Uuid) -> Result<File> {
        self.request(
            QueueName::Storage.as_str(),
            &format!("/v1/files/{file_id}"),
            RequestMethod::Get,
            RESOURCE_FILES,
            None,
        )
        .await
    }

    pub async fn storage_v1_file_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<File>> {
        self.request_list(
            QueueName::Storage,
            "/v1/files",
            RESOURCE_FILES,
            token,
            size,
            filters,
        )
        .await
    }

    pub async fn storage_v1_file_delete(&self, file_id: Uuid) -> Result<File> {
        self.request(
            QueueName::Storage.as_str(),
            &format!("/v1/files/{file_id}"),
            RequestMethod::Delete,
            RESOURCE_FILES,
            None,
        )
        .await
    }
}
