use crate::{QueueName, RequestHandler, RequestMethod, Result};
use models::address::Address;
use models::email::{Attachment, Email};
use models::filter::Filters;
use serde_json::json;
use uuid::Uuid;

const RESOURCE: &str = "email/emails";

impl RequestHandler {
    pub async fn email_v1_email_send(
        &self,
        customer_id: Uuid,
        destinations: &[Address],
        subject: &str,
        content: &str,
        attachments: &[Attachment],
    ) -> Result<Email> {
        self.request(
            QueueName::Email.as_str(),
            "/v1/emails",
            RequestMethod::Post,
            RESOURCE,
            Some(json!({
                "customer_id": customer_id,
                "destinations": destinations,
                "subject": subject,
                "content": content,
                "attachments": attachments,
            })),
        )
        .await
    }

    pub async fn email_v1_email_get(&self, email_id: Uuid) -> Result<Email> {
        self.request(
            QueueName::Email.as_str(),
            &format!("/v1/emails/{email_id}"),
            RequestMethod::Get,
            RESOURCE,
            None,
        )
        .await
    }

    pub async fn email_v1_email_list(
        &self,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<Email>> {
        self.request_list(QueueName::Email, "/v1/emails", RESOURCE, token, size, filters)
            .await
    }

    pub async fn email_v1_email_delete(&self, email_id: Uuid) -> Result<Email> {
        self.request(
            QueueName::Email.as_str(),
            &format!("/v1/emails/{email_id}"),
            RequestMethod::Delete,
            RESOURCE,
            None,
        )
        .await
    }
}
