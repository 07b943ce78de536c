//! Request/response envelope exchanged with the backend managers and the transport
//! that carries it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CONTENT_TYPE_JSON: &str = "application/json";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl RequestMethod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Put => "PUT",
            RequestMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub uri: String,
    pub method: RequestMethod,
    pub publisher: String,
    #[serde(default)]
    pub data_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub status_code: u16,
    #[serde(default)]
    pub data_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        self.status_code <= 299
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SockError {
    #[error("no upstream configured for queue {0}")]
    UnknownQueue(String),
    #[error("invalid upstream url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("HTTP client error: {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("transport returned status {0}")]
    TransportStatus(u16),
    #[error("unexpected request: {0}")]
    Unexpected(String),
}

/// Delivers a request to the queue `target` and waits for the reply.
#[async_trait]
pub trait Sock: Send + Sync {
    async fn request_publish(&self, target: &str, req: Request) -> Result<Response, SockError>;
}
