//! RPC client for the backend managers.
//!
//! Every backend operation is an inherent method on [`RequestHandler`], named
//! `<manager>_v1_<resource>_<operation>`. Methods build the URI and JSON body, send the
//! request envelope through a [`Sock`] and decode the reply into the manager's model.

pub mod errors;
pub mod http_sock;
pub mod metrics_defs;
pub mod queue_name;
pub mod sock;
#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub mod activeflow;
pub mod agent;
pub mod ai;
pub mod billing;
pub mod call;
pub mod campaign;
pub mod chatbot;
pub mod chatbotcall;
pub mod conference;
pub mod contact;
pub mod conversation;
pub mod customer;
pub mod email;
pub mod flow;
pub mod number;
pub mod outdial;
pub mod outplan;
pub mod provider;
pub mod queue;
pub mod queuecall;
pub mod registrar;
pub mod route;
pub mod storage;
pub mod talk;
pub mod timeline;
pub mod tts;

pub use call::CallsCreateResponse;
pub use errors::{RequestError, Result};
pub use queue_name::QueueName;
pub use sock::{Request, RequestMethod, Response, Sock, SockError};

use crate::metrics_defs::{REQUEST_DURATION, REQUEST_FAILED, REQUEST_TIMEOUT};
use models::filter::Filters;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{counter, histogram};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(30_000);

#[derive(Clone)]
pub struct RequestHandler {
    sock: Arc<dyn Sock>,
    publisher: String,
    timeout: Duration,
}

impl RequestHandler {
    pub fn new(sock: Arc<dyn Sock>, publisher: impl Into<String>) -> Self {
        RequestHandler {
            sock,
            publisher: publisher.into(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    /// Sends one request to `target` and returns the raw reply.
    ///
    /// Replies with a status above 299 are turned into [`RequestError::Status`].
    pub async fn send_request(
        &self,
        target: &str,
        uri: &str,
        method: RequestMethod,
        resource: &'static str,
        data: Option<Value>,
    ) -> Result<Response> {
        let req = Request {
            uri: uri.to_string(),
            method,
            publisher: self.publisher.clone(),
            data_type: match data {
                Some(_) => sock::CONTENT_TYPE_JSON.to_string(),
                None => String::new(),
            },
            data,
        };

        let start = Instant::now();
        let res = tokio::time::timeout(self.timeout, self.sock.request_publish(target, req)).await;
        histogram!(REQUEST_DURATION, "queue" => target.to_string(), "resource" => resource, "method" => method.as_str())
            .record(start.elapsed().as_secs_f64());

        let res = match res {
            Err(_) => {
                counter!(REQUEST_TIMEOUT, "queue" => target.to_string()).increment(1);
                return Err(RequestError::Timeout {
                    target: target.to_string(),
                    method,
                    uri: uri.to_string(),
                });
            }
            Ok(Err(source)) => {
                counter!(REQUEST_FAILED, "queue" => target.to_string()).increment(1);
                return Err(RequestError::Send {
                    target: target.to_string(),
                    method,
                    uri: uri.to_string(),
                    source,
                });
            }
            Ok(Ok(res)) => res,
        };

        if !res.is_success() {
            counter!(REQUEST_FAILED, "queue" => target.to_string()).increment(1);
            tracing::debug!(queue = target, %method, uri, status_code = res.status_code, "backend returned an error status");
            return Err(RequestError::Status(res.status_code));
        }

        Ok(res)
    }

    /// Sends a request and decodes the reply body into `T`.
    async fn request<T: DeserializeOwned>(
        &self,
        target: &str,
        uri: &str,
        method: RequestMethod,
        resource: &'static str,
        data: Option<Value>,
    ) -> Result<T> {
        let res = self
            .send_request(target, uri, method, resource, data)
            .await?;

        let data = res.data.ok_or_else(|| RequestError::EmptyResponse {
            target: target.to_string(),
            uri: uri.to_string(),
        })?;

        Ok(serde_json::from_value(data)?)
    }

    /// Sends a request whose reply carries nothing the caller needs.
    async fn request_unit(
        &self,
        target: &str,
        uri: &str,
        method: RequestMethod,
        resource: &'static str,
        data: Option<Value>,
    ) -> Result<()> {
        self.send_request(target, uri, method, resource, data)
            .await
            .map(|_| ())
    }

    /// GET `<base>?page_token=..&page_size=..` with the typed filters as body.
    async fn request_list<T: DeserializeOwned>(
        &self,
        queue: QueueName,
        base: &str,
        resource: &'static str,
        token: &str,
        size: u64,
        filters: &Filters,
    ) -> Result<Vec<T>> {
        let uri = list_uri(base, token, size);
        let data = serde_json::to_value(filters)?;
        self.request(queue.as_str(), &uri, RequestMethod::Get, resource, Some(data))
            .await
    }
}

fn list_uri(base: &str, token: &str, size: u64) -> String {
    let token: String = url::form_urlencoded::byte_serialize(token.as_bytes()).collect();
    format!("{base}?page_token={token}&page_size={size}")
}
