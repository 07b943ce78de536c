//! In-memory [`Sock`] for tests of code built on top of [`crate::RequestHandler`].

use crate::sock::{CONTENT_TYPE_JSON, Request, RequestMethod, Response, Sock, SockError};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;
use std::collections::VecDeque;

struct Expectation {
    target: String,
    method: RequestMethod,
    uri: String,
    body: Option<Value>,
    response: Response,
}

/// Replays scripted responses in order. Each request must match the next expectation
/// on target, method and uri, and on the body when one was given.
#[derive(Default)]
pub struct MockSock {
    expectations: Mutex<VecDeque<Expectation>>,
    calls: Mutex<Vec<(String, Request)>>,
    failures: Mutex<Vec<String>>,
}

impl MockSock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect(&self, target: &str, method: RequestMethod, uri: &str, response: Response) {
        self.push(target, method, uri, None, response);
    }

    pub fn expect_with_body(
        &self,
        target: &str,
        method: RequestMethod,
        uri: &str,
        body: Value,
        response: Response,
    ) {
        self.push(target, method, uri, Some(body), response);
    }

    fn push(
        &self,
        target: &str,
        method: RequestMethod,
        uri: &str,
        body: Option<Value>,
        response: Response,
    ) {
        self.expectations.lock().push_back(Expectation {
            target: target.to_string(),
            method,
            uri: uri.to_string(),
            body,
            response,
        });
    }

    /// Every request received so far, with the queue it was published to.
    pub fn calls(&self) -> Vec<(String, Request)> {
        self.calls.lock().clone()
    }

    /// Panics unless every expectation was consumed and no request mismatched.
    pub fn assert_done(&self) {
        let failures = self.failures.lock();
        assert!(failures.is_empty(), "unexpected requests: {failures:?}");
        let left: Vec<String> = self
            .expectations
            .lock()
            .iter()
            .map(|e| format!("{} {} {}", e.target, e.method, e.uri))
            .collect();
        assert!(left.is_empty(), "expected requests never sent: {left:?}");
    }

    fn fail(&self, msg: String) -> SockError {
        self.failures.lock().push(msg.clone());
        SockError::Unexpected(msg)
    }
}

#[async_trait]
impl Sock for MockSock {
    async fn request_publish(&self, target: &str, req: Request) -> Result<Response, SockError> {
        self.calls.lock().push((target.to_string(), req.clone()));

        let Some(exp) = self.expectations.lock().pop_front() else {
            return Err(self.fail(format!("{target} {} {}", req.method, req.uri)));
        };

        if exp.target != target || exp.method != req.method || exp.uri != req.uri {
            return Err(self.fail(format!(
                "got {target} {} {}, expected {} {} {}",
                req.method, req.uri, exp.target, exp.method, exp.uri
            )));
        }

        if let Some(body) = &exp.body
            && req.data.as_ref() != Some(body)
        {
            return Err(self.fail(format!(
                "{} {}: body {:?}, expected {body}",
                req.method, req.uri, req.data
            )));
        }

        Ok(exp.response)
    }
}

/// 200 response carrying `data` as JSON.
pub fn json_response<T: Serialize>(data: &T) -> Response {
    Response {
        status_code: 200,
        data_type: CONTENT_TYPE_JSON.to_string(),
        data: Some(serde_json::to_value(data).unwrap_or_default()),
    }
}

/// Response with the given status and no body.
pub fn status_response(status_code: u16) -> Response {
    Response {
        status_code,
        data_type: String::new(),
        data: None,
    }
}
