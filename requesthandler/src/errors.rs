use crate::sock::{RequestMethod, SockError};
use thiserror::Error;

/// Result type alias for backend requests
pub type Result<T, E = RequestError> = std::result::Result<T, E>;

/// Errors that can occur while talking to a backend manager
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("could not send the request. queue: {target}, method: {method}, uri: {uri}: {source}")]
    Send {
        target: String,
        method: RequestMethod,
        uri: String,
        #[source]
        source: SockError,
    },

    #[error("request timed out. queue: {target}, method: {method}, uri: {uri}")]
    Timeout {
        target: String,
        method: RequestMethod,
        uri: String,
    },

    #[error("response code: {0}")]
    Status(u16),

    #[error("empty response. queue: {target}, uri: {uri}")]
    EmptyResponse { target: String, uri: String },

    #[error("could not parse the response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl RequestError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RequestError::Status(code) => Some(*code),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }
}
