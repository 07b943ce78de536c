use crate::queue_name::QueueName;
use crate::sock::{Request, Response, Sock, SockError};
use async_trait::async_trait;
use http::StatusCode;
use url::Url;

/// Header carrying the queue a request was published to, so an upstream fronting
/// several pods can route pod-pinned requests.
pub const QUEUE_HEADER: &str = "x-queue";

const RPC_PATH: [&str; 2] = ["v1", "rpc"];

/// [`Sock`] that posts the request envelope to the HTTP endpoint of the manager
/// serving the target queue.
#[derive(Clone)]
pub struct HttpSock {
    client: reqwest::Client,
    upstreams: Vec<(QueueName, Url)>,
}

impl HttpSock {
    pub fn new(upstreams: Vec<(QueueName, Url)>) -> Self {
        HttpSock {
            client: reqwest::Client::new(),
            upstreams,
        }
    }

    fn upstream(&self, target: &str) -> Result<&Url, SockError> {
        self.upstreams
            .iter()
            .find(|(queue, _)| queue.serves(target))
            .map(|(_, url)| url)
            .ok_or_else(|| SockError::UnknownQueue(target.to_string()))
    }
}

/// Appends the RPC path to `base`, keeping any path prefix the upstream has.
fn rpc_url(base: &Url) -> Result<Url, SockError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| SockError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .extend(RPC_PATH);
    Ok(url)
}

#[async_trait]
impl Sock for HttpSock {
    async fn request_publish(&self, target: &str, req: Request) -> Result<Response, SockError> {
        let url = rpc_url(self.upstream(target)?)?;

        let response = self
            .client
            .post(url)
            .header(QUEUE_HEADER, target)
            .json(&req)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json::<Response>().await?),
            status => Err(SockError::TransportStatus(status.as_u16())),
        }
    }
}
