use crate::{QueueName, RequestHandler, RequestMethod, Result};
use models::timeline::{EventListRequest, EventListResponse};

const RESOURCE: &str = "timeline/events";

impl RequestHandler {
    /// One page of the recorded events of a resource, newest first.
    pub async fn timeline_v1_event_list(&self, req: &EventListRequest) -> Result<EventListResponse> {
        self.request(
            QueueName::Timeline.as_str(),
            "/v1/events",
            RequestMethod::Post,
            RESOURCE,
            Some(serde_json::to_value(req)?),
        )
        .await
    }
}
