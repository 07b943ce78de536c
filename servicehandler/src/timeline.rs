use crate::permission::MANAGER_MASK;
use crate::{Result, ServiceError, ServiceHandler, fetch_authorized};
use models::activeflow::Activeflow;
use models::agent::Agent;
use models::call::Call;
use models::conference::Conference;
use models::flow::Flow;
use models::timeline::{Event, EventListRequest, TimelineEvent};
use models::WebhookConvert;
use serde::de::DeserializeOwned;
use uuid::Uuid;

const EVENT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Resource families whose history the timeline manager records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineResource {
    Calls,
    Conferences,
    Flows,
    Activeflows,
}

impl TimelineResource {
    pub fn parse(resource_type: &str) -> Option<Self> {
        match resource_type {
            "calls" => Some(TimelineResource::Calls),
            "conferences" => Some(TimelineResource::Conferences),
            "flows" => Some(TimelineResource::Flows),
            "activeflows" => Some(TimelineResource::Activeflows),
            _ => None,
        }
    }

    /// Manager that published the events.
    fn publisher(&self) -> &'static str {
        match self {
            TimelineResource::Calls => "call-manager",
            TimelineResource::Conferences => "conference-manager",
            TimelineResource::Flows | TimelineResource::Activeflows => "flow-manager",
        }
    }

    fn event_pattern(&self) -> &'static str {
        match self {
            TimelineResource::Calls => "call_*",
            TimelineResource::Conferences => "conference_*",
            TimelineResource::Flows => "flow_*",
            TimelineResource::Activeflows => "activeflow_*",
        }
    }
}

/// Replaces each event's raw snapshot with the public view of `T`.
///
/// Events whose snapshot does not decode as `T` are skipped.
fn convert_events<T>(events: Vec<Event>) -> Vec<TimelineEvent>
where
    T: DeserializeOwned + WebhookConvert,
{
    events
        .into_iter()
        .filter_map(|event| {
            let data = serde_json::from_value::<T>(event.data)
                .and_then(|res| serde_json::to_value(res.convert_webhook_message()));
            match data {
                Ok(data) => Some(TimelineEvent {
                    timestamp: event.timestamp.format(EVENT_TIME_FORMAT).to_string(),
                    event_type: event.event_type,
                    data,
                }),
                Err(err) => {
                    tracing::warn!(event_type = %event.event_type, error = %err, "could not convert the timeline event");
                    None
                }
            }
        })
        .collect()
}

impl ServiceHandler {
    /// One page of the history of a resource the caller may read, with the token of the
    /// next page. An empty token asks for the newest events.
    pub async fn timeline_event_list(
        &self,
        a: &Agent,
        resource_type: &str,
        resource_id: Uuid,
        size: u64,
        token: &str,
    ) -> Result<(Vec<TimelineEvent>, String)> {
        let resource = TimelineResource::parse(resource_type).ok_or_else(|| {
            ServiceError::InvalidArgument(format!("unsupported resource type {resource_type}"))
        })?;

        match resource {
            TimelineResource::Calls => {
                fetch_authorized(a, MANAGER_MASK, self.req.call_v1_call_get(resource_id)).await?;
            }
            TimelineResource::Conferences => {
                fetch_authorized(a, MANAGER_MASK, self.req.conference_v1_conference_get(resource_id)).await?;
            }
            TimelineResource::Flows => {
                fetch_authorized(a, MANAGER_MASK, self.req.flow_v1_flow_get(resource_id)).await?;
            }
            TimelineResource::Activeflows => {
                fetch_authorized(a, MANAGER_MASK, self.req.flow_v1_activeflow_get(resource_id)).await?;
            }
        }

        let req = EventListRequest {
            publisher: resource.publisher().to_string(),
            resource_id,
            events: vec![resource.event_pattern().to_string()],
            page_size: size,
            page_token: token.to_string(),
        };
        let res = self.req.timeline_v1_event_list(&req).await?;

        let events = match resource {
            TimelineResource::Calls => convert_events::<Call>(res.result),
            TimelineResource::Conferences => convert_events::<Conference>(res.result),
            TimelineResource::Flows => convert_events::<Flow>(res.result),
            TimelineResource::Activeflows => convert_events::<Activeflow>(res.result),
        };
        Ok((events, res.next_page_token))
    }
}

#[cfg(test)]
mod tests {
    use crate::ServiceError;
    use crate::testing;
    use chrono::{TimeZone, Utc};
    use models::agent::Permission;
    use models::call::Call;
    use models::timeline::{Event, EventListResponse};
    use models::Identity;
    use requesthandler::testutils::json_response;
    use requesthandler::{QueueName, RequestMethod};
    use serde_json::json;
    use uuid::Uuid;

    fn call(customer_id: Uuid) -> Call {
        Call {
            identity: Identity::new(Uuid::new_v4(), customer_id),
            channel_id: "asterisk-call-5765d977d8-c4k5q-1629605410.6626".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_timeline_call_events() {
        let (handler, mock) = testing::handler();
        let customer_id = Uuid::new_v4();
        let a = testing::agent(customer_id, Permission::CUSTOMER_ADMIN);
        let c = call(customer_id);
        let events = EventListResponse {
            result: vec![
                Event {
                    timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
                        + chrono::Duration::milliseconds(250),
                    event_type: "call_hangup".into(),
                    publisher: "call-manager".into(),
                    data: serde_json::to_value(&c).unwrap(),
                },
                Event {
                    timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 8, 59, 0).unwrap(),
                    event_type: "call_created".into(),
                    publisher: "call-manager".into(),
                    data: json!("not a call"),
                },
            ],
            next_page_token: "2024-05-01T08:59:00.000000Z".into(),
        };

        mock.expect(
            QueueName::Call.as_str(),
            RequestMethod::Get,
            &format!("/v1/calls/{}", c.identity.id),
            json_response(&c),
        );
        mock.expect_with_body(
            QueueName::Timeline.as_str(),
            RequestMethod::Post,
            "/v1/events",
            json!({
                "publisher": "call-manager",
                "resource_id": c.identity.id,
                "events": ["call_*"],
                "page_size": 10,
                "page_token": "",
            }),
            json_response(&events),
        );

        let (res, next) = handler
            .timeline_event_list(&a, "calls", c.identity.id, 10, "")
            .await
            .unwrap();
        assert_eq!(next, "2024-05-01T08:59:00.000000Z");
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].timestamp, "2024-05-01T09:00:00.250Z");
        assert_eq!(res[0].event_type, "call_hangup");
        assert_eq!(res[0].data["id"], c.identity.id.to_string());
        assert!(res[0].data.get("channel_id").is_none());
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_timeline_other_customer() {
        let (handler, mock) = testing::handler();
        let a = testing::agent(Uuid::new_v4(), Permission::CUSTOMER_ADMIN);
        let c = call(Uuid::new_v4());
        mock.expect(
            QueueName::Call.as_str(),
            RequestMethod::Get,
            &format!("/v1/calls/{}", c.identity.id),
            json_response(&c),
        );

        let err = handler
            .timeline_event_list(&a, "calls", c.identity.id, 10, "")
            .await
            .unwrap_err();
        assert!(err.is_forbidden());
        assert_eq!(mock.calls().len(), 1);
        mock.assert_done();
    }

    #[tokio::test]
    async fn test_timeline_unsupported_resource() {
        let (handler, mock) = testing::handler();
        let a = testing::agent(Uuid::new_v4(), Permission::CUSTOMER_ADMIN);

        let err = handler
            .timeline_event_list(&a, "agents", Uuid::new_v4(), 10, "")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidArgument(_)));
        assert!(mock.calls().is_empty());
    }
}
