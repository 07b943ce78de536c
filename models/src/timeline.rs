use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Event as stored by the timeline manager, with the raw resource snapshot as data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub timestamp: DateTime<Utc>,
    pub event_type: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub data: Value,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventListRequest {
    pub publisher: String,
    pub resource_id: Uuid,
    /// Event type patterns, e.g. `call_*`.
    pub events: Vec<String>,
    pub page_size: u64,
    pub page_token: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventListResponse {
    #[serde(default)]
    pub result: Vec<Event>,
    #[serde(default)]
    pub next_page_token: String,
}

/// Timeline entry returned to API callers. `data` holds the public view of the
/// resource at the time of the event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub timestamp: String,
    pub event_type: String,
    pub data: Value,
}
