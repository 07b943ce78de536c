//! Self-service operations of the agent API.
//!
//! Every role of a customer may use them. Access is decided by what the agent owns or
//! takes part in (its calls, its chats) rather than by the manager permission bits.

mod call;
mod contact;
mod talk;

use models::filter::{FIELD_DELETED, Filters};
use models::identity::OWNER_TYPE_AGENT;
use serde_json::json;
use uuid::Uuid;

/// Filters selecting the non-deleted rows owned by one agent.
fn agent_owned_filters(agent_id: Uuid) -> Filters {
    let mut filters = Filters::new();
    filters.insert("owner_type".into(), json!(OWNER_TYPE_AGENT));
    filters.insert("owner_id".into(), json!(agent_id));
    filters.insert(FIELD_DELETED.into(), json!(false));
    filters
}
