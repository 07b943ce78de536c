use crate::ServiceHandler;
use crate::dbhandler::AccesskeyCache;
use crate::utilhandler::UtilHandler;
use chrono::{DateTime, TimeZone, Utc};
use models::Identity;
use models::agent::{Agent, Permission};
use requesthandler::RequestHandler;
use requesthandler::testutils::MockSock;
use std::sync::Arc;
use uuid::Uuid;

/// Token every list sends when the caller passes an empty one.
pub const NOW_TOKEN: &str = "2024-05-01T10:20:30.000000Z";

/// Id handed out by [`FixedUtil::uuid_create`].
pub const CREATED_ID: Uuid = Uuid::from_u128(0x3c1e0a52_07f4_11ef_9a5d_5b0e7c2d4f61);

pub struct FixedUtil;

impl UtilHandler for FixedUtil {
    fn time_now(&self) -> DateTime<Utc> {
        now()
    }

    fn uuid_create(&self) -> Uuid {
        CREATED_ID
    }
}

/// The fixed current time of every test handler.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 10, 20, 30).unwrap()
}

pub fn handler() -> (ServiceHandler, Arc<MockSock>) {
    let mock = Arc::new(MockSock::new());
    let req = RequestHandler::new(mock.clone(), "api-manager");
    let handler = ServiceHandler::new(req, Arc::new(AccesskeyCache::default()), Arc::new(FixedUtil));
    (handler, mock)
}

pub fn agent(customer_id: Uuid, permission: Permission) -> Agent {
    Agent {
        identity: Identity::new(Uuid::new_v4(), customer_id),
        username: "test@voipbin.net".into(),
        permission,
        ..Default::default()
    }
}

pub fn deleted_at() -> Option<DateTime<Utc>> {
    Some(Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap())
}

/// Encoded `page_token` query value of [`NOW_TOKEN`].
pub fn now_token_escaped() -> &'static str {
    "2024-05-01T10%3A20%3A30.000000Z"
}
