use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Layout of pagination tokens. Backends order rows by creation time and return the
/// page older than the token.
pub const TOKEN_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

pub trait UtilHandler: Send + Sync {
    fn time_now(&self) -> DateTime<Utc>;

    /// Current time formatted as a pagination token.
    fn time_get_cur_time(&self) -> String {
        self.time_now().format(TOKEN_TIME_FORMAT).to_string()
    }

    fn uuid_create(&self) -> Uuid {
        Uuid::new_v4()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemUtil;

impl UtilHandler for SystemUtil {
    fn time_now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
