// Local store consulted before the customer manager when resolving access keys.
use crate::metrics_defs::{ACCESSKEY_CACHE_HIT, ACCESSKEY_CACHE_MISS};
use models::customer::Accesskey;
use moka::sync::Cache;
use shared::counter;
use std::time::Duration;

pub const DEFAULT_SIZE: u64 = 10_000;
pub const DEFAULT_TTL_SECS: u64 = 60;

pub trait DbHandler: Send + Sync {
    fn accesskey_get_by_token(&self, token: &str) -> Option<Accesskey>;

    fn accesskey_set(&self, accesskey: &Accesskey);

    fn accesskey_delete(&self, token: &str);
}

pub struct AccesskeyCache {
    cache: Cache<String, Accesskey>,
}

impl AccesskeyCache {
    pub fn new(size: u64, ttl: Duration) -> Self {
        let cache = Cache::builder().max_capacity(size).time_to_live(ttl).build();

        AccesskeyCache { cache }
    }
}

impl Default for AccesskeyCache {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, Duration::from_secs(DEFAULT_TTL_SECS))
    }
}

impl DbHandler for AccesskeyCache {
    fn accesskey_get_by_token(&self, token: &str) -> Option<Accesskey> {
        let res = self.cache.get(token);
        let metric_def = if res.is_some() {
            ACCESSKEY_CACHE_HIT
        } else {
            ACCESSKEY_CACHE_MISS
        };
        counter!(metric_def).increment(1);
        res
    }

    fn accesskey_set(&self, accesskey: &Accesskey) {
        self.cache.insert(accesskey.token.clone(), accesskey.clone());
    }

    fn accesskey_delete(&self, token: &str) {
        self.cache.invalidate(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_delete() {
        let cache = AccesskeyCache::default();
        let key = Accesskey {
            token: "a8f1c2e7b3d94c0f".into(),
            name: "ci".into(),
            ..Default::default()
        };

        assert!(cache.accesskey_get_by_token(&key.token).is_none());
        cache.accesskey_set(&key);
        assert_eq!(cache.accesskey_get_by_token(&key.token), Some(key.clone()));
        cache.accesskey_delete(&key.token);
        assert!(cache.accesskey_get_by_token(&key.token).is_none());
    }
}
