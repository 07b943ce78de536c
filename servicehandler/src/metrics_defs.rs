//! Metrics definitions for the service handler.

use shared::metrics_defs::{MetricDef, MetricType};

pub const PERMISSION_DENIED: MetricDef = MetricDef {
    name: "permission.denied",
    metric_type: MetricType::Counter,
    description: "Number of operations rejected by the permission check",
};

pub const ACCESSKEY_CACHE_HIT: MetricDef = MetricDef {
    name: "accesskey_cache.hit",
    metric_type: MetricType::Counter,
    description: "Access key lookups answered from the local cache",
};

pub const ACCESSKEY_CACHE_MISS: MetricDef = MetricDef {
    name: "accesskey_cache.miss",
    metric_type: MetricType::Counter,
    description: "Access key lookups that had to ask the customer manager",
};

pub const ALL_METRICS: &[MetricDef] = &[PERMISSION_DENIED, ACCESSKEY_CACHE_HIT, ACCESSKEY_CACHE_MISS];
