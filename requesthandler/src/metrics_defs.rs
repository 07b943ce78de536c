//! Metrics definitions for the request handler.

use shared::metrics_defs::{MetricDef, MetricType};

pub const REQUEST_DURATION: MetricDef = MetricDef {
    name: "request.duration",
    metric_type: MetricType::Histogram,
    description: "Time in seconds spent waiting for a backend manager to reply",
};

pub const REQUEST_FAILED: MetricDef = MetricDef {
    name: "request.failed",
    metric_type: MetricType::Counter,
    description: "Number of backend requests that failed in transport or returned an error status",
};

pub const REQUEST_TIMEOUT: MetricDef = MetricDef {
    name: "request.timeout",
    metric_type: MetricType::Counter,
    description: "Number of backend requests that exceeded the request timeout",
};

pub const ALL_METRICS: &[MetricDef] = &[REQUEST_DURATION, REQUEST_FAILED, REQUEST_TIMEOUT];
