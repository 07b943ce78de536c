pub mod config;

use config::Config;
use metrics_exporter_statsd::StatsdBuilder;
use requesthandler::RequestHandler;
use requesthandler::http_sock::HttpSock;
use servicehandler::ServiceHandler;
use servicehandler::dbhandler::AccesskeyCache;
use servicehandler::utilhandler::SystemUtil;
use shared::admin_service::AdminService;
use shared::http::{HttpServiceError, run_http_service};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

const METRICS_PREFIX: &str = "api_manager";

#[derive(thiserror::Error, Debug)]
pub enum ApiManagerError {
    #[error("metrics setup failed: {0}")]
    Metrics(String),
    #[error(transparent)]
    Http(#[from] HttpServiceError),
}

/// Wires the request handler, the access key cache and the system clock into a
/// [`ServiceHandler`] talking to the configured managers.
pub fn build_service_handler(config: &Config) -> ServiceHandler {
    let upstreams = config
        .upstreams
        .iter()
        .map(|upstream| (upstream.queue, upstream.url.clone()))
        .collect();
    let sock = Arc::new(HttpSock::new(upstreams));
    let req = RequestHandler::new(sock, config.publisher.clone()).with_timeout(config.request_timeout());

    let db = AccesskeyCache::new(
        config.accesskey_cache.size,
        Duration::from_secs(config.accesskey_cache.ttl_secs),
    );

    ServiceHandler::new(req, Arc::new(db), Arc::new(SystemUtil))
}

fn init_statsd(config: &config::MetricsConfig) -> Result<(), ApiManagerError> {
    let recorder = StatsdBuilder::from(config.statsd_host.clone(), config.statsd_port)
        .build(Some(METRICS_PREFIX))
        .map_err(|e| ApiManagerError::Metrics(e.to_string()))?;
    metrics::set_global_recorder(recorder).map_err(|e| ApiManagerError::Metrics(e.to_string()))?;

    tracing::info!(
        host = %config.statsd_host,
        port = config.statsd_port,
        "statsd exporter installed"
    );
    Ok(())
}

pub async fn run(config: Config) -> Result<(), ApiManagerError> {
    if let Some(metrics_config) = &config.metrics {
        init_statsd(metrics_config)?;
    }

    let metric_defs: Vec<_> = requesthandler::metrics_defs::ALL_METRICS
        .iter()
        .chain(servicehandler::metrics_defs::ALL_METRICS)
        .copied()
        .collect();
    shared::metrics_defs::describe_all(&metric_defs);

    let ready = Arc::new(AtomicBool::new(false));
    let admin_ready = ready.clone();
    let admin = AdminService::new(move || admin_ready.load(Ordering::Relaxed), metric_defs);

    let _handler = build_service_handler(&config);
    ready.store(true, Ordering::Relaxed);
    tracing::info!(
        publisher = %config.publisher,
        upstreams = config.upstreams.len(),
        "service handler ready"
    );

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for shutdown signal");
        }
    };

    run_http_service(
        &config.admin_listener.host,
        config.admin_listener.port,
        admin,
        shutdown,
    )
    .await?;

    Ok(())
}
