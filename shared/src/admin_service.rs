use crate::http::make_boxed_error_response;
use crate::metrics_defs::MetricDef;
use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::service::Service;
use hyper::{Request, Response, StatusCode};
use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Answers `/health`, `/ready` and `/metrics/definitions` for a running process.
pub struct AdminService {
    is_ready: Arc<dyn Fn() -> bool + Send + Sync>,
    metric_defs: Vec<MetricDef>,
}

impl AdminService {
    pub fn new<F>(is_ready: F, metric_defs: Vec<MetricDef>) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Self {
            is_ready: Arc::new(is_ready),
            metric_defs,
        }
    }

    fn respond(&self, path: &str) -> Response<BoxBody<Bytes, Infallible>> {
        let text = |s: String| Response::new(Full::new(Bytes::from(s)).boxed());

        match path {
            "/health" => text("ok\n".into()),
            "/ready" => match (self.is_ready)() {
                true => text("ok\n".into()),
                false => make_boxed_error_response(StatusCode::SERVICE_UNAVAILABLE),
            },
            "/metrics/definitions" => text(render_metric_defs(&self.metric_defs)),
            _ => make_boxed_error_response(StatusCode::NOT_FOUND),
        }
    }
}

fn render_metric_defs(defs: &[MetricDef]) -> String {
    defs.iter()
        .map(|d| {
            format!(
                "{} {} {}\n",
                d.name,
                d.metric_type.as_str().to_lowercase(),
                d.description
            )
        })
        .collect()
}

impl Service<Request<Incoming>> for AdminService {
    type Response = Response<BoxBody<Bytes, Infallible>>;
    type Error = Infallible;
    type Future =
        Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send + 'static>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let res = self.respond(req.uri().path());
        Box::pin(async move { Ok(res) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics_defs::MetricType;
    use std::sync::atomic::{AtomicBool, Ordering};

    const DEF: MetricDef = MetricDef {
        name: "request.duration",
        metric_type: MetricType::Histogram,
        description: "Time spent waiting for a backend response",
    };

    #[test]
    fn test_readiness_follows_probe() {
        let ready = Arc::new(AtomicBool::new(false));
        let probe = ready.clone();
        let svc = AdminService::new(move || probe.load(Ordering::Relaxed), vec![]);

        assert_eq!(svc.respond("/health").status(), StatusCode::OK);
        assert_eq!(
            svc.respond("/ready").status(),
            StatusCode::SERVICE_UNAVAILABLE
        );

        ready.store(true, Ordering::Relaxed);
        assert_eq!(svc.respond("/ready").status(), StatusCode::OK);
        assert_eq!(svc.respond("/unknown").status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_render_metric_defs() {
        assert_eq!(
            render_metric_defs(&[DEF]),
            "request.duration histogram Time spent waiting for a backend response\n"
        );
    }
}
