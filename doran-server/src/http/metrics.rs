//! Prometheus metrics: request counters/latency plus LLM call outcomes.

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::middleware::Next;
use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec,
    TextEncoder,
};
use std::time::Instant;

lazy_static! {
    static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "http_requests_total",
        "Total number of HTTP requests",
        &["method", "route", "status"]
    )
    .expect("Failed to register HTTP_REQUESTS_TOTAL");
    static ref HTTP_REQUEST_DURATION: HistogramVec = register_histogram_vec!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "route"]
    )
    .expect("Failed to register HTTP_REQUEST_DURATION");
    static ref LLM_CALLS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "llm_calls_total",
        "External model calls by purpose and outcome",
        &["purpose", "outcome"]
    )
    .expect("Failed to register LLM_CALLS_TOTAL");
}

/// Records one external model call. `purpose` is the pipeline step
/// (needs_data, direct_reply, analysis).
pub fn observe_llm_call(purpose: &str, ok: bool) {
    let outcome = if ok { "ok" } else { "error" };
    LLM_CALLS_TOTAL.with_label_values(&[purpose, outcome]).inc();
}

/// Middleware for Prometheus metrics collection.
pub async fn metrics_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let method = req.method().to_string();
    let path = normalize_path(req.uri().path());

    let start = Instant::now();
    let response = next.run(req).await;
    let duration = start.elapsed().as_secs_f64();

    let status = response.status().as_u16().to_string();

    HTTP_REQUESTS_TOTAL
        .with_label_values(&[&method, &path, &status])
        .inc();
    HTTP_REQUEST_DURATION
        .with_label_values(&[&method, &path])
        .observe(duration);

    response
}

/// Normalize the route path for consistent labeling. Record ids collapse to
/// one label to keep cardinality bounded.
fn normalize_path(path: &str) -> String {
    let path = path
        .split('?')
        .next()
        .unwrap_or("/")
        .trim_end_matches('/');
    if path.starts_with("/record/") {
        return "/record/:record_id".to_string();
    }
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

/// GET /metrics: Prometheus text exposition.
pub async fn metrics_handler() -> Result<String, StatusCode> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    if encoder.encode(&metric_families, &mut buffer).is_err() {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    String::from_utf8(buffer).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}
