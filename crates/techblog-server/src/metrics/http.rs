//! HTTP request metrics.

use std::time::Instant;

use axum::{body::Body, extract::MatchedPath, http::Request, middleware::Next, response::Response};
use metrics::{counter, describe_counter, describe_histogram, histogram};

pub const HTTP_REQUESTS: &str = "techblog_http_requests_total";
pub const HTTP_REQUEST_SECONDS: &str = "techblog_http_request_duration_seconds";

/// Registra count y latencia de cada request.
///
/// El label `path` es la ruta del router (`/api/posts/{slug}`), nunca la URI
/// cruda; las rutas desconocidas van como `unmatched`.
pub async fn http_metrics_middleware(
    matched_path: Option<MatchedPath>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let started = Instant::now();
    let method = request.method().as_str().to_owned();
    let path = matched_path
        .as_ref()
        .map_or("unmatched", MatchedPath::as_str)
        .to_owned();

    let response = next.run(request).await;

    let status = response.status().as_u16().to_string();
    counter!(HTTP_REQUESTS, "method" => method.clone(), "path" => path.clone(), "status" => status)
        .increment(1);
    histogram!(HTTP_REQUEST_SECONDS, "method" => method, "path" => path)
        .record(started.elapsed().as_secs_f64());

    response
}

/// Describe las metricas HTTP en el recorder global.
pub fn register_http_metrics() {
    describe_counter!(HTTP_REQUESTS, "HTTP requests served, by route and status");
    describe_histogram!(HTTP_REQUEST_SECONDS, "HTTP request latency in seconds");
}
