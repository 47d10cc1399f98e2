//! Middleware de logging estructurado.

use std::task::{Context, Poll};
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
};
use tower::{Layer, Service};
use tracing::{Instrument, Span};

use super::BoxFuture;
use super::request_id::REQUEST_ID_HEADER;

/// Layer that wraps each request in an `http_request` span.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingLayer;

impl<S> Layer<S> for LoggingLayer {
    type Service = LoggingMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        LoggingMiddleware { inner }
    }
}

#[derive(Clone, Debug)]
pub struct LoggingMiddleware<S> {
    inner: S,
}

/// Span de un request: request_id, method y path.
fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    )
}

fn log_completion(status: StatusCode, elapsed: Duration) {
    let duration_ms = elapsed.as_millis() as u64;

    if status.is_server_error() {
        tracing::warn!(status = status.as_u16(), duration_ms, "Request failed");
    } else {
        tracing::info!(status = status.as_u16(), duration_ms, "Request completed");
    }
}

impl<S> Service<Request<Body>> for LoggingMiddleware<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response<Body>;
    type Error = S::Error;
    type Future = BoxFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let span = request_span(&request);
        let started = Instant::now();
        let future = self.inner.call(request);

        Box::pin(
            async move {
                tracing::info!("Request started");
                let response = future.await?;
                log_completion(response.status(), started.elapsed());
                Ok(response)
            }
            .instrument(span),
        )
    }
}
