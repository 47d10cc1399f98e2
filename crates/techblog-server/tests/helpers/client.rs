//! Cliente HTTP en memoria para tests.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use http_body_util::BodyExt;
use techblog_server::{
    AppState, cache::CacheConfig, create_router, metrics::detached_handle, render::Credits,
};
use techblog_store::PostStore;
use tower::ServiceExt;

use super::fixtures::sample_store;

/// Envia requests al router sin abrir sockets.
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// GET sin headers extra.
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.get_with_headers(uri, Vec::new()).await
    }

    /// GET con los headers dados.
    pub async fn get_with_headers(&self, uri: &str, headers: Vec<(&str, &str)>) -> TestResponse {
        let request = headers
            .into_iter()
            .fold(Request::get(uri), |builder, (name, value)| {
                builder.header(name, value)
            })
            .body(Body::empty())
            .expect("Invalid test request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router returned an error");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

/// Respuesta ya leida, con assertions encadenables.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn text(&self) -> &str {
        &self.body
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("Body is not valid JSON ({}): {}", e, self.body))
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(self.status, expected, "Unexpected status. Body: {}", self.body);
        self
    }

    pub fn assert_content_type_contains(&self, expected: &str) -> &Self {
        let content_type = self.header("content-type").unwrap_or_default();
        assert!(
            content_type.contains(expected),
            "Content-Type '{}' does not contain '{}'",
            content_type,
            expected
        );
        self
    }

    pub fn assert_body_contains(&self, fragment: &str) -> &Self {
        assert!(
            self.body.contains(fragment),
            "Body does not contain '{}': {}",
            fragment,
            self.body
        );
        self
    }

    pub fn assert_body_lacks(&self, fragment: &str) -> &Self {
        assert!(
            !self.body.contains(fragment),
            "Body unexpectedly contains '{}': {}",
            fragment,
            self.body
        );
        self
    }

    pub fn assert_header_exists(&self, name: &str) -> &Self {
        assert!(self.headers.contains_key(name), "Missing header '{}'", name);
        self
    }

    pub fn assert_header(&self, name: &str, expected: &str) -> &Self {
        assert_eq!(self.header(name), Some(expected), "Header '{}'", name);
        self
    }
}

/// Cliente sobre `store`, con el TTL de cache indicado.
pub fn client_for(store: Arc<dyn PostStore>, ttl: Duration) -> TestClient {
    let cache = CacheConfig {
        ttl,
        ..CacheConfig::default()
    };
    TestClient::new(create_router(
        AppState::new(store, cache),
        detached_handle(),
    ))
}

/// Cliente sobre los posts de ejemplo con creditos propios en el footer.
pub fn client_with_credits(credits: Credits) -> TestClient {
    TestClient::new(create_router(
        AppState::new(sample_store(), CacheConfig::default()).with_credits(credits),
        detached_handle(),
    ))
}

/// Cliente sobre los posts de ejemplo, TTL de 300s.
pub fn client() -> TestClient {
    client_for(sample_store(), Duration::from_secs(300))
}
