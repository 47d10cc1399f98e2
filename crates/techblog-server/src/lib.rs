//! # Techblog Server
//!
//! Axum-based HTTP server for Tech Blogs.
//!
//! ## Endpoints
//!
//! - `GET /?slug=&q=` - pagina HTML: sidebar con busqueda + lista o detalle
//! - `GET /api/posts?q=` - lista de posts en JSON
//! - `GET /api/posts/{slug}` - post completo en JSON
//! - `GET /health` - estado del store
//! - `GET /metrics` - metricas Prometheus
//!
//! Las queries al store se cachean por argumento durante `cache.ttl_seconds`.

pub mod cache;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod queries;
pub mod render;
pub mod server;
pub mod settings;
pub mod state;
pub mod view;

pub use handlers::health::HealthResponse;
pub use server::{create_router, run_server};
pub use settings::Settings;
pub use state::AppState;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
