//! Middleware stack para el servidor HTTP.
//!
//! - `RequestIdLayer`: genera/propaga X-Request-Id
//! - `LoggingLayer`: logging estructurado de requests
//!
//! El orden importa: `RequestIdLayer` va por fuera para que el span de
//! logging ya vea el ID.

mod logging;
mod request_id;

use std::future::Future;
use std::pin::Pin;

pub use logging::{LoggingLayer, LoggingMiddleware};
pub use request_id::{REQUEST_ID_HEADER, RequestIdLayer, RequestIdMiddleware};

/// Future boxeado que devuelven los servicios de este modulo.
pub type BoxFuture<T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send>>;
