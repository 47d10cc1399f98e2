use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::cache::CacheError;

#[derive(Debug)]
pub enum AppError {
    /// Post no encontrado
    NotFound { slug: String },

    /// Error interno (store inaccesible, configuracion invalida)
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl From<CacheError> for AppError {
    fn from(err: CacheError) -> Self {
        tracing::error!(error = %err, "Query failed");
        AppError::Internal("Failed to load posts".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::NotFound { slug } => (
                StatusCode::NOT_FOUND,
                "Not Found",
                format!("Blog not found: {}", slug),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                msg,
            ),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message,
        });

        (status, body).into_response()
    }
}
