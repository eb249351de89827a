//! Unified error handling
//!
//! [`AppError`] maps every failure to the wire contract of this service:
//! validation and not-found problems answer a 4xx with `{"mensaje": ...}`,
//! while database failures answer 500 with `{"error": ...}` carrying the
//! driver message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;

/// Body for validation / not-found failures and plain-message successes
#[derive(Debug, Serialize)]
pub struct MensajeBody {
    pub mensaje: String,
}

/// Body for 500 responses
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    /// 404, `{"mensaje": ...}`
    NotFound(String),

    #[error("Validation failed: {0}")]
    /// 400, `{"mensaje": ...}`
    Validation(String),

    #[error("Database error: {0}")]
    /// 500, `{"error": <driver message>}`
    Database(String),
}

// ========== Helper constructors ==========

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(mensaje) => {
                (StatusCode::NOT_FOUND, Json(MensajeBody { mensaje })).into_response()
            }
            AppError::Validation(mensaje) => {
                (StatusCode::BAD_REQUEST, Json(MensajeBody { mensaje })).into_response()
            }
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody { error: msg }),
                )
                    .into_response()
            }
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}
