use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum TriviaError {
    #[error("bad request: {}", .0.as_deref().unwrap_or("bad request"))]
    BadRequest(Option<String>),

    #[error("not found: {}", .0.as_deref().unwrap_or("resource not found"))]
    NotFound(Option<String>),

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("unprocessable: {}", .0.as_deref().unwrap_or("unprocessable"))]
    Unprocessable(Option<String>),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Config error: {0}")]
    Config(#[from] figment::Error),
}

impl TriviaError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        TriviaError::BadRequest(Some(message.into()))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        TriviaError::NotFound(Some(message.into()))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            TriviaError::BadRequest(_) => StatusCode::BAD_REQUEST,
            TriviaError::NotFound(_) => StatusCode::NOT_FOUND,
            TriviaError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            TriviaError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            TriviaError::Database(_) | TriviaError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Client-facing message. Internal failures never expose their source text.
    pub fn message(&self) -> String {
        let (custom, default) = match self {
            TriviaError::BadRequest(m) => (m, "bad request"),
            TriviaError::NotFound(m) => (m, "resource not found"),
            TriviaError::Unprocessable(m) => (m, "unprocessable"),
            TriviaError::MethodNotAllowed => return "method not allowed".to_string(),
            TriviaError::Database(_) | TriviaError::Config(_) => {
                return "internal server error".to_string();
            }
        };
        custom.clone().unwrap_or_else(|| default.to_string())
    }
}

impl IntoResponse for TriviaError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed with internal error");
        }
        let body = ApiErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.message(),
        };
        (status, Json(body)).into_response()
    }
}

/// Standardized API error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: String,
}
