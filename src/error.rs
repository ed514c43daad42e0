//! # Application Errors
//!
//! Errors that escape a request handler. Each variant maps to an HTTP
//! status and a minimal JSON body; details are logged, never returned.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The database liveness query itself failed (pool exhausted, connect
    /// error, acquire timeout). Not contained by the health check.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            Self::Database(e) => {
                tracing::error!(error = ?e, "Database error");
                "Database error"
            }
        };

        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}

pub type AppResult<T> = Result<T, AppError>;
