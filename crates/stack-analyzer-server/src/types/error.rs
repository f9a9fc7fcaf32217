//! Error type for the HTTP API and its mapping to responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use stack_analyzer::AnalyzerError;

/// All errors that can occur in the server.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),

    #[error("Invalid request body")]
    InvalidBody(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Analyzer(AnalyzerError::Catalog(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Analyzer(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Transport(_) | ApiError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Display strings are user-facing; detail goes to the log only.
        tracing::warn!(status = status.as_u16(), error = ?self, "request failed");
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
