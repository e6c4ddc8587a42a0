use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum SiteError {
    #[error("not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[from] SqlxError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("multipart error: {0}")]
    Multipart(#[from] MultipartError),
}

impl IntoResponse for SiteError {
    fn into_response(self) -> axum::response::Response {
        match self {
            SiteError::NotFound => (
                StatusCode::NOT_FOUND,
                Html(crate::views::error_page(404, "Page not found").into_string()),
            )
                .into_response(),
            SiteError::Multipart(e) => {
                // Malformed client upload, not a server fault.
                (StatusCode::BAD_REQUEST, e.to_string()).into_response()
            }
            other => {
                error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(crate::views::error_page(500, "Internal server error").into_string()),
                )
                    .into_response()
            }
        }
    }
}
