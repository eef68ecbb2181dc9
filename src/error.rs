use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::ApiStatus;

/// Business failures (bad input, duplicate email, wrong credentials) are
/// reported inside 200 responses; this enum only covers faults that should
/// surface as a server error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error")]
    DbError(#[from] sqlx::Error),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self, "request failed");

        // Display strings above are generic; internals stay in the logs.
        let body = ApiStatus::failure(self.to_string());
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
