// Error Translation Layer
//
// The single place where application errors become HTTP statuses:
//   validation          -> 400 with itemized field errors
//   domain-rule / state -> 400 with a readable reason
//   not-found           -> 404
//   everything else     -> 500 with a generic message; the real cause
//                          goes to the log, never to the client

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use antrean_core::error::AppError;

use crate::types::Envelope;

pub struct ApiError(pub AppError);

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self.0 {
            AppError::Validation(errs) => (
                StatusCode::BAD_REQUEST,
                "validation failed".to_string(),
                Some(errs.into_vec()),
            ),
            AppError::Domain(err) => (StatusCode::BAD_REQUEST, err.to_string(), None),
            AppError::BadRequest(msg) | AppError::Conflict(msg) => {
                (StatusCode::BAD_REQUEST, msg, None)
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            err @ (AppError::Database(_)
            | AppError::Serialization(_)
            | AppError::Config(_)
            | AppError::Internal(_)) => {
                tracing::error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    None,
                )
            }
        };

        Envelope::<()>::error(status, message, errors).into_response()
    }
}
