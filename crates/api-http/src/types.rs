// HTTP Request/Response Types and the uniform envelope

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use antrean_core::domain::{PageInfo, PageRequest, User, DEFAULT_PAGE_SIZE};
use antrean_core::error::{FieldError, Result};

/// Uniform response envelope:
/// `{ data, pagination?, status_code, message, errors? }`
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageInfo>,
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self::with_message(StatusCode::OK, data, "success")
    }

    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::with_message(StatusCode::CREATED, data, message)
    }

    pub fn with_message(status: StatusCode, data: T, message: impl Into<String>) -> Self {
        Self {
            data: Some(data),
            pagination: None,
            status_code: status.as_u16(),
            message: message.into(),
            errors: None,
        }
    }

    pub fn paginated(data: T, pagination: PageInfo) -> Self {
        Self {
            data: Some(data),
            pagination: Some(pagination),
            status_code: StatusCode::OK.as_u16(),
            message: "success".to_string(),
            errors: None,
        }
    }

    /// Error envelope (data is null)
    pub fn error(
        status: StatusCode,
        message: impl Into<String>,
        errors: Option<Vec<FieldError>>,
    ) -> Self {
        Self {
            data: None,
            pagination: None,
            status_code: status.as_u16(),
            message: message.into(),
            errors,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// `?page&size` query parameters, both optional
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl PageParams {
    pub fn into_request(self) -> Result<PageRequest> {
        Ok(PageRequest::new(
            self.page.unwrap_or(1),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
        )?)
    }
}

/// Queue status transition request. The status arrives as a string so
/// an unknown value reports a validation error instead of a framework
/// rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// User projection; never carries the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub uuid: String,
    pub username: String,
    pub full_name: String,
    pub role: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            uuid: user.uuid,
            username: user.username,
            full_name: user.full_name,
            role: user.role,
        }
    }
}
