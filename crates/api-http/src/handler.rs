// HTTP Handlers
//
// Controllers stay thin: parse input, call the service, envelope the
// result. Error mapping happens in ApiError, not here.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;

use antrean_core::application::account::{LoginRequest, RegisterUserRequest};
use antrean_core::application::patient::{PatientResponse, RegisterPatientRequest};
use antrean_core::application::queue::StatusUpdate;
use antrean_core::domain::QueueStatus;
use antrean_core::port::{DoctorQueueRow, PickupQueueRow};

use crate::error::ApiResult;
use crate::router::AppState;
use crate::types::{Envelope, PageParams, UpdateStatusRequest, UserDto};

/// GET /api/queue/doctor/{doctor_uuid}
pub async fn doctor_queue(
    State(state): State<Arc<AppState>>,
    Path(doctor_uuid): Path<String>,
    Query(params): Query<PageParams>,
) -> ApiResult<Envelope<Vec<DoctorQueueRow>>> {
    let page = params.into_request()?;
    let (rows, info) = state.queue.list_for_doctor(page, &doctor_uuid).await?;
    Ok(Envelope::paginated(rows, info))
}

/// GET /api/queue/pickup
pub async fn pickup_queue(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> ApiResult<Envelope<Vec<PickupQueueRow>>> {
    let page = params.into_request()?;
    let (rows, info) = state.queue.list_pickup(page).await?;
    Ok(Envelope::paginated(rows, info))
}

/// PATCH /api/queue/{id}/status
pub async fn update_queue_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateStatusRequest>,
) -> ApiResult<Envelope<StatusUpdate>> {
    let status = QueueStatus::from_str(&body.status).map_err(antrean_core::AppError::from)?;
    let update = state.queue.update_status(id, status).await?;
    Ok(Envelope::with_message(
        axum::http::StatusCode::OK,
        update,
        format!("queue status updated to {}", update.status),
    ))
}

/// POST /api/patients
pub async fn register_patient(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterPatientRequest>,
) -> ApiResult<Envelope<PatientResponse>> {
    let patient = state.patients.register(body).await?;
    Ok(Envelope::created(patient, "patient registered"))
}

/// GET /api/users
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> ApiResult<Envelope<Vec<UserDto>>> {
    let page = params.into_request()?;
    let (users, info) = state.users.list(page).await?;
    let dtos = users.into_iter().map(UserDto::from).collect();
    Ok(Envelope::paginated(dtos, info))
}

/// GET /api/users/{uuid}
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(uuid): Path<String>,
) -> ApiResult<Envelope<UserDto>> {
    let user = state.users.get(&uuid).await?;
    Ok(Envelope::ok(UserDto::from(user)))
}

/// DELETE /api/users/{uuid}
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(uuid): Path<String>,
) -> ApiResult<Envelope<UserDto>> {
    let user = state.users.delete(&uuid).await?;
    let message = format!("deleted user {}", user.full_name);
    Ok(Envelope::with_message(
        axum::http::StatusCode::OK,
        UserDto::from(user),
        message,
    ))
}

/// POST /api/register-user
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterUserRequest>,
) -> ApiResult<Envelope<UserDto>> {
    let user = state.accounts.register(body).await?;
    Ok(Envelope::created(UserDto::from(user), "user registered"))
}

/// POST /api/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<Envelope<UserDto>> {
    let user = state.accounts.login(body).await?;
    Ok(Envelope::with_message(
        axum::http::StatusCode::OK,
        UserDto::from(user),
        "login successful",
    ))
}
