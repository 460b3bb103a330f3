// Router and application state wiring

use std::sync::Arc;

use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use antrean_core::application::{
    AccountService, PatientService, QueueService, UserAdminService,
};

/// Services injected by the composition root
pub struct AppState {
    pub queue: QueueService,
    pub patients: PatientService,
    pub users: UserAdminService,
    pub accounts: AccountService,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/queue/doctor/:doctor_uuid", get(crate::handler::doctor_queue))
        .route("/api/queue/pickup", get(crate::handler::pickup_queue))
        .route("/api/queue/:id/status", patch(crate::handler::update_queue_status))
        .route("/api/patients", post(crate::handler::register_patient))
        .route("/api/users", get(crate::handler::list_users))
        .route(
            "/api/users/:uuid",
            get(crate::handler::get_user).delete(crate::handler::delete_user),
        )
        .route("/api/register-user", post(crate::handler::register_user))
        .route("/api/login", post(crate::handler::login))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
