// Antrean HTTP API - axum surface
//
// Thin controllers: translate requests into service calls, wrap every
// result in the uniform envelope, and map errors to HTTP statuses in
// exactly one place (error.rs).

pub mod error;
pub mod handler;
pub mod router;
pub mod types;

pub use error::{ApiError, ApiResult};
pub use router::{build_router, AppState};
