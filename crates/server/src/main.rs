//! Antrean Backend - Main Entry Point
//!
//! Composition root: configuration, database, dependency wiring, HTTP.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use antrean_api_http::{build_router, AppState};
use antrean_core::application::{
    AccountService, PatientService, QueueService, UserAdminService,
};
use antrean_core::port::clock::SystemClock;
use antrean_core::port::id_provider::UuidProvider;
use antrean_infra_sqlite::{
    create_pool, run_migrations, SqliteDepartmentRepository, SqlitePatientRepository,
    SqliteQueueEntryRepository, SqliteUserRepository,
};
use chrono::FixedOffset;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_DB_PATH: &str = "~/.antrean/antrean.db";
const DEFAULT_HTTP_PORT: u16 = 8080;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize logging
    let log_format = std::env::var("ANTREAN_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("antrean=info"))
        .expect("Failed to create env filter");

    match log_format.as_str() {
        "json" => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    info!("Antrean backend v{} starting...", VERSION);

    // 2. Load configuration
    let db_path = std::env::var("ANTREAN_DB_PATH")
        .unwrap_or_else(|_| shellexpand::tilde(DEFAULT_DB_PATH).into_owned());

    let http_port: u16 = std::env::var("ANTREAN_HTTP_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_HTTP_PORT);

    // Clinic timezone is explicit configuration; "today" in queue
    // listings is computed from it, never from the server's locale
    let tz_offset_minutes: i32 = std::env::var("ANTREAN_TZ_OFFSET_MINUTES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    let clinic_offset = FixedOffset::east_opt(tz_offset_minutes * 60).ok_or_else(|| {
        anyhow::anyhow!("invalid ANTREAN_TZ_OFFSET_MINUTES: {}", tz_offset_minutes)
    })?;

    info!(db_path = %db_path, "Initializing database...");

    // 3. Initialize database
    let pool = create_pool(&db_path)
        .await
        .map_err(|e| anyhow::anyhow!("DB pool creation failed: {}", e))?;
    run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;

    // 4. Setup dependencies (DI wiring)
    let clock = Arc::new(SystemClock);
    let id_provider = Arc::new(UuidProvider);
    let queue_repo = Arc::new(SqliteQueueEntryRepository::new(pool.clone()));
    let patient_repo = Arc::new(SqlitePatientRepository::new(pool.clone()));
    let department_repo = Arc::new(SqliteDepartmentRepository::new(pool.clone()));
    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone()));

    let state = Arc::new(AppState {
        queue: QueueService::new(queue_repo, clock, clinic_offset),
        patients: PatientService::new(patient_repo, department_repo),
        users: UserAdminService::new(user_repo.clone()),
        accounts: AccountService::new(user_repo, id_provider),
    });

    // 5. Start HTTP server
    let router = build_router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], http_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received. Exiting gracefully...");
        })
        .await?;

    info!("Shutdown complete.");
    Ok(())
}
