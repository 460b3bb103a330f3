// Antrean Infrastructure - SQLite Adapter
// Implements: QueueEntryRepository, PatientRepository,
// DepartmentRepository, UserRepository

mod connection;
mod department_repository;
mod error;
mod migration;
mod patient_repository;
mod queue_repository;
mod user_repository;

pub use connection::create_pool;
pub use department_repository::SqliteDepartmentRepository;
pub use migration::run_migrations;
pub use patient_repository::SqlitePatientRepository;
pub use queue_repository::SqliteQueueEntryRepository;
pub use user_repository::SqliteUserRepository;

// Note: sqlx::Error conversion is handled by wrapping in helper functions
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
