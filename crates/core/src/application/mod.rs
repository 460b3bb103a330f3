// Application Layer - Use Cases and Business Logic

pub mod account;
pub mod patient;
pub mod queue;
pub mod user_admin;

// Re-exports
pub use account::AccountService;
pub use patient::PatientService;
pub use queue::QueueService;
pub use user_admin::UserAdminService;
