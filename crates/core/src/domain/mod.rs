// Domain Layer - Pure business logic and entities

pub mod department;
pub mod error;
pub mod pagination;
pub mod patient;
pub mod queue_entry;
pub mod user;

// Re-exports
pub use department::Department;
pub use error::DomainError;
pub use pagination::{PageInfo, PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use patient::{NewPatient, Patient};
pub use queue_entry::{QueueEntry, QueueEntryId, QueueStatus};
pub use user::User;
