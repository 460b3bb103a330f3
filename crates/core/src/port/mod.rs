// Port Layer - Interfaces for external dependencies

pub mod clock; // For deterministic "today"
pub mod department_repository;
pub mod id_provider; // For deterministic testing
pub mod patient_repository;
pub mod queue_repository;
pub mod user_repository;

// Re-exports
pub use clock::{clinic_date, Clock, SystemClock};
pub use department_repository::DepartmentRepository;
pub use id_provider::{IdProvider, UuidProvider};
pub use patient_repository::PatientRepository;
pub use queue_repository::{
    DoctorQueueQuery, DoctorQueueRow, PickupQueueQuery, PickupQueueRow, QueueEntryRepository,
};
pub use user_repository::UserRepository;
