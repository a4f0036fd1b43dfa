//! Data access layer: every accessor goes through the parameterized
//! statement executor in [`crate::db::Database`].

pub mod appointment_repo;
pub mod patient_repo;
pub mod task_repo;
pub mod user_repo;

pub use appointment_repo::AppointmentRepository;
pub use patient_repo::PatientRepository;
pub use task_repo::TaskRepository;
pub use user_repo::UserRepository;
