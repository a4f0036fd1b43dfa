//! Domain models and request/response DTOs

pub mod appointment;
pub mod patient;
pub mod task;
pub mod user;

pub use appointment::{Appointment, CreateAppointmentRequest, UpdateAppointmentRequest};
pub use patient::{CreatePatientRequest, Patient, UpdatePatientRequest};
pub use task::{ClinicTask, UpdateTaskRequest};
pub use user::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, Role, User};
