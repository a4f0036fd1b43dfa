//! Follow-up task domain models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct ClinicTask {
    pub id: Uuid,
    pub appointment_id: Uuid,
    pub status: String,
    pub priority: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub appointment_id: Uuid,
    pub status: Option<String>,
    pub priority: Option<String>,
}
