//! Patient domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub date_of_birth: DateTime<Utc>,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct CreatePatientRequest {
    pub name: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub email: Option<String>,
}

pub type UpdatePatientRequest = CreatePatientRequest;
