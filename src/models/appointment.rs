//! Appointment domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub date: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub appointment_type: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateAppointmentRequest {
    pub patient_id: Uuid,
    pub date: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub appointment_type: Option<String>,
}

pub type UpdateAppointmentRequest = CreateAppointmentRequest;
