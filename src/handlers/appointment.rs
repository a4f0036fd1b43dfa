//! Appointment CRUD handlers

use crate::{
    auth::AuthContext,
    error::AppError,
    middleware::AppState,
    models::{Appointment, CreateAppointmentRequest, UpdateAppointmentRequest},
    repository::AppointmentRepository,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

/// GET /appointments
pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let appointments = AppointmentRepository::new(state.db.clone()).list().await?;
    Ok(Json(appointments))
}

/// GET /appointments/{patient_id} — all appointments for one patient
pub async fn list_appointments_for_patient(
    State(state): State<Arc<AppState>>,
    Path(patient_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let appointments = AppointmentRepository::new(state.db.clone())
        .list_by_patient(patient_id)
        .await?;
    Ok(Json(appointments))
}

/// POST /appointments
pub async fn create_appointment(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAppointmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let appointment_type = req
        .appointment_type
        .ok_or_else(|| AppError::validation("Must include type"))?;

    let appointment = Appointment {
        id: Uuid::new_v4(),
        patient_id: req.patient_id,
        date: req.date,
        appointment_type,
    };

    AppointmentRepository::new(state.db.clone())
        .insert(&appointment)
        .await?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

/// PUT /appointments/{id}
pub async fn update_appointment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateAppointmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let appointment_type = req
        .appointment_type
        .ok_or_else(|| AppError::validation("Must include reason for visit"))?;

    let appointment = Appointment {
        id,
        patient_id: req.patient_id,
        date: req.date,
        appointment_type,
    };

    let rows_affected = AppointmentRepository::new(state.db.clone())
        .update(&appointment)
        .await?;

    if rows_affected == 0 {
        return Err(AppError::not_found("Appointment was not found"));
    }
    Ok(Json(appointment))
}

/// DELETE /appointments/{id} — 204 whether or not the row existed
pub async fn delete_appointment(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    AppointmentRepository::new(state.db.clone()).delete(id).await?;
    tracing::info!(appointment_id = %id, deleted_by = %auth.username, "Appointment deleted");
    Ok(StatusCode::NO_CONTENT)
}
