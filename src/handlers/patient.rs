//! Patient CRUD handlers

use crate::{
    auth::AuthContext,
    error::AppError,
    middleware::AppState,
    models::{CreatePatientRequest, Patient, UpdatePatientRequest},
    repository::PatientRepository,
    validation,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

fn validated_fields(req: CreatePatientRequest) -> Result<(String, chrono::DateTime<chrono::Utc>, String), AppError> {
    let name = req
        .name
        .ok_or_else(|| AppError::validation("Must include name"))?;
    let date_of_birth = req
        .date_of_birth
        .ok_or_else(|| AppError::validation("Must include date of birth"))?;
    let email = req
        .email
        .ok_or_else(|| AppError::validation("Must include email"))?;
    if !validation::is_valid_email(&email) {
        return Err(AppError::validation("Not a valid email"));
    }
    Ok((name, date_of_birth, email))
}

/// GET /patients
pub async fn list_patients(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let patients = PatientRepository::new(state.db.clone()).list().await?;
    Ok(Json(patients))
}

/// GET /patients/{id}
pub async fn get_patient(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let patient = PatientRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Patient was not found"))?;
    Ok(Json(patient))
}

/// POST /patients
pub async fn create_patient(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    Json(req): Json<CreatePatientRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (name, date_of_birth, email) = validated_fields(req)?;

    let patient = Patient {
        id: Uuid::new_v4(),
        name,
        date_of_birth,
        email,
    };

    PatientRepository::new(state.db.clone())
        .insert(&patient)
        .await?;

    tracing::info!(patient_id = %patient.id, created_by = %auth.username, "Patient created");

    Ok((StatusCode::CREATED, Json(patient)))
}

/// PUT /patients/{id}
pub async fn update_patient(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePatientRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (name, date_of_birth, email) = validated_fields(req)?;

    let patient = Patient {
        id,
        name,
        date_of_birth,
        email,
    };

    let rows_affected = PatientRepository::new(state.db.clone())
        .update(&patient)
        .await?;

    if rows_affected == 0 {
        return Err(AppError::not_found("Patient was not found"));
    }
    Ok(Json(patient))
}
