//! Follow-up task handlers

use crate::{
    error::AppError,
    middleware::AppState,
    models::{ClinicTask, UpdateTaskRequest},
    repository::TaskRepository,
};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

/// GET /tasks
pub async fn list_tasks(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let tasks = TaskRepository::new(state.db.clone()).list().await?;
    Ok(Json(tasks))
}

/// GET /tasks/{status}
pub async fn list_tasks_by_status(
    State(state): State<Arc<AppState>>,
    Path(status): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if status.is_empty() {
        return Err(AppError::validation("Must include a status"));
    }

    let tasks = TaskRepository::new(state.db.clone())
        .list_by_status(&status)
        .await?;
    Ok(Json(tasks))
}

/// PUT /tasks/{id}
pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<impl IntoResponse, AppError> {
    let status = req
        .status
        .ok_or_else(|| AppError::validation("Must include status"))?;
    let priority = req
        .priority
        .ok_or_else(|| AppError::validation("Must include priority"))?;

    let task = ClinicTask {
        id,
        appointment_id: req.appointment_id,
        status,
        priority,
    };

    let rows_affected = TaskRepository::new(state.db.clone()).update(&task).await?;

    if rows_affected == 0 {
        return Err(AppError::not_found("Task was not found"));
    }
    Ok(Json(task))
}

/// PUT /tasks/markOverdue/{id}
pub async fn mark_task_overdue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let rows_affected = TaskRepository::new(state.db.clone()).mark_overdue(id).await?;

    if rows_affected == 0 {
        return Err(AppError::not_found("Task was not found"));
    }
    Ok(())
}
