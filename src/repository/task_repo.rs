//! Follow-up task persistence

use crate::{
    db::{Database, SqlParam},
    error::Result,
    models::ClinicTask,
};
use sqlx::{postgres::PgRow, Row};
use uuid::Uuid;

pub struct TaskRepository {
    db: Database,
}

fn map_task(row: &PgRow) -> std::result::Result<ClinicTask, sqlx::Error> {
    Ok(ClinicTask {
        id: row.try_get("id")?,
        appointment_id: row.try_get("appointment_id")?,
        status: row.try_get("status")?,
        priority: row.try_get("priority")?,
    })
}

impl TaskRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<ClinicTask>> {
        self.db
            .execute_reader(
                "SELECT id, appointment_id, status, priority FROM task",
                map_task,
                vec![],
            )
            .await
    }

    pub async fn list_by_status(&self, status: &str) -> Result<Vec<ClinicTask>> {
        self.db
            .execute_reader(
                "SELECT id, appointment_id, status, priority FROM task WHERE status LIKE $1",
                map_task,
                vec![SqlParam::Text(status.to_string())],
            )
            .await
    }

    /// Returns the affected row count; zero means the task was not found
    pub async fn update(&self, task: &ClinicTask) -> Result<u64> {
        self.db
            .execute_non_query(
                "UPDATE task SET appointment_id = $2, status = $3, priority = $4 WHERE id = $1",
                vec![
                    SqlParam::Uuid(task.id),
                    SqlParam::Uuid(task.appointment_id),
                    SqlParam::Text(task.status.clone()),
                    SqlParam::Text(task.priority.clone()),
                ],
            )
            .await
    }

    pub async fn mark_overdue(&self, id: Uuid) -> Result<u64> {
        self.db
            .execute_non_query(
                "UPDATE task SET status = $2 WHERE id = $1",
                vec![SqlParam::Uuid(id), SqlParam::Text("Overdue".to_string())],
            )
            .await
    }
}
