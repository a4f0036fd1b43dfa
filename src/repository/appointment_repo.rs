//! Appointment persistence

use crate::{
    db::{Database, SqlParam},
    error::Result,
    models::Appointment,
};
use sqlx::{postgres::PgRow, Row};
use uuid::Uuid;

pub struct AppointmentRepository {
    db: Database,
}

fn map_appointment(row: &PgRow) -> std::result::Result<Appointment, sqlx::Error> {
    Ok(Appointment {
        id: row.try_get("id")?,
        patient_id: row.try_get("patient_id")?,
        date: row.try_get("date")?,
        appointment_type: row.try_get("type")?,
    })
}

impl AppointmentRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Appointment>> {
        self.db
            .execute_reader(
                "SELECT id, patient_id, date, type FROM appointment",
                map_appointment,
                vec![],
            )
            .await
    }

    pub async fn list_by_patient(&self, patient_id: Uuid) -> Result<Vec<Appointment>> {
        self.db
            .execute_reader(
                "SELECT id, patient_id, date, type FROM appointment WHERE patient_id = $1",
                map_appointment,
                vec![SqlParam::Uuid(patient_id)],
            )
            .await
    }

    pub async fn insert(&self, appointment: &Appointment) -> Result<()> {
        self.db
            .execute_non_query(
                "INSERT INTO appointment (id, patient_id, date, type) VALUES ($1, $2, $3, $4)",
                vec![
                    SqlParam::Uuid(appointment.id),
                    SqlParam::Uuid(appointment.patient_id),
                    SqlParam::TimestampOpt(appointment.date),
                    SqlParam::Text(appointment.appointment_type.clone()),
                ],
            )
            .await?;

        Ok(())
    }

    /// Returns the affected row count; zero means the appointment was not found
    pub async fn update(&self, appointment: &Appointment) -> Result<u64> {
        self.db
            .execute_non_query(
                "UPDATE appointment SET patient_id = $2, date = $3, type = $4 WHERE id = $1",
                vec![
                    SqlParam::Uuid(appointment.id),
                    SqlParam::Uuid(appointment.patient_id),
                    SqlParam::TimestampOpt(appointment.date),
                    SqlParam::Text(appointment.appointment_type.clone()),
                ],
            )
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64> {
        self.db
            .execute_non_query(
                "DELETE FROM appointment WHERE id = $1",
                vec![SqlParam::Uuid(id)],
            )
            .await
    }
}
