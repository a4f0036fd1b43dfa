//! Patient persistence

use crate::{
    db::{Database, SqlParam},
    error::Result,
    models::Patient,
};
use sqlx::{postgres::PgRow, Row};
use uuid::Uuid;

pub struct PatientRepository {
    db: Database,
}

fn map_patient(row: &PgRow) -> std::result::Result<Patient, sqlx::Error> {
    Ok(Patient {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        date_of_birth: row.try_get("date_of_birth")?,
        email: row.try_get("email")?,
    })
}

impl PatientRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Patient>> {
        self.db
            .execute_reader(
                "SELECT id, name, date_of_birth, email FROM patient",
                map_patient,
                vec![],
            )
            .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Patient>> {
        let patients = self
            .db
            .execute_reader(
                "SELECT id, name, date_of_birth, email FROM patient WHERE id = $1",
                map_patient,
                vec![SqlParam::Uuid(id)],
            )
            .await?;

        Ok(patients.into_iter().next())
    }

    pub async fn insert(&self, patient: &Patient) -> Result<()> {
        self.db
            .execute_non_query(
                "INSERT INTO patient (id, name, date_of_birth, email) \
                 VALUES ($1, $2, $3, $4)",
                vec![
                    SqlParam::Uuid(patient.id),
                    SqlParam::Text(patient.name.clone()),
                    SqlParam::Timestamp(patient.date_of_birth),
                    SqlParam::Text(patient.email.clone()),
                ],
            )
            .await?;

        Ok(())
    }

    /// Returns the affected row count; zero means the patient was not found
    pub async fn update(&self, patient: &Patient) -> Result<u64> {
        self.db
            .execute_non_query(
                "UPDATE patient SET name = $2, date_of_birth = $3, email = $4 WHERE id = $1",
                vec![
                    SqlParam::Uuid(patient.id),
                    SqlParam::Text(patient.name.clone()),
                    SqlParam::Timestamp(patient.date_of_birth),
                    SqlParam::Text(patient.email.clone()),
                ],
            )
            .await
    }
}
