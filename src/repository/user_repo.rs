//! Credential record persistence

use crate::{
    db::{Database, SqlParam},
    error::Result,
    models::User,
};
use sqlx::{postgres::PgRow, Row};
use uuid::Uuid;

pub struct UserRepository {
    db: Database,
}

fn map_user(row: &PgRow) -> std::result::Result<User, sqlx::Error> {
    Ok(User {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        password_hash: row.try_get("password_hash")?,
        role: row.try_get("role")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
    })
}

impl UserRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Case-sensitive lookup; at most one row by the uniqueness constraint
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let users = self
            .db
            .execute_reader(
                "SELECT id, username, password_hash, role, email, phone \
                 FROM users WHERE username = $1",
                map_user,
                vec![SqlParam::Text(username.to_string())],
            )
            .await?;

        Ok(users.into_iter().next())
    }

    /// Existence pre-check used by registration; cheaper than fetching the
    /// whole record
    pub async fn username_exists(&self, username: &str) -> Result<bool> {
        let id: Option<Uuid> = self
            .db
            .execute_scalar(
                "SELECT id FROM users WHERE username = $1",
                vec![SqlParam::Text(username.to_string())],
            )
            .await?;

        Ok(id.is_some())
    }

    /// Insert a new credential record. The `users.username` UNIQUE
    /// constraint is the authoritative uniqueness guard; a violation
    /// surfaces as a conflict from the executor's error mapping.
    pub async fn insert(&self, user: &User) -> Result<()> {
        self.db
            .execute_non_query(
                "INSERT INTO users (id, username, password_hash, role, email, phone) \
                 VALUES ($1, $2, $3, $4, $5, $6)",
                vec![
                    SqlParam::Uuid(user.id),
                    SqlParam::Text(user.username.clone()),
                    SqlParam::Text(user.password_hash.clone()),
                    SqlParam::Text(user.role.clone()),
                    SqlParam::TextOpt(user.email.clone()),
                    SqlParam::TextOpt(user.phone.clone()),
                ],
            )
            .await?;

        Ok(())
    }
}
