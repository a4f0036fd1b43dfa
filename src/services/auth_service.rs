//! Registration and login business rules, independent of transport

use crate::{
    auth::{jwt::TokenService, password::PasswordHasher},
    db::Database,
    error::{AppError, Result},
    models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, Role, User},
    repository::UserRepository,
    validation,
};
use once_cell::sync::Lazy;
use std::sync::Arc;
use uuid::Uuid;

/// Well-formed hash of a throwaway password, verified on the unknown-user
/// login path so that path costs the same PBKDF2 work as a real mismatch.
static DUMMY_HASH: Lazy<String> = Lazy::new(|| {
    PasswordHasher::new()
        .hash("dummy-password-for-timing-equalization")
        .expect("dummy hash generation cannot fail")
});

pub struct AuthService {
    users: UserRepository,
    token_service: Arc<TokenService>,
}

impl AuthService {
    pub fn new(db: Database, token_service: Arc<TokenService>) -> Self {
        Self {
            users: UserRepository::new(db),
            token_service,
        }
    }

    /// Register a new staff account.
    ///
    /// The username pre-check is an optimization; the store's uniqueness
    /// constraint is the authoritative guard, so a concurrent registration
    /// losing the race still comes back as a conflict.
    pub async fn register(&self, req: RegisterRequest) -> Result<RegisterResponse> {
        let username = req
            .username
            .ok_or_else(|| AppError::validation("Must include username"))?;
        let password = req
            .password
            .ok_or_else(|| AppError::validation("Must include password"))?;
        let role_str = req
            .role
            .ok_or_else(|| AppError::validation("Must include role"))?;

        let role: Role = role_str
            .parse()
            .map_err(|_| AppError::validation("Role must be 'FrontDesk' or 'ClinicalStaff'"))?;

        let email = req.email.unwrap_or_default();
        if !validation::is_valid_email(&email) {
            return Err(AppError::validation("Invalid email"));
        }

        let phone = req.phone.unwrap_or_default();
        if !validation::is_valid_phone(&phone) {
            return Err(AppError::validation("Invalid phone number"));
        }

        if self.users.username_exists(&username).await? {
            return Err(AppError::conflict("Username already exists"));
        }

        let password_hash = hash_blocking(password).await?;

        let user = User {
            id: Uuid::new_v4(),
            username,
            password_hash,
            role: role.as_str().to_string(),
            email: Some(email),
            phone: Some(phone),
        };

        if let Err(e) = self.users.insert(&user).await {
            // The losing writer of a concurrent registration lands here
            return Err(match e {
                AppError::Conflict(_) => AppError::conflict("Username already exists"),
                other => other,
            });
        }

        tracing::info!(user_id = %user.id, "User registered");

        Ok(RegisterResponse {
            id: user.id,
            username: user.username,
            role: user.role,
        })
    }

    /// Authenticate and issue a session token.
    ///
    /// Unknown username and wrong password return the identical error, and
    /// the unknown-user path still performs a full PBKDF2 verification
    /// against a dummy hash so neither content nor timing reveals whether
    /// the username exists.
    pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse> {
        let username = req
            .username
            .ok_or_else(|| AppError::validation("Must include username"))?;
        let password = req
            .password
            .ok_or_else(|| AppError::validation("Must include password"))?;

        let user = self.users.find_by_username(&username).await?;

        let stored_hash = user
            .as_ref()
            .map(|u| u.password_hash.clone())
            .unwrap_or_else(|| DUMMY_HASH.clone());

        let verified = verify_blocking(password, stored_hash).await?;

        let user = match user {
            Some(u) if verified => u,
            _ => return Err(AppError::InvalidCredentials),
        };

        let token = self
            .token_service
            .issue(&user.id, &user.username, &user.role)?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginResponse { token })
    }
}

/// PBKDF2 at 100k iterations is CPU-bound; run it off the async executor
async fn hash_blocking(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || PasswordHasher::new().hash(&password))
        .await
        .map_err(|e| AppError::Internal(format!("Hashing task failed: {}", e)))?
}

async fn verify_blocking(password: String, stored_hash: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || {
        PasswordHasher::new().verify(&password, &stored_hash).is_ok()
    })
    .await
    .map_err(|e| AppError::Internal(format!("Hashing task failed: {}", e)))
}
