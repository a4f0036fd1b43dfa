//! Session token issuance and verification
//!
//! Tokens are stateless HS256 JWTs carrying identity and role claims. There
//! is no server-side session table and no revocation list; expiry is the
//! only time-based invalidation.

use crate::{config::AppConfig, error::AppError};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session token claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Username
    pub username: String,

    /// Role
    pub role: String,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Issued at
    pub iat: i64,

    /// Expiration
    pub exp: i64,
}

/// Token issuer/verifier. Built once from config; signing key material lives
/// only inside the encoding/decoding keys and is never logged.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
    expire_minutes: u64,
}

impl TokenService {
    /// Create token service from config
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let secret = config.jwt.secret.expose_secret();

        // HS256 needs a key with real entropy
        if secret.len() < 32 {
            return Err(AppError::Config("JWT secret too short (min 32 chars)".to_string()));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer: config.jwt.issuer.clone(),
            audience: config.jwt.audience.clone(),
            expire_minutes: config.jwt.expire_minutes,
        })
    }

    /// Issue a signed session token for an authenticated user
    pub fn issue(&self, user_id: &Uuid, username: &str, role: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.expire_minutes as i64);

        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            role: role.to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode session token: {:?}", e);
            AppError::Internal(format!("Failed to encode session token: {}", e))
        })
    }

    /// Validate a presented token and return its claims.
    ///
    /// Signature, issuer, audience and expiry are all checked; expiry uses
    /// zero leeway so a token expired by one second is already invalid. Any
    /// failure collapses into the same `Unauthorized` error.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.leeway = 0;

        Ok(decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| {
                tracing::debug!("Token validation failed: {:?}", e);
                AppError::Unauthorized
            })?
            .claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, DatabaseConfig, JwtConfig, LoggingConfig, ServerConfig};
    use secrecy::Secret;

    fn test_config() -> AppConfig {
        AppConfig {
            server: ServerConfig {
                addr: "127.0.0.1:3000".to_string(),
                graceful_shutdown_timeout_secs: 30,
            },
            database: DatabaseConfig {
                url: Secret::new("postgresql://localhost/test".to_string()),
                max_connections: 10,
                min_connections: 1,
                acquire_timeout_secs: 30,
                idle_timeout_secs: 600,
                max_lifetime_secs: 1800,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "json".to_string(),
            },
            jwt: JwtConfig {
                secret: Secret::new("test_secret_key_32_characters_long!".to_string()),
                issuer: "clinic-scheduler".to_string(),
                audience: "clinic-scheduler".to_string(),
                expire_minutes: 60,
            },
        }
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = TokenService::from_config(&test_config()).unwrap();
        let user_id = Uuid::new_v4();

        let token = service.issue(&user_id, "jdoe", "FrontDesk").unwrap();

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.username, "jdoe");
        assert_eq!(claims.role, "FrontDesk");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let service = TokenService::from_config(&test_config()).unwrap();
        assert!(service.verify("not-a-token").is_err());
        assert!(service.verify("").is_err());
    }

    #[test]
    fn test_verify_rejects_tampered_signature() {
        let service = TokenService::from_config(&test_config()).unwrap();
        let token = service.issue(&Uuid::new_v4(), "jdoe", "FrontDesk").unwrap();

        // Flip the final signature character
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        assert!(service.verify(&tampered).is_err());
    }

    #[test]
    fn test_verify_rejects_wrong_key() {
        let service = TokenService::from_config(&test_config()).unwrap();

        let mut other_config = test_config();
        other_config.jwt.secret =
            Secret::new("another_secret_key_32_characters!!!!".to_string());
        let other = TokenService::from_config(&other_config).unwrap();

        let token = other.issue(&Uuid::new_v4(), "jdoe", "FrontDesk").unwrap();
        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let config = test_config();
        let service = TokenService::from_config(&config).unwrap();

        // Craft a token signed with the same key whose expiry is one second
        // in the past
        let now = Utc::now();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            username: "jdoe".to_string(),
            role: "FrontDesk".to_string(),
            iss: "clinic-scheduler".to_string(),
            aud: "clinic-scheduler".to_string(),
            iat: now.timestamp() - 61,
            exp: now.timestamp() - 1,
        };
        let key = EncodingKey::from_secret(
            config.jwt.secret.expose_secret().as_bytes(),
        );
        let expired = encode(&Header::default(), &claims, &key).unwrap();

        assert!(service.verify(&expired).is_err());
    }

    #[test]
    fn test_verify_rejects_wrong_issuer_or_audience() {
        let service = TokenService::from_config(&test_config()).unwrap();

        let mut other_config = test_config();
        other_config.jwt.issuer = "someone-else".to_string();
        let other = TokenService::from_config(&other_config).unwrap();

        let token = other.issue(&Uuid::new_v4(), "jdoe", "FrontDesk").unwrap();
        assert!(service.verify(&token).is_err());
    }
}
