//! Password hashing and verification
//!
//! Stored format is `base64(salt) ":" base64(derived_key)` with a 16-byte
//! random salt and a 32-byte key from PBKDF2-HMAC-SHA256 at 100,000
//! iterations. The format is a compatibility contract with existing stored
//! credentials and must not change.

use crate::error::AppError;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;

const SALT_LEN: usize = 16;
const KEY_LEN: usize = 32;
const ITERATIONS: u32 = 100_000;

/// PBKDF2 password hasher
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a password with a fresh random salt
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let mut salt = [0u8; SALT_LEN];
        rand::rngs::OsRng.fill_bytes(&mut salt);

        let mut key = [0u8; KEY_LEN];
        pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, ITERATIONS, &mut key);

        Ok(format!("{}:{}", BASE64.encode(salt), BASE64.encode(key)))
    }

    /// Verify a candidate password against a stored hash.
    ///
    /// The recomputed key is compared with a constant-time equality so the
    /// comparison leaks nothing about where the keys first differ. A
    /// malformed stored value verifies false rather than erroring, the same
    /// way a wrong password does.
    pub fn verify(&self, password: &str, stored_hash: &str) -> Result<(), AppError> {
        let mut parts = stored_hash.splitn(3, ':');
        let (salt_b64, key_b64) = match (parts.next(), parts.next(), parts.next()) {
            (Some(salt), Some(key), None) => (salt, key),
            _ => return Err(AppError::InvalidCredentials),
        };

        let salt = BASE64.decode(salt_b64).map_err(|_| AppError::InvalidCredentials)?;
        let expected_key = BASE64.decode(key_b64).map_err(|_| AppError::InvalidCredentials)?;

        let mut candidate_key = [0u8; KEY_LEN];
        pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, ITERATIONS, &mut candidate_key);

        if constant_time_eq::constant_time_eq(&candidate_key, &expected_key) {
            Ok(())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "Secr3t!";

        let hash = hasher.hash(password).unwrap();
        hasher.verify(password, &hash).unwrap();
    }

    #[test]
    fn test_hash_format_salt_colon_key() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("Secr3t!").unwrap();

        // Exactly one separator, both halves valid base64 of the right size
        assert_eq!(hash.matches(':').count(), 1);
        let (salt_b64, key_b64) = hash.split_once(':').unwrap();
        assert_eq!(BASE64.decode(salt_b64).unwrap().len(), SALT_LEN);
        assert_eq!(BASE64.decode(key_b64).unwrap().len(), KEY_LEN);
        assert!(!hash.contains("Secr3t!"));
    }

    #[test]
    fn test_verify_fails_with_wrong_password() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("Secr3t!").unwrap();
        assert!(hasher.verify("WrongPassword", &hash).is_err());
    }

    #[test]
    fn test_hash_is_different_each_time() {
        let hasher = PasswordHasher::new();
        let password = "Secr3t!";

        let hash1 = hasher.hash(password).unwrap();
        let hash2 = hasher.hash(password).unwrap();

        // Distinct random salts produce distinct stored strings
        assert_ne!(hash1, hash2);

        // Both still verify
        hasher.verify(password, &hash1).unwrap();
        hasher.verify(password, &hash2).unwrap();
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        let hasher = PasswordHasher::new();
        assert!(hasher.verify("Secr3t!", "no-separator").is_err());
        assert!(hasher.verify("Secr3t!", "a:b:c").is_err());
        assert!(hasher.verify("Secr3t!", "!!!not-base64!!!:AAAA").is_err());
    }
}
