//! User credential models

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Staff role carried in the session token. Fixed set; immutable once issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    FrontDesk,
    ClinicalStaff,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::FrontDesk => "FrontDesk",
            Role::ClinicalStaff => "ClinicalStaff",
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FrontDesk" => Ok(Role::FrontDesk),
            "ClinicalStaff" => Ok(Role::ClinicalStaff),
            _ => Err(()),
        }
    }
}

/// Persisted credential record. The password hash is opaque salt+key
/// material and never leaves the service in a response.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Public fields of a freshly created credential record
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: Uuid,
    pub username: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!("FrontDesk".parse::<Role>(), Ok(Role::FrontDesk));
        assert_eq!("ClinicalStaff".parse::<Role>(), Ok(Role::ClinicalStaff));
        assert_eq!(Role::FrontDesk.as_str(), "FrontDesk");
    }

    #[test]
    fn test_role_rejects_unknown() {
        assert!("Admin".parse::<Role>().is_err());
        assert!("frontdesk".parse::<Role>().is_err());
    }
}
