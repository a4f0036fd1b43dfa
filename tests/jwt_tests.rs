//! Session token integration tests

mod common;

use clinic_scheduler::auth::jwt::TokenService;
use uuid::Uuid;

#[test]
fn test_issue_verify_round_trip_preserves_identity() {
    let config = common::create_test_config();
    let service = TokenService::from_config(&config).unwrap();

    let user_id = Uuid::new_v4();
    let token = service.issue(&user_id, "jdoe", "ClinicalStaff").unwrap();

    let claims = service.verify(&token).unwrap();
    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.username, "jdoe");
    assert_eq!(claims.role, "ClinicalStaff");
}

#[test]
fn test_verify_rejects_flipped_signature_byte() {
    let config = common::create_test_config();
    let service = TokenService::from_config(&config).unwrap();

    let token = service.issue(&Uuid::new_v4(), "jdoe", "FrontDesk").unwrap();

    let mut tampered = token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'x' { 'y' } else { 'x' });

    assert!(service.verify(&tampered).is_err());
}

#[test]
fn test_verify_rejects_mutated_payload() {
    let config = common::create_test_config();
    let service = TokenService::from_config(&config).unwrap();

    let token = service.issue(&Uuid::new_v4(), "jdoe", "FrontDesk").unwrap();

    // Swap the payload segment for a different token's payload; the
    // signature no longer covers it
    let other = service.issue(&Uuid::new_v4(), "mallory", "ClinicalStaff").unwrap();
    let parts: Vec<&str> = token.split('.').collect();
    let other_parts: Vec<&str> = other.split('.').collect();
    let spliced = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);

    assert!(service.verify(&spliced).is_err());
}
