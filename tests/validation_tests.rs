//! Input format rule tests: these patterns are an interoperability contract

use clinic_scheduler::validation::{is_valid_email, is_valid_phone};

#[test]
fn test_email_pattern() {
    assert!(is_valid_email("j@x.com"));
    assert!(is_valid_email("nurse.jones+oncall@clinic-name.org"));
    assert!(is_valid_email("FRONT.DESK@CLINIC.COM"));

    assert!(!is_valid_email("not-an-email"));
    assert!(!is_valid_email("j@x"));
    assert!(!is_valid_email("j@x.c"));
    assert!(!is_valid_email(""));
}

#[test]
fn test_phone_pattern() {
    assert!(is_valid_phone("555-123-4567"));
    assert!(is_valid_phone("(555)123-4567"));
    assert!(is_valid_phone("(555) 123 4567"));
    assert!(is_valid_phone("555.123.4567"));
    assert!(is_valid_phone("5551234567"));

    assert!(!is_valid_phone("555-123-456"));
    assert!(!is_valid_phone("55-1234-5678"));
    assert!(!is_valid_phone("call me"));
    assert!(!is_valid_phone(""));
}
